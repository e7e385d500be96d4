// What the current user use cases need from storage.
//
// The slot holds at most one value. Setting it replaces whatever was there,
// no history is kept.

use crate::modules::current_user::core::current_user::CurrentUser;
use async_trait::async_trait;

#[async_trait]
pub trait CurrentUserSlot: Send + Sync {
    async fn set(&self, user: CurrentUser) -> anyhow::Result<CurrentUser>;
    async fn get(&self) -> anyhow::Result<Option<CurrentUser>>;
}
