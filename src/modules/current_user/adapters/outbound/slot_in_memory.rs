use crate::modules::current_user::core::current_user::CurrentUser;
use crate::modules::current_user::core::ports::CurrentUserSlot;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCurrentUserSlot {
    user: RwLock<Option<CurrentUser>>,
    is_offline: bool,
}

impl InMemoryCurrentUserSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl CurrentUserSlot for InMemoryCurrentUserSlot {
    async fn set(&self, user: CurrentUser) -> anyhow::Result<CurrentUser> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Current user slot offline"));
        }

        *self.user.write().await = Some(user.clone());
        tracing::info!(id = %user.id, "current user set");
        Ok(user)
    }

    async fn get(&self) -> anyhow::Result<Option<CurrentUser>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Current user slot offline"));
        }

        Ok(self.user.read().await.clone())
    }
}
