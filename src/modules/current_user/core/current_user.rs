use serde::{Deserialize, Serialize};

use crate::shared::core::record_id::resolve_record_id;

/// The operator identity held for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCurrentUser {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<NewCurrentUser> for CurrentUser {
    fn from(body: NewCurrentUser) -> Self {
        Self {
            id: resolve_record_id(body.id),
            name: body.name,
            phone: body.phone,
            email: body.email,
        }
    }
}
