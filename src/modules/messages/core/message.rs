use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::record_id::resolve_record_id;
use crate::shared::core::status::Status;
use crate::shared::core::timestamp;
use crate::shared::core::tracked_record::TrackedRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub content: String,
    pub status: Status,
    pub timestamp: DateTime<Utc>,
}

/// Incoming shape of a message before defaults are filled in.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub content: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewMessage {
    pub fn into_message(self, now: DateTime<Utc>) -> Message {
        Message {
            id: resolve_record_id(self.id),
            name: self.name,
            phone: self.phone,
            content: self.content,
            status: self.status,
            timestamp: self.timestamp.unwrap_or(now),
        }
    }
}

impl TrackedRecord for Message {
    const KIND: &'static str = "Message";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &Status {
        &self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
