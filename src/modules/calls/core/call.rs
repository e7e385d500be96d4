use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::record_id::resolve_record_id;
use crate::shared::core::status::Status;
use crate::shared::core::timestamp;
use crate::shared::core::tracked_record::TrackedRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub timestamp: DateTime<Utc>,
    pub status: Status,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCall {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Status,
}

impl NewCall {
    pub fn into_call(self, now: DateTime<Utc>) -> Call {
        Call {
            id: resolve_record_id(self.id),
            name: self.name,
            phone: self.phone,
            timestamp: self.timestamp.unwrap_or(now),
            status: self.status,
        }
    }
}

impl TrackedRecord for Call {
    const KIND: &'static str = "Call";

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
