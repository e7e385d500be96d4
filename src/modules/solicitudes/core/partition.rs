// Splits tracked records into pending requests and active conversations.
//
// Messages always come before calls within a group, each in insertion order.
// Records whose status is neither pending nor accepted are left out.

use serde::Serialize;

use crate::modules::calls::core::call::Call;
use crate::modules::messages::core::message::Message;
use crate::shared::core::status::Status;
use crate::shared::core::tracked_record::TrackedRecord;

/// A message or a call, serialized as its own plain object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TrackedItem {
    Message(Message),
    Call(Call),
}

impl TrackedItem {
    pub fn status(&self) -> &Status {
        match self {
            TrackedItem::Message(message) => message.status(),
            TrackedItem::Call(call) => call.status(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Solicitudes {
    pub solicitudes: Vec<TrackedItem>,
    pub conversaciones_activas: Vec<TrackedItem>,
}

pub fn partition_by_status(messages: &[Message], calls: &[Call]) -> Solicitudes {
    let items = messages
        .iter()
        .cloned()
        .map(TrackedItem::Message)
        .chain(calls.iter().cloned().map(TrackedItem::Call));

    let mut partition = Solicitudes::default();
    for item in items {
        if *item.status() == Status::Pending {
            partition.solicitudes.push(item);
        } else if *item.status() == Status::Accepted {
            partition.conversaciones_activas.push(item);
        }
    }
    partition
}
