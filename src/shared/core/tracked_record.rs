// A record that moves through the pending/accepted workflow.
//
// Messages and calls share the same lifecycle: appended once, never removed,
// only their status is overwritten. Stores and use cases are written against
// this trait so both sequences behave identically.

use crate::shared::core::status::Status;

pub trait TrackedRecord: Clone + Send + Sync + 'static {
    /// Human readable kind, used in error details ("Message not found").
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn status(&self) -> &Status;
    fn set_status(&mut self, status: Status);
}
