use crate::modules::calls::core::call::Call;
use crate::modules::current_user::adapters::outbound::slot_in_memory::InMemoryCurrentUserSlot;
use crate::modules::current_user::core::ports::CurrentUserSlot;
use crate::modules::messages::core::message::Message;
use crate::shared::application::record_tracker::RecordTracker;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<RecordTracker<Message>>,
    pub calls: Arc<RecordTracker<Call>>,
    pub current_user: Arc<dyn CurrentUserSlot>,
}

impl AppState {
    /// Process-local storage; everything is lost on restart.
    pub fn in_memory() -> Self {
        Self {
            messages: Arc::new(RecordTracker::new(Arc::new(
                InMemoryRecordStore::<Message>::new(),
            ))),
            calls: Arc::new(RecordTracker::new(Arc::new(
                InMemoryRecordStore::<Call>::new(),
            ))),
            current_user: Arc::new(InMemoryCurrentUserSlot::new()),
        }
    }
}
