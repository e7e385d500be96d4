use crate::modules::calls::core::call::Call;
use crate::modules::current_user::adapters::outbound::slot_in_memory::InMemoryCurrentUserSlot;
use crate::modules::messages::core::message::Message;
use crate::shared::application::record_tracker::RecordTracker;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory()
}

/// Every adapter behind the state answers with a backend failure.
pub fn make_offline_state() -> AppState {
    let mut messages = InMemoryRecordStore::<Message>::new();
    messages.toggle_offline();
    let mut calls = InMemoryRecordStore::<Call>::new();
    calls.toggle_offline();
    let mut current_user = InMemoryCurrentUserSlot::new();
    current_user.toggle_offline();

    AppState {
        messages: Arc::new(RecordTracker::new(Arc::new(messages))),
        calls: Arc::new(RecordTracker::new(Arc::new(calls))),
        current_user: Arc::new(current_user),
    }
}
