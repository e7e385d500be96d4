use crate::modules::solicitudes::core::partition::{Solicitudes, partition_by_status};
use crate::shared::infrastructure::record_store::StoreError;
use crate::shell::state::AppState;

/// Reads both sequences and partitions them. Read-only.
pub async fn list_solicitudes(state: &AppState) -> Result<Solicitudes, StoreError> {
    let messages = state.messages.list().await?;
    let calls = state.calls.list().await?;
    Ok(partition_by_status(&messages, &calls))
}
