use uuid::Uuid;

/// Identifier assigned when a client does not bring its own.
pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}

/// Keeps a client-supplied identifier, generating one when it is absent.
pub fn resolve_record_id(supplied: Option<String>) -> String {
    supplied.unwrap_or_else(new_record_id)
}
