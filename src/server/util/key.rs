use uuid::Uuid;

/// Generates the key of a newly created document when the client supplied none.
pub fn generate_key() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the client supplied key, or a generated one when absent or blank.
pub fn key_or_generate(id: Option<String>) -> String {
    id.filter(|id| !id.trim().is_empty())
        .unwrap_or_else(generate_key)
}
