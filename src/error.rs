use thiserror::Error;

/// Maximum name length in characters for player and server names, matching
/// the `VARCHAR(80)` columns.
pub const MAX_NAME_LEN: usize = 80;

#[derive(Debug, Error)]
pub enum PresenceError {
    /// Bad input, rejected before any storage access. Caller must fix it.
    #[error("validation error: {0}")]
    Validation(String),

    /// The underlying store failed. Transient; caller decides retry policy.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Rejects empty or oversized names. Used for both player and server names.
pub fn validate_name(kind: &str, name: &str) -> Result<(), PresenceError> {
    if name.is_empty() {
        return Err(PresenceError::Validation(format!("{} name is empty", kind)));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(PresenceError::Validation(format!(
            "{} name exceeds {} characters: {}",
            kind, MAX_NAME_LEN, name
        )));
    }
    Ok(())
}
