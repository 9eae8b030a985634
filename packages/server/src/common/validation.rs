use thiserror::Error;

/// A rejected form or query input. The message is shown to the caller verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self(format!("Missing required field: {}", field))
    }
}

/// Fails when `value` is empty after trimming.
pub fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}
