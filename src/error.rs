//! Error types surfaced to the UI layer

/// Why a round could not be started
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("Username must be between 2 and 12 characters")]
    UsernameLength { len: usize },
}

/// Settings could not be parsed
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
