/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: String, reason: String },

    #[error("config read failed: {path}: {reason}")]
    Io { path: String, reason: String },
}
