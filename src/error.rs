use std::io;
use thiserror::Error;

/// Failure of a delayed square request.
/// There is exactly one way for a request to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("Negative number not allowed")]
    InvalidInput { value: i32 },
}

impl SquareError {
    pub fn invalid_input(value: i32) -> Self {
        Self::InvalidInput { value }
    }

    /// The request value that was rejected.
    pub fn value(&self) -> i32 {
        match self {
            Self::InvalidInput { value } => *value,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}
