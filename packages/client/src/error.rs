//! Client-level error definitions.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
