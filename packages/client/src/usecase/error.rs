//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{GatewayError, ValueObjectError};

/// Errors of the private room access flow.
///
/// A wrong password is not an error (see `PasswordOutcome::Mismatch`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnterRoomError {
    /// Input rejected before reaching the backend
    #[error("invalid password: {0}")]
    InvalidPassword(#[from] ValueObjectError),

    /// Backend could not verify the password
    #[error("password check failed: {0}")]
    Gateway(#[from] GatewayError),
}
