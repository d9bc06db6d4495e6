//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId too long error
    #[error("RoomId cannot exceed {max} characters (got {actual})")]
    RoomIdTooLong { max: usize, actual: usize },

    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,

    /// Password validation error
    #[error("Password cannot be empty")]
    PasswordEmpty,

    /// Page size must allow at least one room per request
    #[error("Page size must be greater than zero")]
    PageSizeZero,

    /// Occupancy reported above capacity
    #[error("Room occupancy {occupancy} exceeds capacity {capacity}")]
    OccupancyExceedsCapacity { capacity: u32, occupancy: u32 },

    /// Elapsed time text not in HH:MM:SS form
    #[error("Elapsed time must be formatted as HH:MM:SS (got: {0})")]
    ElapsedTimeInvalidFormat(String),

    /// Unknown client route
    #[error("Unknown route: {0}")]
    RouteUnknown(String),
}

/// Errors returned by the backend gateway.
///
/// Password mismatch is not an error: it is a regular verdict
/// (see [`super::PasswordVerdict`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Network or transport failure (connection refused, timeout, ...)
    #[error("network error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body could not be understood
    #[error("invalid response body: {0}")]
    Decode(String),
}
