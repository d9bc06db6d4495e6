//! Gateway trait for the study room backend.
//!
//! The domain layer defines what it needs from the backend; the
//! infrastructure layer provides the HTTP implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::Room,
    error::GatewayError,
    filter::RoomFilter,
    layout::PageSize,
    value_object::{Password, RoomId},
};

/// One cursor-based listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomQuery {
    pub filter: RoomFilter,
    pub limit: PageSize,
    pub offset: usize,
}

/// Backend answer to a password check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordVerdict {
    Confirmed,
    /// Any other message; kept for logging
    Mismatch { message: String },
}

/// Access to the room backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomGateway: Send + Sync {
    /// Fetch one page of the filtered listing, in backend order.
    async fn fetch_rooms(&self, query: &RoomQuery) -> Result<Vec<Room>, GatewayError>;

    /// Fetch the first `limit` rooms without any filter (home preview).
    async fn fetch_preview(&self, limit: usize) -> Result<Vec<Room>, GatewayError>;

    /// Ask the backend whether `password` opens the private room `room_id`.
    async fn check_password(
        &self,
        room_id: &RoomId,
        password: &Password,
    ) -> Result<PasswordVerdict, GatewayError>;
}
