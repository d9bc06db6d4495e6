//! Infrastructure layer: wire formats and the HTTP implementation of the gateway.

pub mod dto;
pub mod gateway;

pub use gateway::HttpRoomGateway;
