//! Gateway implementations.
//!
//! The domain layer defines the `RoomGateway` trait; this module provides the
//! concrete backend access. Use cases depend on the trait only.

pub mod http;

pub use http::HttpRoomGateway;
