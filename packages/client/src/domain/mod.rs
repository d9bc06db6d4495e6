//! Domain layer for the study room client.
//!
//! This module contains the room model, the listing filter, the grid layout
//! rules and the study clock. It knows nothing about HTTP or the terminal.

pub mod elapsed;
pub mod entity;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod layout;
pub mod route;
pub mod value_object;

pub use elapsed::ElapsedTime;
pub use entity::{Page, Room, Visibility};
pub use error::{GatewayError, ValueObjectError};
pub use filter::RoomFilter;
pub use gateway::{PasswordVerdict, RoomGateway, RoomQuery};
pub use layout::{GridLayout, PageSize};
pub use route::Route;
pub use value_object::{Password, RoomId, UserId};
