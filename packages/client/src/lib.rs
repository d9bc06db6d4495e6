//! Study room client library.
//!
//! Browses the study room backend with cursor-based infinite scrolling, opens
//! public and password-protected rooms and keeps a personal study timer.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run as run_client;
