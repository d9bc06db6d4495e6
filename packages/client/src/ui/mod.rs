//! Interactive terminal client.

pub mod command;
pub mod navigator;
pub mod render;
mod runner;
pub mod state;
pub mod style;

pub use runner::run;
pub use state::AppContext;
