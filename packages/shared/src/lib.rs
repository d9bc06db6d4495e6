//! Shared utilities for the study room client.
//!
//! Logger initialisation and wall-clock helpers used by every binary in the workspace.

pub mod logger;
pub mod time;
