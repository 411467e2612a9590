//! Utilities
//!
//! Configuration lookup and logging setup.

pub mod config_store;
pub mod logging;
