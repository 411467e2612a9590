//! Domain Layer
//!
//! Plain data describing the disorders shown by the application and the
//! settings it reads at startup.

pub mod catalog;
pub mod disorder;
pub mod settings;

pub use catalog::catalog;
pub use disorder::{DisorderId, DisorderRecord, IconToken, ThemeColor};
