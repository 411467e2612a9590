//! Components - Reusable UI Components
//!
//! Pure UI components that render view models and do no I/O.

pub mod composite;
pub mod layout;
pub mod primitives;
