//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and view models.

pub mod disorders;
