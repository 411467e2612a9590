//! Primitive Components
//!
//! Basic building blocks.

pub mod info_row;
