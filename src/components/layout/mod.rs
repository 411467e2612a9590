//! Layout Components
//!
//! Page-level blocks above and below the cards.

pub mod footer;
pub mod intro;
