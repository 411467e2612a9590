//! Theme - Palette and typography
//!
//! Colors are resolved into a [`colors::Palette`] value and passed down to renderers.

pub mod colors;
pub mod typography;

pub use colors::{Appearance, Palette};
pub use typography::Typography;
