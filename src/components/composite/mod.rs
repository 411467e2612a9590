//! Composite Components
//!
//! Components assembled from primitives.

pub mod disorder_card;
