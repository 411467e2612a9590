//! Neurodex Library
//!
//! A single-window viewer for a fixed catalog of neurological disorders.
//! Each disorder is rendered as a card with a colored header and two info rows.

pub mod app;
pub mod assets;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod state;
pub mod theme;
pub mod utils;
