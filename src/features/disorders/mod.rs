//! Disorders Feature
//!
//! View models, the page that renders them, and the footer link action.

pub mod controller;
pub mod link;
pub mod page;
pub mod view;
