//! Disorders Controller
//!
//! Handles the one user action the page supports: following the footer link.

use gpui::App;

use crate::features::disorders::link::ResourceLink;

/// Hand the link to the platform's default browser
///
/// The platform reports nothing back; failures to open are its concern.
pub fn open_resource(link: &ResourceLink, cx: &mut App) {
    tracing::info!(url = %link.url(), "Opening external resource");
    cx.open_url(link.url().as_str());
}
