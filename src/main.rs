//! Neurodex - Main Entry Point

use neurodex::app::application::run_app;
use neurodex::utils::{config_store, logging};

fn main() {
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Neurodex...");

    let settings = config_store::load_settings();

    // Run the GPUI application
    run_app(settings);
}
