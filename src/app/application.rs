//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::assets::Assets;
use crate::domain::settings::Settings;
use crate::features::disorders::page::DisordersPage;

actions!(neurodex, [Quit]);

/// Title of the one window
pub const WINDOW_TITLE: &str = "When Things Go Wrong";

/// Run the Neurodex application
pub fn run_app(settings: Settings) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when the window is closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(settings, cx);
        cx.set_global(entities.clone());

        // Create main window
        let (width, height) = settings.window_size();
        let bounds = Bounds::centered(None, gpui::size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| DisordersPage::new(entities.clone(), window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        tracing::info!(width, height, "Main window opened");
        cx.activate(true);
    });
}
