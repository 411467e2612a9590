//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::settings::Settings;
use crate::state::settings_state::SettingsState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Settings read at startup
    pub settings: Entity<SettingsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(settings: Settings, cx: &mut App) -> Self {
        Self {
            settings: cx.new(|_| SettingsState::new(settings)),
        }
    }
}
