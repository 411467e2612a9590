//! SettingsState - Startup settings shared with the views

use crate::domain::settings::Settings;
use crate::theme::{Appearance, Palette};

/// State holding the settings read at startup
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub settings: Settings,
}

impl SettingsState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Palette for a window currently reporting `system` appearance
    pub fn palette(&self, system: Appearance) -> Palette {
        Palette::for_appearance(self.settings.appearance.resolve(system))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::AppearancePreference;

    #[test]
    fn test_system_preference_follows_window() {
        let state = SettingsState::default();
        assert_eq!(state.palette(Appearance::Dark), Palette::dark());
        assert_eq!(state.palette(Appearance::Light), Palette::light());
    }

    #[test]
    fn test_explicit_preference_wins() {
        let state = SettingsState::new(Settings {
            appearance: AppearancePreference::Light,
            ..Settings::default()
        });
        assert_eq!(state.palette(Appearance::Dark), Palette::light());
    }
}
