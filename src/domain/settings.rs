//! Settings - Optional user configuration read at startup

use serde::Deserialize;

use crate::error::Result;
use crate::theme::Appearance;

/// Smallest window the single-column layout is usable in
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Which palette to render with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearancePreference {
    /// Follow the window's system appearance
    #[default]
    System,
    Light,
    Dark,
}

impl AppearancePreference {
    /// Resolve against the appearance the platform reports
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            AppearancePreference::System => system,
            AppearancePreference::Light => Appearance::Light,
            AppearancePreference::Dark => Appearance::Dark,
        }
    }
}

/// Contents of `neurodex.toml`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Palette selection
    pub appearance: AppearancePreference,
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appearance: AppearancePreference::System,
            window_width: 480.0,
            window_height: 860.0,
        }
    }
}

impl Settings {
    /// Parse settings; an empty document yields defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = toml::from_str(value)?;
        Ok(settings)
    }

    /// Window size, clamped to the minimum usable size
    pub fn window_size(&self) -> (f32, f32) {
        (
            clamp_dimension(self.window_width, MIN_WINDOW_WIDTH),
            clamp_dimension(self.window_height, MIN_WINDOW_HEIGHT),
        )
    }
}

fn clamp_dimension(value: f32, min: f32) -> f32 {
    if value.is_finite() { value.max(min) } else { min }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = Settings::from_toml("  \n").expect("empty settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let settings = Settings::from_toml(r#"appearance = "dark""#).expect("valid settings");
        assert_eq!(settings.appearance, AppearancePreference::Dark);
        assert_eq!(settings.window_width, Settings::default().window_width);
    }

    #[test]
    fn test_full_document() {
        let settings = Settings::from_toml(
            r#"
            appearance = "light"
            window_width = 600.0
            window_height = 900.0
            "#,
        )
        .expect("valid settings");
        assert_eq!(settings.appearance, AppearancePreference::Light);
        assert_eq!(settings.window_size(), (600.0, 900.0));
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        let err = Settings::from_toml(r#"appearance = "sepia""#).expect_err("unknown appearance");
        assert!(matches!(err, Error::TomlDe { .. }));
    }

    #[test]
    fn test_window_size_is_clamped() {
        let settings = Settings {
            window_width: 10.0,
            window_height: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(settings.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn test_preference_resolution() {
        assert_eq!(AppearancePreference::System.resolve(Appearance::Dark), Appearance::Dark);
        assert_eq!(AppearancePreference::Light.resolve(Appearance::Dark), Appearance::Light);
        assert_eq!(AppearancePreference::Dark.resolve(Appearance::Light), Appearance::Dark);
    }
}
