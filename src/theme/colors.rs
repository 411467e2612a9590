//! Colors - Adaptive palette and catalog accent colors

use gpui::{Rgba, WindowAppearance, rgb};

use crate::domain::ThemeColor;

/// Light or dark rendering, as resolved for one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl From<WindowAppearance> for Appearance {
    fn from(value: WindowAppearance) -> Self {
        match value {
            WindowAppearance::Light | WindowAppearance::VibrantLight => Appearance::Light,
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Appearance::Dark,
        }
    }
}

/// Resolved color set handed to every renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window background
    pub background: Rgba,
    /// Card body background
    pub surface: Rgba,
    /// Primary text
    pub text_primary: Rgba,
    /// Secondary (de-emphasized) text
    pub text_secondary: Rgba,
    /// Text on colored card headers
    pub text_on_accent: Rgba,
    /// Divider between info rows
    pub divider: Rgba,
    /// Outbound link text
    pub link: Rgba,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: rgb(0xf2f2f7),
            surface: rgb(0xffffff),
            text_primary: rgb(0x1c1c1e),
            text_secondary: rgb(0x6b7280),
            text_on_accent: rgb(0xffffff),
            divider: rgb(0xe5e7eb),
            link: rgb(0x007aff),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: rgb(0x000000),
            surface: rgb(0x1c1c1e),
            text_primary: rgb(0xf2f2f7),
            text_secondary: rgb(0x9ca3af),
            text_on_accent: rgb(0xffffff),
            divider: rgb(0x38383a),
            link: rgb(0x0a84ff),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeColor {
    /// Header fill for this accent
    pub fn rgba(self) -> Rgba {
        match self {
            ThemeColor::Blue => rgb(0x007aff),
            ThemeColor::Purple => rgb(0xaf52de),
            ThemeColor::Orange => rgb(0xff9500),
            ThemeColor::Teal => rgb(0x30b0c7),
            ThemeColor::Green => rgb(0x34c759),
        }
    }
}
