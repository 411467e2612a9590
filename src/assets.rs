//! Embedded assets for Neurodex
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

use crate::domain::IconToken;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

impl IconToken {
    /// Get the SVG path for this glyph
    pub fn path(self) -> SharedString {
        match self {
            IconToken::BrainProfile => "icons/brain-profile.svg",
            IconToken::FigureWalk => "icons/figure-walk.svg",
            IconToken::CloudBolt => "icons/cloud-bolt.svg",
            IconToken::PersonQuestion => "icons/person-question.svg",
            IconToken::HandDraw => "icons/hand-draw.svg",
            IconToken::Waveform => "icons/waveform.svg",
            IconToken::Neuron => "icons/neuron.svg",
        }
        .into()
    }
}

impl From<IconToken> for Icon {
    fn from(val: IconToken) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconToken; 7] = [
        IconToken::BrainProfile,
        IconToken::FigureWalk,
        IconToken::CloudBolt,
        IconToken::PersonQuestion,
        IconToken::HandDraw,
        IconToken::Waveform,
        IconToken::Neuron,
    ];

    #[test]
    fn test_every_token_is_embedded() {
        for token in ALL {
            let path = token.path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_load_resolves_own_icons() {
        let data = Assets.load("icons/neuron.svg").ok().flatten();
        assert!(data.is_some_and(|bytes| bytes.starts_with(b"<svg")));
    }

    #[test]
    fn test_empty_path_loads_nothing() {
        assert!(matches!(Assets.load(""), Ok(None)));
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        assert!(Assets.load("icons/does-not-exist.svg").is_err());
    }
}
