//! Disorder Record - One catalog entry

use std::fmt;
use std::hash::BuildHasher;

/// Fixed seeds so that identities do not depend on per-process randomness.
const ID_SEEDS: [u64; 4] = [
    0x6e65_7572_6f64_6578,
    0x6361_7461_6c6f_6721,
    0x9e37_79b9_7f4a_7c15,
    0x2545_f491_4f6c_dd1d,
];

/// Stable identity of a record, used to key cards in the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisorderId(u64);

impl DisorderId {
    fn derive(name: &str, key_characteristic: &str, neuronal_effect: &str) -> Self {
        let state = ahash::RandomState::with_seeds(ID_SEEDS[0], ID_SEEDS[1], ID_SEEDS[2], ID_SEEDS[3]);
        Self(state.hash_one((name, key_characteristic, neuronal_effect)))
    }

    /// Raw identity value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DisorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Symbolic glyph identifier, resolved to an SVG by the asset layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconToken {
    /// Head in profile with a visible brain
    BrainProfile,
    /// Walking figure
    FigureWalk,
    /// Cloud with a lightning bolt
    CloudBolt,
    /// Person with a question mark
    PersonQuestion,
    /// Hand holding a pen
    HandDraw,
    /// Pulse trace, used for the key characteristic row
    Waveform,
    /// Branching neuron, used for the neuronal impact row
    Neuron,
}

/// Header color of a disorder card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Blue,
    Purple,
    Orange,
    Teal,
    Green,
}

/// Immutable description of one neurological disorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisorderRecord {
    id: DisorderId,
    name: &'static str,
    key_characteristic: &'static str,
    neuronal_effect: &'static str,
    icon: IconToken,
    theme_color: ThemeColor,
}

impl DisorderRecord {
    /// Create a record; the identity is derived from the three text fields
    pub fn new(
        name: &'static str,
        key_characteristic: &'static str,
        neuronal_effect: &'static str,
        icon: IconToken,
        theme_color: ThemeColor,
    ) -> Self {
        Self {
            id: DisorderId::derive(name, key_characteristic, neuronal_effect),
            name,
            key_characteristic,
            neuronal_effect,
            icon,
            theme_color,
        }
    }

    pub fn id(&self) -> DisorderId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn key_characteristic(&self) -> &'static str {
        self.key_characteristic
    }

    pub fn neuronal_effect(&self) -> &'static str {
        self.neuronal_effect
    }

    pub fn icon(&self) -> IconToken {
        self.icon
    }

    pub fn theme_color(&self) -> ThemeColor {
        self.theme_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_deterministic() {
        let a = DisorderRecord::new("A", "b", "c", IconToken::Neuron, ThemeColor::Blue);
        let b = DisorderRecord::new("A", "b", "c", IconToken::Waveform, ThemeColor::Green);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_identity_depends_on_text() {
        let a = DisorderRecord::new("A", "b", "c", IconToken::Neuron, ThemeColor::Blue);
        let b = DisorderRecord::new("A", "b", "d", IconToken::Neuron, ThemeColor::Blue);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_field_boundaries_are_part_of_identity() {
        let a = DisorderRecord::new("ab", "c", "d", IconToken::Neuron, ThemeColor::Blue);
        let b = DisorderRecord::new("a", "bc", "d", IconToken::Neuron, ThemeColor::Blue);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_id_display_is_fixed_width_hex() {
        let record = DisorderRecord::new("A", "b", "c", IconToken::Neuron, ThemeColor::Blue);
        let shown = record.id().to_string();
        assert_eq!(shown.len(), 16);
        assert_eq!(u64::from_str_radix(&shown, 16).ok(), Some(record.id().value()));
    }
}
