//! Disorder View Models
//!
//! Plain data describing what the page, cards, and info rows render. Everything
//! here is computed from `(records, palette)` alone, so it needs no window.

use gpui::{Rgba, SharedString};

use crate::domain::{DisorderId, DisorderRecord, IconToken};
use crate::features::disorders::link::{RESOURCE_LABEL, RESOURCE_URL, ResourceLink};
use crate::theme::Palette;

pub const INTRO_TITLE: &str = "When Things Go Wrong";

pub const INTRO_BODY: &str = "The nervous system depends on billions of neurons passing signals with \
remarkable precision. When neurons are damaged, lost, or cut off from one another, the effects can \
reach memory, movement, sensation, and strength. The disorders below show a few of the ways that \
signaling can break down.";

pub const FOOTER_DISCLAIMER: &str = "This overview is for educational purposes only and is not a \
substitute for professional medical advice, diagnosis, or treatment.";

pub const KEY_CHARACTERISTIC_TITLE: &str = "Key Characteristic";
pub const NEURONAL_IMPACT_TITLE: &str = "Neuronal Impact";

/// One icon + title + description block
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRowView {
    pub icon: IconToken,
    pub title: SharedString,
    pub description: SharedString,
}

impl InfoRowView {
    pub fn new(
        icon: IconToken,
        title: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One disorder card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: DisorderId,
    pub icon: IconToken,
    pub title: SharedString,
    pub header_bg: Rgba,
    pub header_text: Rgba,
    /// Key characteristic first, neuronal impact second
    pub rows: [InfoRowView; 2],
    /// Single description of the whole card for assistive technologies
    pub accessibility_label: SharedString,
}

impl CardView {
    pub fn from_record(record: &DisorderRecord, palette: &Palette) -> Self {
        let accessibility_label = format!(
            "{}. Key characteristic: {} Neuronal impact: {}",
            record.name(),
            record.key_characteristic(),
            record.neuronal_effect()
        );

        Self {
            id: record.id(),
            icon: record.icon(),
            title: record.name().into(),
            header_bg: record.theme_color().rgba(),
            header_text: palette.text_on_accent,
            rows: [
                InfoRowView::new(
                    IconToken::Waveform,
                    KEY_CHARACTERISTIC_TITLE,
                    record.key_characteristic(),
                ),
                InfoRowView::new(
                    IconToken::Neuron,
                    NEURONAL_IMPACT_TITLE,
                    record.neuronal_effect(),
                ),
            ],
            accessibility_label: accessibility_label.into(),
        }
    }
}

/// Introduction block at the top of the page
#[derive(Debug, Clone, PartialEq)]
pub struct IntroView {
    pub title: SharedString,
    pub body: SharedString,
}

impl Default for IntroView {
    fn default() -> Self {
        Self {
            title: INTRO_TITLE.into(),
            body: INTRO_BODY.into(),
        }
    }
}

/// Footer with disclaimer and an optional outbound link
#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub disclaimer: SharedString,
    /// `None` when the link target could not be parsed
    pub link: Option<ResourceLink>,
}

impl FooterView {
    pub fn new(disclaimer: impl Into<SharedString>, label: &str, url: &str) -> Self {
        let link = match ResourceLink::parse(label, url) {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(error = %e, "Omitting footer link");
                None
            }
        };

        Self {
            disclaimer: disclaimer.into(),
            link,
        }
    }
}

impl Default for FooterView {
    fn default() -> Self {
        Self::new(FOOTER_DISCLAIMER, RESOURCE_LABEL, RESOURCE_URL)
    }
}

/// A top-level block of the page, in display order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageBlock<'a> {
    Intro(&'a IntroView),
    Card(&'a CardView),
    Footer(&'a FooterView),
}

/// The whole screen
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub intro: IntroView,
    pub cards: Vec<CardView>,
    pub footer: FooterView,
}

impl PageView {
    /// One card per record, in record order
    pub fn compose(records: &[DisorderRecord], palette: &Palette) -> Self {
        Self {
            intro: IntroView::default(),
            cards: records
                .iter()
                .map(|record| CardView::from_record(record, palette))
                .collect(),
            footer: FooterView::default(),
        }
    }

    /// Blocks from top to bottom
    pub fn blocks(&self) -> impl Iterator<Item = PageBlock<'_>> {
        std::iter::once(PageBlock::Intro(&self.intro))
            .chain(self.cards.iter().map(PageBlock::Card))
            .chain(std::iter::once(PageBlock::Footer(&self.footer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ThemeColor, catalog};

    fn parkinsons() -> &'static DisorderRecord {
        catalog()
            .iter()
            .find(|r| r.name() == "Parkinson's Disease")
            .expect("Parkinson's Disease is in the catalog")
    }

    #[test]
    fn test_card_has_two_rows_in_order() {
        let palette = Palette::light();
        for record in catalog() {
            let card = CardView::from_record(record, &palette);
            assert_eq!(card.rows.len(), 2);
            assert_eq!(card.rows[0].title.as_str(), KEY_CHARACTERISTIC_TITLE);
            assert_eq!(card.rows[0].description.as_str(), record.key_characteristic());
            assert_eq!(card.rows[1].title.as_str(), NEURONAL_IMPACT_TITLE);
            assert_eq!(card.rows[1].description.as_str(), record.neuronal_effect());
        }
    }

    #[test]
    fn test_card_header_uses_theme_color_and_white_text() {
        let card = CardView::from_record(parkinsons(), &Palette::dark());
        assert_eq!(card.header_bg, ThemeColor::Purple.rgba());
        assert_eq!(card.header_text, gpui::rgb(0xffffff));
        assert_eq!(card.title.as_str(), "Parkinson's Disease");
        assert_eq!(card.icon, IconToken::FigureWalk);
    }

    #[test]
    fn test_accessibility_label_combines_fields() {
        let card = CardView::from_record(parkinsons(), &Palette::light());
        let label = &*card.accessibility_label;
        assert!(label.contains("Parkinson's Disease"));
        assert!(label.contains("tremor, muscle rigidity, and difficulty with movement"));
        assert!(label.contains("dopamine-producing"));
    }

    #[test]
    fn test_page_blocks_order() {
        let page = PageView::compose(catalog(), &Palette::light());
        let blocks: Vec<_> = page.blocks().collect();

        assert_eq!(blocks.len(), 7);
        assert!(matches!(blocks[0], PageBlock::Intro(_)));
        assert!(matches!(blocks[6], PageBlock::Footer(_)));

        let card_titles: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                PageBlock::Card(card) => Some(card.title.to_string()),
                _ => None,
            })
            .collect();
        let names: Vec<_> = catalog().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(card_titles, names);
    }

    #[test]
    fn test_blocks_carry_composed_views() {
        let page = PageView::compose(catalog(), &Palette::dark());
        let mut cards = page.cards.iter();
        for block in page.blocks() {
            match block {
                PageBlock::Intro(intro) => assert_eq!(intro, &page.intro),
                PageBlock::Card(card) => assert_eq!(Some(card), cards.next()),
                PageBlock::Footer(footer) => assert_eq!(footer, &page.footer),
            }
        }
        assert!(cards.next().is_none());
    }

    #[test]
    fn test_page_card_count_follows_records() {
        let palette = Palette::light();
        assert!(PageView::compose(&[], &palette).cards.is_empty());
        assert_eq!(PageView::compose(&catalog()[..2], &palette).blocks().count(), 4);
    }

    #[test]
    fn test_intro_text() {
        let page = PageView::compose(catalog(), &Palette::light());
        assert_eq!(page.intro.title.as_str(), "When Things Go Wrong");
        assert!(!page.intro.body.is_empty());
    }

    #[test]
    fn test_compose_is_idempotent() {
        let palette = Palette::light();
        let first = PageView::compose(catalog(), &palette);
        let second = PageView::compose(catalog(), &palette);
        assert_eq!(first, second);
    }

    #[test]
    fn test_footer_links_to_ninds() {
        let footer = FooterView::default();
        let link = footer.link.expect("default footer has a link");
        assert_eq!(link.url().as_str(), RESOURCE_URL);
        assert!(!footer.disclaimer.is_empty());
    }

    #[test]
    fn test_footer_omits_malformed_link() {
        let footer = FooterView::new(FOOTER_DISCLAIMER, RESOURCE_LABEL, "");
        assert!(footer.link.is_none());
        assert_eq!(footer.disclaimer.as_str(), FOOTER_DISCLAIMER);
    }

    #[test]
    fn test_info_row_keeps_empty_strings() {
        let row = InfoRowView::new(IconToken::Neuron, "", "");
        assert!(row.title.is_empty());
        assert!(row.description.is_empty());
    }
}
