//! Disorders Page
//!
//! The single screen: intro, one card per catalog entry, footer.

use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
    px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::disorder_card::DisorderCard;
use crate::components::layout::footer::Footer;
use crate::components::layout::intro::Intro;
use crate::domain::catalog;
use crate::features::disorders::view::{PageBlock, PageView};
use crate::theme::{Palette, Typography};

/// Disorders page component
pub struct DisordersPage {
    entities: AppEntities,
}

impl DisordersPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        // Follow light/dark switches of the system
        cx.observe_window_appearance(window, |_this, window, cx| {
            tracing::debug!(appearance = ?window.appearance(), "Window appearance changed");
            cx.notify();
        })
        .detach();

        Self { entities }
    }

    fn palette(&self, window: &Window, cx: &App) -> Palette {
        self.entities
            .settings
            .read(cx)
            .palette(window.appearance().into())
    }
}

impl Render for DisordersPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.palette(window, cx);
        let page = PageView::compose(catalog(), &palette);

        div()
            .id("disorders-page")
            .size_full()
            .overflow_y_scroll()
            .bg(palette.background)
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .items_start()
                    .gap(px(Typography::BLOCK_GAP))
                    .p_5()
                    .children(page.blocks().map(|block| render_block(block, palette))),
            )
    }
}

fn render_block(block: PageBlock<'_>, palette: Palette) -> AnyElement {
    match block {
        PageBlock::Intro(intro) => Intro::new(intro.clone(), palette).into_any_element(),
        PageBlock::Card(card) => DisorderCard::new(card.clone(), palette).into_any_element(),
        PageBlock::Footer(footer) => Footer::new(footer.clone(), palette).into_any_element(),
    }
}
