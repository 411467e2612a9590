//! Intro Component
//!
//! Page title and explanatory paragraph.

use gpui::{App, FontWeight, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};

use crate::features::disorders::view::IntroView;
use crate::theme::{Palette, Typography};

#[derive(IntoElement)]
pub struct Intro {
    view: IntroView,
    palette: Palette,
}

impl Intro {
    pub fn new(view: IntroView, palette: Palette) -> Self {
        Self { view, palette }
    }
}

impl RenderOnce for Intro {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TITLE))
                    .font_weight(FontWeight::BOLD)
                    .text_color(self.palette.text_primary)
                    .child(self.view.title),
            )
            .child(
                div()
                    .text_size(px(Typography::BODY))
                    .text_color(self.palette.text_secondary)
                    .child(self.view.body),
            )
    }
}
