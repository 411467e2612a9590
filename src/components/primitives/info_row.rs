//! Info Row Component
//!
//! Icon in a fixed-width column, a de-emphasized title, and the description below it.

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_component::Icon;

use crate::features::disorders::view::InfoRowView;
use crate::theme::{Palette, Typography};

/// A labeled two-line block
#[derive(IntoElement)]
pub struct InfoRow {
    view: InfoRowView,
    palette: Palette,
}

impl InfoRow {
    pub fn new(view: InfoRowView, palette: Palette) -> Self {
        Self { view, palette }
    }
}

impl RenderOnce for InfoRow {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;

        div()
            .w_full()
            .flex()
            .items_start()
            .gap_3()
            .child(
                div()
                    .w(px(Typography::ROW_ICON_WIDTH))
                    .flex_none()
                    .flex()
                    .justify_center()
                    .pt(px(2.0))
                    .child(
                        Icon::from(self.view.icon)
                            .size_5()
                            .text_color(palette.text_secondary),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(Typography::CAPTION))
                            .text_color(palette.text_secondary)
                            .child(self.view.title),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::BODY))
                            .text_color(palette.text_primary)
                            .child(self.view.description),
                    ),
            )
    }
}
