//! Disorder Card Component
//!
//! Colored header with icon and name, then the two info rows separated by a divider.

use gpui::{
    App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled,
    Window, div, px,
};
use gpui_component::Icon;

use crate::components::primitives::info_row::InfoRow;
use crate::features::disorders::view::CardView;
use crate::theme::{Palette, Typography};

/// One card per catalog entry
#[derive(IntoElement)]
pub struct DisorderCard {
    view: CardView,
    palette: Palette,
}

impl DisorderCard {
    pub fn new(view: CardView, palette: Palette) -> Self {
        Self { view, palette }
    }

    fn element_id(&self) -> ElementId {
        ElementId::Name(format!("disorder-card-{}", self.view.id).into())
    }
}

impl RenderOnce for DisorderCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;
        let id = self.element_id();
        let card_id = self.view.id;
        let CardView {
            icon,
            title,
            header_bg,
            header_text,
            rows: [key_row, impact_row],
            accessibility_label,
            ..
        } = self.view;

        // GPUI has no accessibility tree yet; keep the label reachable in traces.
        tracing::trace!(card = %card_id, label = %accessibility_label, "Rendering disorder card");

        div()
            .id(id)
            .w_full()
            .flex()
            .flex_col()
            .bg(palette.surface)
            .rounded(px(Typography::CARD_RADIUS))
            .overflow_hidden()
            .shadow_md()
            // Header
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_3()
                    .px_4()
                    .py_3()
                    .bg(header_bg)
                    .child(Icon::from(icon).size_6().text_color(header_text))
                    .child(
                        div()
                            .text_size(px(Typography::HEADLINE))
                            .font_weight(FontWeight::BOLD)
                            .text_color(header_text)
                            .child(title),
                    ),
            )
            // Body
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .p_4()
                    .child(InfoRow::new(key_row, palette))
                    .child(div().w_full().h(px(1.0)).bg(palette.divider))
                    .child(InfoRow::new(impact_row, palette)),
            )
    }
}
