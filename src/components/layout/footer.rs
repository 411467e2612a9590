//! Footer Component
//!
//! Disclaimer text and, when the target parsed, the outbound resource link.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::{Icon, IconName};

use crate::features::disorders::controller::open_resource;
use crate::features::disorders::link::ResourceLink;
use crate::features::disorders::view::FooterView;
use crate::theme::{Palette, Typography};

#[derive(IntoElement)]
pub struct Footer {
    view: FooterView,
    palette: Palette,
}

impl Footer {
    pub fn new(view: FooterView, palette: Palette) -> Self {
        Self { view, palette }
    }

    fn render_link(link: ResourceLink, palette: Palette) -> impl IntoElement {
        let label = link.label().to_string();
        let host = link.host().map(str::to_string);

        div()
            .id("resource-link")
            .flex()
            .items_center()
            .gap_1()
            .cursor_pointer()
            .text_size(px(Typography::BODY))
            .text_color(palette.link)
            .hover(|s| s.opacity(0.8))
            .on_click(move |_event: &ClickEvent, _window, cx| open_resource(&link, cx))
            .child(label)
            .children(host.map(|host| {
                div()
                    .text_size(px(Typography::CAPTION))
                    .text_color(palette.text_secondary)
                    .child(format!("({host})"))
            }))
            .child(Icon::new(IconName::ExternalLink).size_4().text_color(palette.link))
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .pt_2()
            .child(
                div()
                    .text_size(px(Typography::CAPTION))
                    .text_color(palette.text_secondary)
                    .child(self.view.disclaimer),
            )
            .children(self.view.link.map(|link| Self::render_link(link, palette)))
    }
}
