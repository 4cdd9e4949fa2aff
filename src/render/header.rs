//! Header bar: title, result count badge, and the apply-flow entry point.

use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex};

use crate::app::Grantboard;
use crate::constants::HEADER_HEIGHT;

fn format_result_count(count: usize) -> String {
    if count == 1 {
        "1 grant".to_string()
    } else {
        format!("{} grants", count)
    }
}

pub fn render_header(app: &Grantboard, cx: &mut Context<Grantboard>) -> Div {
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let title_bar = cx.theme().title_bar;

    h_flex()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .px_4()
        .bg(title_bar)
        .border_b_1()
        .border_color(border)
        .items_center()
        .justify_between()
        .child(
            h_flex()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .text_base()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(fg)
                        .child("Available Grants"),
                )
                .child(
                    div()
                        .px_2()
                        .py(px(2.0))
                        .rounded(px(10.0))
                        .bg(primary.opacity(0.15))
                        .text_xs()
                        .text_color(primary)
                        .child(format_result_count(app.listing.filtered.len())),
                ),
        )
        .child(
            div()
                .id("header-apply")
                .px_3()
                .py(px(5.0))
                .rounded(px(6.0))
                .bg(primary)
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(primary_fg)
                .cursor_pointer()
                .hover(|s| s.opacity(0.9))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| this.navigate_to_apply(None, cx)),
                )
                .child("Start an application"),
        )
}
