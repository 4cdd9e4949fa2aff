//! Grant detail modal - a pure projection of the selected grant's fields.

use chrono::Local;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

use super::modal_base::{
    modal_intercept_backdrop_clicks, render_detail_row, render_document_list,
    render_modal_backdrop, render_section_header,
};
use crate::app::Grantboard;
use crate::constants::{MODAL_MAX_HEIGHT, MODAL_WIDTH};
use crate::format::{deadline_label, format_currency};
use crate::render::status_badge;
use crate::types::Grant;

/// Render the detail modal for the currently selected grant.
pub fn render_grant_detail(grant: &Grant, cx: &mut Context<Grantboard>) -> impl IntoElement {
    let content = render_modal_content(grant, cx);

    render_modal_backdrop(
        "grant-detail-backdrop",
        cx,
        |this, _, _, cx| this.on_detail_backdrop_down(cx),
        |this, _, _, cx| this.on_detail_backdrop_up(cx),
        content,
    )
}

fn render_modal_content(grant: &Grant, cx: &mut Context<Grantboard>) -> Stateful<Div> {
    let background = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let muted = cx.theme().muted;

    let today = Local::now().date_naive();
    let grant_id = grant.id;

    let modal = v_flex()
        .id("grant-detail-modal")
        .w(px(MODAL_WIDTH))
        .max_h(px(MODAL_MAX_HEIGHT))
        .bg(background)
        .border_1()
        .border_color(border)
        .rounded(px(8.0))
        .shadow_lg()
        .overflow_hidden()
        .child(
            // Title bar: name, number, status badge
            h_flex()
                .w_full()
                .px_4()
                .py_3()
                .border_b_1()
                .border_color(border)
                .items_center()
                .justify_between()
                .child(
                    v_flex()
                        .gap(px(2.0))
                        .child(
                            div()
                                .text_lg()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(fg)
                                .child(grant.name.clone()),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_color(muted_fg)
                                .child(format!("{} · {}", grant.number, grant.organization)),
                        ),
                )
                .child(status_badge(grant.status)),
        )
        .child(
            // Scrollable body
            v_flex()
                .id("grant-detail-body")
                .flex_1()
                .w_full()
                .px_4()
                .py_3()
                .gap_3()
                .overflow_y_scroll()
                .child(
                    div()
                        .text_sm()
                        .text_color(fg)
                        .child(grant.description.clone()),
                )
                .child(render_section_header("Funding", cx))
                .child(render_detail_row("Amount", &format_currency(grant.amount), cx))
                .child(render_detail_row(
                    "Deadline",
                    &format!(
                        "{} ({})",
                        grant.deadline.format("%Y-%m-%d"),
                        deadline_label(grant.deadline, today)
                    ),
                    cx,
                ))
                .child(render_detail_row("Duration", &grant.duration, cx))
                .child(render_detail_row("Matching funds", &grant.matching_funds, cx))
                .child(render_section_header("Eligibility", cx))
                .child(render_detail_row("Who may apply", &grant.eligibility, cx))
                .child(render_detail_row("Sectors", &grant.sectors.join(", "), cx))
                .child(render_detail_row(
                    "Applications received",
                    &grant.applications_received.to_string(),
                    cx,
                ))
                .child(render_detail_row("Success rate", &grant.success_rate, cx))
                .child(render_section_header("Required documents", cx))
                .child(render_document_list(&grant.required_documents, cx)),
        )
        .child(
            // Footer: close + apply
            h_flex()
                .w_full()
                .px_4()
                .py_3()
                .border_t_1()
                .border_color(border)
                .items_center()
                .justify_end()
                .gap_2()
                .child(
                    div()
                        .id("grant-detail-close")
                        .px_3()
                        .py_1p5()
                        .rounded(px(6.0))
                        .bg(muted)
                        .text_sm()
                        .text_color(fg)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.85))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _, _, cx| this.close_grant_detail(cx)),
                        )
                        .child("Close"),
                )
                .child(
                    div()
                        .id("grant-detail-apply")
                        .px_3()
                        .py_1p5()
                        .rounded(px(6.0))
                        .bg(primary)
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(primary_fg)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.9))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(move |this, _, _, cx| {
                                this.navigate_to_apply(Some(grant_id), cx)
                            }),
                        )
                        .child("Apply Now"),
                ),
        );

    modal_intercept_backdrop_clicks(modal, cx, |this, _, _, cx| this.on_detail_content_down(cx))
}
