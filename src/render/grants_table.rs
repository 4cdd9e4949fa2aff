//! Grants table with pagination controls and an empty state.
//!
//! Stateless render functions over the current page slice; the caller owns
//! the `GrantTableState` and wires the pagination handlers.

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, Icon, IconName, h_flex, v_flex};

use crate::app::Grantboard;
use crate::constants::{FOOTER_HEIGHT, ROW_HEIGHT};
use crate::format::format_currency;
use crate::table_state::GrantTableState;
use crate::types::{Grant, GrantStatus};

const COLUMNS: &[&str] = &["Grant", "Organization", "Amount", "Deadline", "Status"];

/// Status badge used in rows and in the detail modal.
pub fn status_badge(status: GrantStatus) -> Div {
    let color = status.color();

    div()
        .px_2()
        .py(px(2.0))
        .rounded(px(10.0))
        .bg(color.opacity(0.15))
        .text_xs()
        .font_weight(FontWeight::MEDIUM)
        .text_color(color)
        .child(status.label())
}

fn render_column_headers(cx: &Context<Grantboard>) -> Div {
    let header_bg = cx.theme().muted;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;

    let mut header_row = h_flex()
        .w_full()
        .bg(header_bg)
        .border_b_1()
        .border_color(border);

    for col in COLUMNS {
        header_row = header_row.child(
            div()
                .flex_1()
                .px_3()
                .py_2()
                .text_xs()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child(col.to_string()),
        );
    }

    header_row
}

fn render_grant_row(grant: &Grant, row_idx: usize, cx: &mut Context<Grantboard>) -> Stateful<Div> {
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let hover_bg = cx.theme().primary.opacity(0.08);
    let alt_row_bg = cx.theme().background.opacity(0.5);

    let is_alt = row_idx % 2 == 1;
    let grant_id = grant.id;

    h_flex()
        .id(ElementId::Name(format!("grant-row-{}", grant_id).into()))
        .w_full()
        .h(px(ROW_HEIGHT))
        .when(is_alt, |d| d.bg(alt_row_bg))
        .hover(|s| s.bg(hover_bg))
        .border_b_1()
        .border_color(border.opacity(0.5))
        .cursor_pointer()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _, _, cx| this.open_grant_detail(grant_id, cx)),
        )
        .child(
            v_flex()
                .flex_1()
                .px_3()
                .justify_center()
                .gap(px(2.0))
                .child(div().text_sm().text_color(fg).child(grant.name.clone()))
                .child(
                    div()
                        .text_xs()
                        .text_color(muted_fg)
                        .child(grant.number.clone()),
                ),
        )
        .child(
            div()
                .flex_1()
                .px_3()
                .text_sm()
                .text_color(muted_fg)
                .child(grant.organization.clone()),
        )
        .child(
            div()
                .flex_1()
                .px_3()
                .text_sm()
                .text_color(fg)
                .child(format_currency(grant.amount)),
        )
        .child(
            div()
                .flex_1()
                .px_3()
                .text_sm()
                .text_color(muted_fg)
                .child(grant.deadline.format("%Y-%m-%d").to_string()),
        )
        .child(
            h_flex()
                .flex_1()
                .px_3()
                .items_center()
                .child(status_badge(grant.status)),
        )
}

fn render_empty_state(cx: &Context<Grantboard>) -> Div {
    let muted_fg = cx.theme().muted_foreground;

    v_flex()
        .w_full()
        .py_8()
        .items_center()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(muted_fg)
                .child("No grants match your filters"),
        )
        .child(
            div()
                .text_xs()
                .text_color(muted_fg)
                .child("Try broadening the search or clearing the filters."),
        )
}

fn render_pagination(state: &GrantTableState, cx: &mut Context<Grantboard>) -> Div {
    let title_bar = cx.theme().title_bar;
    let border = cx.theme().border;
    let muted_fg = cx.theme().muted_foreground;
    let alt_row_bg = cx.theme().muted;

    let current_page = state.current_page + 1; // 1-indexed for display
    let total_pages = state.total_pages();
    let range = state.visible_range();
    let showing_start = if state.total_rows == 0 { 0 } else { range.start + 1 };
    let showing_end = range.end;

    h_flex()
        .w_full()
        .h(px(FOOTER_HEIGHT))
        .px_3()
        .bg(title_bar)
        .border_t_1()
        .border_color(border)
        .items_center()
        .justify_between()
        .child(
            div()
                .text_xs()
                .text_color(muted_fg)
                .child(format!(
                    "Showing {}-{} of {}",
                    showing_start, showing_end, state.total_rows
                )),
        )
        .child(
            h_flex()
                .items_center()
                .gap_1()
                .child(
                    h_flex()
                        .id("pagination-first")
                        .items_center()
                        .px_1()
                        .py(px(2.0))
                        .rounded(px(4.0))
                        .cursor_pointer()
                        .when(!state.can_go_prev(), |d| d.opacity(0.3).cursor_default())
                        .when(state.can_go_prev(), |d| d.hover(|s| s.bg(alt_row_bg)))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _, _, cx| this.go_first_page(cx)),
                        )
                        .child(Icon::new(IconName::ChevronLeft).size(px(10.0)).text_color(muted_fg))
                        .child(Icon::new(IconName::ChevronLeft).size(px(10.0)).text_color(muted_fg).ml(px(-4.0))),
                )
                .child(
                    h_flex()
                        .id("pagination-prev")
                        .items_center()
                        .px_1()
                        .py(px(2.0))
                        .rounded(px(4.0))
                        .cursor_pointer()
                        .when(!state.can_go_prev(), |d| d.opacity(0.3).cursor_default())
                        .when(state.can_go_prev(), |d| d.hover(|s| s.bg(alt_row_bg)))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _, _, cx| this.go_prev_page(cx)),
                        )
                        .child(Icon::new(IconName::ChevronLeft).size(px(14.0)).text_color(muted_fg)),
                )
                .child(
                    div()
                        .px_2()
                        .text_xs()
                        .text_color(muted_fg)
                        .child(format!("{} / {}", current_page, total_pages)),
                )
                .child(
                    h_flex()
                        .id("pagination-next")
                        .items_center()
                        .px_1()
                        .py(px(2.0))
                        .rounded(px(4.0))
                        .cursor_pointer()
                        .when(!state.can_go_next(), |d| d.opacity(0.3).cursor_default())
                        .when(state.can_go_next(), |d| d.hover(|s| s.bg(alt_row_bg)))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _, _, cx| this.go_next_page(cx)),
                        )
                        .child(Icon::new(IconName::ChevronRight).size(px(14.0)).text_color(muted_fg)),
                )
                .child(
                    h_flex()
                        .id("pagination-last")
                        .items_center()
                        .px_1()
                        .py(px(2.0))
                        .rounded(px(4.0))
                        .cursor_pointer()
                        .when(!state.can_go_next(), |d| d.opacity(0.3).cursor_default())
                        .when(state.can_go_next(), |d| d.hover(|s| s.bg(alt_row_bg)))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _, _, cx| this.go_last_page(cx)),
                        )
                        .child(Icon::new(IconName::ChevronRight).size(px(10.0)).text_color(muted_fg))
                        .child(Icon::new(IconName::ChevronRight).size(px(10.0)).text_color(muted_fg).ml(px(-4.0))),
                ),
        )
}

/// Render the complete grants table: column headers, page rows or the empty
/// state, and the pagination footer.
pub fn render_grants_table(app: &Grantboard, cx: &mut Context<Grantboard>) -> Stateful<Div> {
    let border = cx.theme().border;
    let background = cx.theme().background;

    let visible: Vec<Grant> = app.visible_grants().into_iter().cloned().collect();
    let is_empty = app.listing.filtered.is_empty();

    let mut container = v_flex()
        .id("grants-table")
        .w_full()
        .border_1()
        .border_color(border)
        .rounded(px(6.0))
        .overflow_hidden()
        .bg(background)
        .child(render_column_headers(cx));

    if is_empty {
        container = container.child(render_empty_state(cx));
    } else {
        let mut body = v_flex().w_full();
        for (row_idx, grant) in visible.iter().enumerate() {
            body = body.child(render_grant_row(grant, row_idx, cx));
        }
        container = container
            .child(body)
            .child(render_pagination(&app.listing.table, cx));
    }

    container
}
