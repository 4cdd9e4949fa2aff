//! Shared modal utilities - backdrop click-to-close, section headers, detail rows.

use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

use crate::app::Grantboard;
use crate::constants::MODAL_BACKDROP_OPACITY;

/// Renders a modal backdrop with click-to-close behavior using state-tracking.
///
/// A boolean flag distinguishes clicks on the backdrop from clicks on the
/// modal content: the flag is set on mouse down and checked on mouse up, so
/// only a press that both started and ended on the backdrop closes the modal.
pub fn render_modal_backdrop(
    id: impl Into<ElementId>,
    cx: &mut Context<Grantboard>,
    on_backdrop_mouse_down: impl Fn(&mut Grantboard, &MouseDownEvent, &mut Window, &mut Context<Grantboard>)
    + 'static,
    on_backdrop_mouse_up: impl Fn(&mut Grantboard, &MouseUpEvent, &mut Window, &mut Context<Grantboard>)
    + 'static,
    child: impl IntoElement,
) -> impl IntoElement {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(MouseButton::Left, cx.listener(on_backdrop_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(on_backdrop_mouse_up))
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(child),
    )
    .with_priority(1500)
}

/// Adds mouse handlers to modal content so a press inside never triggers the
/// backdrop close.
pub fn modal_intercept_backdrop_clicks(
    div: Stateful<Div>,
    cx: &mut Context<Grantboard>,
    on_mouse_down: impl Fn(&mut Grantboard, &MouseDownEvent, &mut Window, &mut Context<Grantboard>)
    + 'static,
) -> Stateful<Div> {
    div.on_mouse_down(MouseButton::Left, cx.listener(on_mouse_down))
}

/// Render a section header inside a modal
pub fn render_section_header(title: &str, cx: &Context<Grantboard>) -> Div {
    let muted_fg = cx.theme().muted_foreground;
    let border = cx.theme().border;

    div()
        .w_full()
        .pb_2()
        .mb_2()
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_xs()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(muted_fg)
                .child(title.to_string().to_uppercase()),
        )
}

/// Render a label/value row for the detail grid
pub fn render_detail_row(label: &str, value: &str, cx: &Context<Grantboard>) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    h_flex()
        .w_full()
        .py_1()
        .items_start()
        .gap_4()
        .child(
            div()
                .w(px(160.0))
                .flex_shrink_0()
                .text_xs()
                .text_color(muted_fg)
                .child(label.to_string()),
        )
        .child(
            div()
                .flex_1()
                .text_sm()
                .text_color(fg)
                .child(value.to_string()),
        )
}

/// Render a bulleted list (required documents)
pub fn render_document_list(documents: &[String], cx: &Context<Grantboard>) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    let mut list = v_flex().gap_1();
    for doc in documents {
        list = list.child(
            h_flex()
                .gap_2()
                .items_center()
                .child(div().text_xs().text_color(muted_fg).child("•"))
                .child(div().text_sm().text_color(fg).child(doc.clone())),
        );
    }
    list
}
