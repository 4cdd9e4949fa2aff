//! Filter bar: search input, sector/status dropdowns, amount bounds,
//! deadline floor, and the clear action.

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::input::{Input, InputState};
use gpui_component::{ActiveTheme as _, Icon, IconName, h_flex};

use crate::app::Grantboard;
use crate::constants::FILTER_BAR_HEIGHT;
use crate::store::SECTOR_OPTIONS;
use crate::types::{GrantStatus, StatusFilter};

fn render_text_input(
    input: Option<&Entity<InputState>>,
    width: f32,
    cx: &Context<Grantboard>,
) -> Div {
    let border = cx.theme().border;
    let background = cx.theme().background;

    div()
        .w(px(width))
        .h(px(28.0))
        .px_2()
        .bg(background)
        .border_1()
        .border_color(border)
        .rounded(px(4.0))
        .flex()
        .items_center()
        .when_some(input, |d, input| {
            d.child(Input::new(input).appearance(false).size_full())
        })
}

fn render_dropdown_trigger(
    id: impl Into<ElementId>,
    label: &str,
    value: &str,
    open: bool,
    on_toggle: impl Fn(&mut Grantboard, &MouseDownEvent, &mut Window, &mut Context<Grantboard>)
    + 'static,
    cx: &mut Context<Grantboard>,
) -> Stateful<Div> {
    let border = cx.theme().border;
    let background = cx.theme().background;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let primary = cx.theme().primary;

    h_flex()
        .id(id)
        .items_center()
        .gap_1()
        .child(div().text_xs().text_color(muted_fg).child(format!("{}:", label)))
        .child(
            h_flex()
                .items_center()
                .gap_1()
                .px_2()
                .py(px(4.0))
                .bg(background)
                .border_1()
                .border_color(border)
                .rounded(px(4.0))
                .cursor_pointer()
                .hover(|s| s.border_color(primary.opacity(0.5)))
                .on_mouse_down(MouseButton::Left, cx.listener(on_toggle))
                .child(div().text_xs().text_color(fg).child(value.to_string()))
                .child(
                    Icon::new(if open {
                        IconName::ChevronUp
                    } else {
                        IconName::ChevronDown
                    })
                    .size(px(10.0))
                    .text_color(muted_fg),
                ),
        )
}

fn render_sector_menu(app: &Grantboard, cx: &mut Context<Grantboard>) -> Stateful<Div> {
    let border = cx.theme().border;
    let background = cx.theme().background;
    let fg = cx.theme().foreground;
    let primary = cx.theme().primary;
    let hover_bg = cx.theme().muted;

    let mut menu = div()
        .id("sector-menu")
        .absolute()
        .top(px(FILTER_BAR_HEIGHT - 6.0))
        .w(px(180.0))
        .bg(background)
        .border_1()
        .border_color(border)
        .rounded(px(6.0))
        .shadow_lg()
        .py_1();

    for option in SECTOR_OPTIONS.iter() {
        let is_current = *option == app.filters.criteria.sector;
        let value = option.clone();
        menu = menu.child(
            h_flex()
                .id(ElementId::Name(format!("sector-{}", option).into()))
                .w_full()
                .px_3()
                .py_1()
                .cursor_pointer()
                .when(is_current, |d| d.bg(primary.opacity(0.15)))
                .when(!is_current, |d| d.hover(|s| s.bg(hover_bg)))
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_xs()
                        .text_color(if is_current { primary } else { fg })
                        .child(option.clone()),
                )
                .when(is_current, |d| {
                    d.child(Icon::new(IconName::Check).size(px(12.0)).text_color(primary))
                })
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _, _, cx| this.set_sector(value.clone(), cx)),
                ),
        );
    }

    menu
}

fn render_status_menu(app: &Grantboard, cx: &mut Context<Grantboard>) -> Stateful<Div> {
    let border = cx.theme().border;
    let background = cx.theme().background;
    let fg = cx.theme().foreground;
    let primary = cx.theme().primary;
    let hover_bg = cx.theme().muted;

    let mut options = vec![StatusFilter::All];
    options.extend(GrantStatus::ALL.iter().map(|s| StatusFilter::Only(*s)));

    let mut menu = div()
        .id("status-menu")
        .absolute()
        .top(px(FILTER_BAR_HEIGHT - 6.0))
        .w(px(140.0))
        .bg(background)
        .border_1()
        .border_color(border)
        .rounded(px(6.0))
        .shadow_lg()
        .py_1();

    for option in options {
        let is_current = option == app.filters.criteria.status;
        menu = menu.child(
            h_flex()
                .id(ElementId::Name(format!("status-{}", option.label()).into()))
                .w_full()
                .px_3()
                .py_1()
                .cursor_pointer()
                .when(is_current, |d| d.bg(primary.opacity(0.15)))
                .when(!is_current, |d| d.hover(|s| s.bg(hover_bg)))
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_xs()
                        .text_color(if is_current { primary } else { fg })
                        .child(option.label()),
                )
                .when(is_current, |d| {
                    d.child(Icon::new(IconName::Check).size(px(12.0)).text_color(primary))
                })
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _, _, cx| this.set_status(option, cx)),
                ),
        );
    }

    menu
}

/// Render the filter bar. Dropdown menus render below their triggers inside
/// relatively positioned wrappers.
pub fn render_filter_bar(app: &Grantboard, cx: &mut Context<Grantboard>) -> Div {
    let border = cx.theme().border;
    let muted = cx.theme().muted;
    let fg = cx.theme().foreground;

    h_flex()
        .w_full()
        .h(px(FILTER_BAR_HEIGHT))
        .px_3()
        .gap_3()
        .items_center()
        .border_b_1()
        .border_color(border)
        .child(render_text_input(app.filters.search_input.as_ref(), 220.0, cx))
        .child(
            div()
                .relative()
                .child(render_dropdown_trigger(
                    "sector-dropdown",
                    "Sector",
                    &app.filters.criteria.sector,
                    app.filters.sector_dropdown_open,
                    |this, _, _, cx| this.toggle_sector_dropdown(cx),
                    cx,
                ))
                .when(app.filters.sector_dropdown_open, |d| {
                    d.child(render_sector_menu(app, cx))
                }),
        )
        .child(
            div()
                .relative()
                .child(render_dropdown_trigger(
                    "status-dropdown",
                    "Status",
                    app.filters.criteria.status.label(),
                    app.filters.status_dropdown_open,
                    |this, _, _, cx| this.toggle_status_dropdown(cx),
                    cx,
                ))
                .when(app.filters.status_dropdown_open, |d| {
                    d.child(render_status_menu(app, cx))
                }),
        )
        .child(render_text_input(app.filters.min_amount_input.as_ref(), 110.0, cx))
        .child(render_text_input(app.filters.max_amount_input.as_ref(), 110.0, cx))
        .child(render_text_input(app.filters.min_deadline_input.as_ref(), 170.0, cx))
        .child(
            div()
                .id("clear-filters")
                .px_3()
                .py(px(4.0))
                .rounded(px(4.0))
                .bg(muted)
                .text_xs()
                .text_color(fg)
                .cursor_pointer()
                .hover(|s| s.opacity(0.85))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, window, cx| this.clear_filters(window, cx)),
                )
                .child("Clear filters"),
        )
}
