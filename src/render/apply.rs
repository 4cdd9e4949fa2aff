//! Apply view placeholder. The application form itself is out of scope;
//! this view only shows which grant, if any, the user arrived from.

use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

use crate::app::Grantboard;

pub fn render_apply_view(
    app: &Grantboard,
    grant_id: Option<u64>,
    cx: &mut Context<Grantboard>,
) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let muted = cx.theme().muted;

    let context_line = grant_id
        .and_then(|id| app.store.iter().find(|g| g.id == id))
        .map(|grant| format!("Applying for: {} ({})", grant.name, grant.number))
        .unwrap_or_else(|| "No grant selected.".to_string());

    v_flex()
        .size_full()
        .items_center()
        .justify_center()
        .gap_3()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child("Grant Application"),
        )
        .child(div().text_sm().text_color(muted_fg).child(context_line))
        .child(
            div()
                .text_xs()
                .text_color(muted_fg)
                .child("The application form is not part of this screen."),
        )
        .child(
            h_flex().child(
                div()
                    .id("apply-back")
                    .px_3()
                    .py(px(5.0))
                    .rounded(px(6.0))
                    .bg(muted)
                    .text_sm()
                    .text_color(fg)
                    .cursor_pointer()
                    .hover(|s| s.opacity(0.85))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| this.back_to_grants(cx)),
                    )
                    .child("Back to grants"),
            ),
        )
}
