//! Render layer - stateless render functions composed by the top-level
//! `Render` implementation.

mod apply;
mod filter_bar;
mod grants_table;
mod header;
mod overlays;

pub use grants_table::status_badge;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

use crate::app::{AppView, Grantboard};

impl Render for Grantboard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let background = cx.theme().background;

        match self.navigation.view {
            AppView::Grants => {
                let selected = self.selected_grant().cloned();

                v_flex()
                    .size_full()
                    .bg(background)
                    .relative()
                    .child(header::render_header(self, cx))
                    .child(filter_bar::render_filter_bar(self, cx))
                    .child(
                        v_flex()
                            .flex_1()
                            .w_full()
                            .p_4()
                            .child(grants_table::render_grants_table(self, cx)),
                    )
                    .when_some(selected, |d, grant| {
                        d.child(overlays::render_grant_detail(&grant, cx))
                    })
            }
            AppView::Apply { grant_id } => v_flex()
                .size_full()
                .bg(background)
                .child(apply::render_apply_view(self, grant_id, cx)),
        }
    }
}
