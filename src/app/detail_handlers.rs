//! Detail modal and navigation methods.

use gpui::Context;

use super::{AppView, Grantboard};

impl Grantboard {
    /// Open the detail modal for a grant. Row clicks land here.
    pub fn open_grant_detail(&mut self, grant_id: u64, cx: &mut Context<Self>) {
        if self.store.iter().any(|g| g.id == grant_id) {
            tracing::debug!(grant_id, "opening grant detail");
            self.detail.selected = Some(grant_id);
            self.detail.backdrop_clicked = false;
            cx.notify();
        }
    }

    pub fn close_grant_detail(&mut self, cx: &mut Context<Self>) {
        self.detail.selected = None;
        self.detail.backdrop_clicked = false;
        cx.notify();
    }

    /// Backdrop mouse-down half of the click-to-close pattern: remember that
    /// the press started on the backdrop, not on the modal content.
    pub fn on_detail_backdrop_down(&mut self, cx: &mut Context<Self>) {
        self.detail.backdrop_clicked = true;
        cx.notify();
    }

    /// Backdrop mouse-up half: close only if the press also started there.
    pub fn on_detail_backdrop_up(&mut self, cx: &mut Context<Self>) {
        if self.detail.backdrop_clicked {
            self.close_grant_detail(cx);
        }
    }

    /// Modal content swallows the press so a click inside never closes.
    pub fn on_detail_content_down(&mut self, cx: &mut Context<Self>) {
        self.detail.backdrop_clicked = false;
        cx.notify();
    }

    /// Navigate to the apply view, carrying the grant the user came from when
    /// there is one.
    pub fn navigate_to_apply(&mut self, grant_id: Option<u64>, cx: &mut Context<Self>) {
        tracing::info!(?grant_id, "navigating to apply view");
        self.detail.selected = None;
        self.detail.backdrop_clicked = false;
        self.navigation.view = AppView::Apply { grant_id };
        cx.notify();
    }

    pub fn back_to_grants(&mut self, cx: &mut Context<Self>) {
        self.navigation.view = AppView::Grants;
        cx.notify();
    }
}
