//! Application lifecycle - initialization of the store, view state, input
//! entities, and their change subscriptions.

use gpui::{AppContext, Context, Window};
use gpui_component::input::{InputEvent, InputState};

use super::{AppView, DetailState, FilterState, Grantboard, ListingState, NavigationState};
use crate::store;
use crate::table_state::GrantTableState;
use crate::types::FilterCriteria;

impl Grantboard {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let grants = store::seed_grants();
        tracing::info!(grants = grants.len(), "seeded grant store");

        let search_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Search grants..."));
        let min_amount_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Min amount"));
        let max_amount_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Max amount"));
        let min_deadline_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Deadline after (YYYY-MM-DD)"));

        // Re-run the pipeline on every keystroke in any of the inputs
        for input in [
            &search_input,
            &min_amount_input,
            &max_amount_input,
            &min_deadline_input,
        ] {
            cx.subscribe(input, |this: &mut Grantboard, _input, event: &InputEvent, cx| {
                if let InputEvent::Change { .. } = event {
                    this.apply_filters(cx);
                }
            })
            .detach();
        }

        let filtered: Vec<usize> = (0..grants.len()).collect();
        let table = GrantTableState::new(filtered.len());

        Self {
            store: grants,
            navigation: NavigationState {
                view: AppView::Grants,
            },
            filters: FilterState {
                search: String::new(),
                criteria: FilterCriteria::default(),
                search_input: Some(search_input),
                min_amount_input: Some(min_amount_input),
                max_amount_input: Some(max_amount_input),
                min_deadline_input: Some(min_deadline_input),
                sector_dropdown_open: false,
                status_dropdown_open: false,
            },
            listing: ListingState { filtered, table },
            detail: DetailState {
                selected: None,
                backdrop_clicked: false,
            },
        }
    }
}
