//! Application module - the main Grantboard application state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Grantboard struct definition and sub-structs
//! - `lifecycle` - Initialization: store seeding, input entities, subscriptions
//! - `filter_handlers` - Search, filter criteria, and pagination handlers
//! - `detail_handlers` - Detail modal and apply-view navigation handlers

mod state;
mod lifecycle;
mod filter_handlers;
mod detail_handlers;

pub use state::{
    AppView, DetailState, FilterState, Grantboard, ListingState, NavigationState,
};
