//! Grantboard - a browsable, filterable grant listing.
//!
//! The pipeline is strictly one-directional: the immutable grant store feeds
//! the filter pipeline, the paginator slices the filtered list, and the render
//! layer projects the current page. Every user input mutates local view state
//! and triggers a deterministic recomputation.
//!
//! Module map:
//! - `types` - grant records, status enum, filter criteria
//! - `store` - seed data and startup validation
//! - `filter` - pure conjunctive filter pipeline
//! - `table_state` - clamped pagination over the filtered list
//! - `format` - currency and deadline display helpers
//! - `app` - the `Grantboard` state struct and its handlers
//! - `render` - stateless render functions and the `Render` impl

pub mod app;
pub mod constants;
pub mod filter;
pub mod format;
pub mod render;
pub mod store;
pub mod table_state;
pub mod types;
