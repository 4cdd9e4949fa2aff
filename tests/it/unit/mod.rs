//! Unit tests for Grantboard.

mod filter_tests;
mod format_tests;
mod snapshot_tests;
mod store_tests;
