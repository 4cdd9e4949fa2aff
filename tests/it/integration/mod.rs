//! Integration tests for Grantboard.
//!
//! These tests drive the store/filter/paginate pipeline end-to-end the way
//! the application's handlers do, verifying complete user workflows.
