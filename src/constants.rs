//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Listing
// ============================================================================

/// Rows shown per page of the grants table
pub const PAGE_SIZE: usize = 5;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Height of the filter bar in pixels
pub const FILTER_BAR_HEIGHT: f32 = 44.0;

/// Height of a grants table row in pixels
pub const ROW_HEIGHT: f32 = 52.0;

/// Height of the pagination footer in pixels
pub const FOOTER_HEIGHT: f32 = 36.0;

// ============================================================================
// Modal
// ============================================================================

/// Width of the grant detail modal
pub const MODAL_WIDTH: f32 = 640.0;

/// Maximum height of the grant detail modal
pub const MODAL_MAX_HEIGHT: f32 = 560.0;

/// Backdrop darkening behind modals
pub const MODAL_BACKDROP_OPACITY: f32 = 0.5;
