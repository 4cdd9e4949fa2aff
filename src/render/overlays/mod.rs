//! Modal overlays rendered above the listing.

mod modal_base;
mod grant_detail;

pub use grant_detail::render_grant_detail;
