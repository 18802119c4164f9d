//! Per-file emission services shared by the header and source emitters.
//!
//! - [`IncludeTracker`] - Header-name deduplication for one class pass
//! - [`ConditionalGuard`] - Balanced preprocessor guards around member artifacts

mod guard;
mod includes;

pub use guard::ConditionalGuard;
pub use includes::{IncludeTracker, TrackerError};
