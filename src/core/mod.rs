//! Core utilities for the F1 seasons client
//!
//! Small, stateless building blocks used by every page:
//! - `format`: clock, ordinal, date and map-link formatting
//! - `http`: request headers and URL joining
//! - `paginate`: 1-indexed page slicing
//! - `pins`: pinned-first race ordering

pub mod format;
pub mod http;
pub mod paginate;
pub mod pins;

// Re-export commonly used items for convenience
pub use format::{format_clock, format_duration, format_ordinal, FormatError, NOT_AVAILABLE};
pub use paginate::{page_count, slice, PageError};
pub use pins::sort_by_pinned;
