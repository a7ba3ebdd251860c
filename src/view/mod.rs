//! Presentation layer
//!
//! - `routes`: route table, not-found resolution and breadcrumbs
//! - `state`: immutable page/listing state and pin notices
//! - `render`: text tables and cards
//! - `chart`: bar chart of finishing times

pub mod chart;
pub mod render;
pub mod routes;
pub mod state;

pub use routes::{Crumb, Route};
pub use state::{ListingState, PageState, PinNotice};
