//! Type-safe wrappers for route ids and view modes.

pub mod ids;
pub mod view;

pub use ids::{RoundId, SeasonId};
pub use view::{ListView, ResultsView};
