//! Ephemeral page state.
//!
//! Each page goes load -> render, and afterwards only changes through user
//! actions (switch view, change page, re-sort). All transitions take `self`
//! and return the next state.

use serde::Serialize;

use crate::cli::types::ListView;

/// Seasons shown per page, whatever the layout.
pub const SEASONS_PER_PAGE: usize = 10;
/// Race cards shown per page.
pub const RACE_CARDS_PER_PAGE: usize = 4;
/// Rows shown per page in any table.
pub const ROWS_PER_TABLE_PAGE: usize = 10;

/// Outcome of loading a page's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageState<T> {
    Loading,
    /// Fetching failed; the page shows `message` and a way back home.
    Failed { message: String },
    /// The request worked but there is nothing to show.
    Empty { message: String },
    Loaded { data: T },
}

impl<T> PageState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, PageState::Loaded { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Loaded { data } => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            PageState::Loaded { data } => Some(data),
            _ => None,
        }
    }
}

/// View mode and current page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingState {
    pub view: ListView,
    pub page: usize,
}

impl ListingState {
    pub fn new(view: ListView) -> Self {
        Self { view, page: 1 }
    }

    /// Switching layout always returns to the first page.
    pub fn with_view(self, view: ListView) -> Self {
        Self { view, page: 1 }
    }

    /// Go to a page; anything below 1 means the first page.
    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    /// Page size for a race listing in the current layout.
    pub fn race_page_size(&self) -> usize {
        match self.view {
            ListView::List => ROWS_PER_TABLE_PAGE,
            ListView::Card => RACE_CARDS_PER_PAGE,
        }
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(ListView::default())
    }
}

/// Confirmation after pinning or unpinning a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinNotice {
    pub pinned: bool,
}

impl PinNotice {
    pub fn message(&self) -> &'static str {
        if self.pinned {
            "Race pinned and moved to the beginning!"
        } else {
            "Race un-pinned and moved to its original position!"
        }
    }
}
