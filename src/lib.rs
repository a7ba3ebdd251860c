//! F1 Seasons Library
//!
//! Browse Formula 1 championship seasons, the races of a season and the
//! results of a race, backed by the public Ergast API.
//!
//! ## Features
//!
//! - **Season, Race and Result Fetching**: thin wrappers over the Ergast REST endpoints
//! - **Client-side Pagination**: 1-indexed slicing of whole collections
//! - **Pinned Races**: per-season pins kept in local storage and listed first
//! - **Formatting**: race clocks, ordinal positions, dates and map links
//! - **Routing**: the three pages plus a not-found view, with breadcrumbs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use f1_seasons::{
//!     commands::races::RacesPage, ergast::ErgastClient, storage::{MemoryStore, PinStore},
//!     view::ListingState, ListView, RoundId, SeasonId,
//! };
//!
//! # async fn example() -> f1_seasons::Result<()> {
//! let client = ErgastClient::new()?;
//! let mut pins = PinStore::new(MemoryStore::new());
//!
//! let season = SeasonId::new("2023")?;
//! let mut page = RacesPage::load(&client, &pins, season, ListingState::new(ListView::List)).await?;
//! page.toggle_pin(&mut pins, &RoundId::new("5")?)?;
//! print!("{}", page.render()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export F1_API_BASE_URL=http://localhost:8000/api/f1
//! export F1_SEASONS_DB=~/pins.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod ergast;
pub mod error;
pub mod models;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use cli::types::{ListView, ResultsView, RoundId, SeasonId};
pub use error::{F1Error, Result};
pub use models::{Circuit, Constructor, Driver, DriverResult, Page, PinnedRounds, Race, Season};

pub const BASE_URL_ENV_VAR: &str = "F1_API_BASE_URL";
pub const DB_PATH_ENV_VAR: &str = "F1_SEASONS_DB";
