//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{ListView, ResultsView, RoundId, SeasonId};

use crate::view::ListingState;

/// Paging and layout shared by the listing commands
#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Page to show (1-based).
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Layout: list or card.
    #[clap(long, value_enum, default_value_t = ListView::default())]
    pub view: ListView,

    /// Output the page as JSON instead of text.
    #[clap(long)]
    pub json: bool,
}

impl ListingArgs {
    /// Listing state the flags ask for: the chosen layout, then the page.
    pub fn listing_state(&self) -> ListingState {
        ListingState::default()
            .with_view(self.view)
            .with_page(self.page as usize)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all championship seasons (`/`).
    Seasons {
        #[clap(flatten)]
        listing: ListingArgs,
    },

    /// List a season's races, pinned races first (`/season/:seasonId`).
    Races {
        /// Season year (e.g. 2023).
        season: SeasonId,

        #[clap(flatten)]
        listing: ListingArgs,
    },

    /// Show a race's results table or time chart (`/season/race/:seasonId/:round`).
    Results {
        /// Season year (e.g. 2023).
        season: SeasonId,

        /// Round number within the season.
        round: RoundId,

        /// Page of the results table (1-based).
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Layout: list or chart.
        #[clap(long, value_enum, default_value_t = ResultsView::default())]
        view: ResultsView,

        /// Output the page as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Pin a race to the top of its season, or unpin it.
    Pin {
        /// Season year (e.g. 2023).
        season: SeasonId,

        /// Round number to toggle.
        round: RoundId,

        /// Layout of the re-sorted listing.
        #[clap(long, value_enum, default_value_t = ListView::default())]
        view: ListView,
    },

    /// Render the page behind a route path, e.g. `/season/race/2023/5`.
    Open {
        /// Route path.
        path: String,

        /// Output the page as JSON instead of text.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "f1-seasons", about = "Browse Formula 1 seasons, races and results")]
pub struct F1 {
    /// API base URL (or set `F1_API_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Local storage file (or set `F1_SEASONS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log requests and storage activity to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
