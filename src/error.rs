//! Error types for the F1 seasons client

use thiserror::Error;

use crate::core::{format::FormatError, paginate::PageError};


pub type Result<T> = std::result::Result<T, F1Error>;

#[derive(Error, Debug)]
pub enum F1Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ergast API returned {status} for {url}")]
    Fetch { status: u16, url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Local storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error("Invalid season: {season}")]
    InvalidSeason { season: String },

    #[error("Invalid round: {round}")]
    InvalidRound { round: String },

    #[error("Could not determine a data directory for local storage")]
    MissingDataDir,
}

impl F1Error {
    /// True for anything that went wrong while talking to the remote API,
    /// whether the transport failed or the server answered with a non-2xx.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, F1Error::Http(_) | F1Error::Fetch { .. })
    }
}
