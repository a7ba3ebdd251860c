//! Command implementations for the F1 seasons CLI
//!
//! Each page module loads its data, turns fetch outcomes into a
//! [`crate::view::PageState`], and renders it. Fetch failures never escape a
//! page; only storage and argument errors are returned to the caller.

pub mod open;
pub mod pin;
pub mod race_details;
pub mod races;
pub mod seasons;

use std::path::PathBuf;

use crate::{
    ergast::{ErgastClient, ERGAST_BASE_URL},
    storage::{KeyValueStore, PinStore, SqliteStore},
    Result, BASE_URL_ENV_VAR, DB_PATH_ENV_VAR,
};

/// Resources every page needs: the API client and the pinned-set store.
pub struct CommandContext<S> {
    pub client: ErgastClient,
    pub pins: PinStore<S>,
}

impl<S: KeyValueStore> CommandContext<S> {
    pub fn new(client: ErgastClient, store: S) -> Self {
        Self {
            client,
            pins: PinStore::new(store),
        }
    }
}

impl CommandContext<SqliteStore> {
    /// Build the context from CLI options, falling back to the environment
    /// and then to defaults.
    pub fn open(base_url: Option<String>, db_path: Option<PathBuf>) -> Result<Self> {
        let client = ErgastClient::with_base_url(resolve_base_url(base_url))?;
        let store = SqliteStore::open(resolve_db_path(db_path)?)?;
        Ok(Self::new(client, store))
    }
}

/// Resolve the API base URL from option or environment variable
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| ERGAST_BASE_URL.to_string())
}

/// Resolve the local storage path from option or environment variable
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path.or_else(|| {
        std::env::var_os(DB_PATH_ENV_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }) {
        return Ok(path);
    }
    SqliteStore::default_path()
}
