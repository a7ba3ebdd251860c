//! Per-season pinned races, persisted through a [`KeyValueStore`].

use tracing::{info, warn};

use crate::{
    models::PinnedRounds,
    storage::store::KeyValueStore,
    Result, RoundId, SeasonId,
};

const KEY_PREFIX: &str = "pinnedRaces_";

/// Storage key for a season's pins: `pinnedRaces_<season>`.
pub fn pinned_races_key(season: &SeasonId) -> String {
    format!("{KEY_PREFIX}{season}")
}

/// Pinned-set store scoped by season.
///
/// Reads and writes go straight to the backing store; there is no in-memory
/// copy to fall out of sync.
pub struct PinStore<S> {
    store: S,
}

impl<S: KeyValueStore> PinStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Pinned rounds for a season; empty if nothing was ever stored or the
    /// stored value cannot be read.
    pub fn pinned(&self, season: &SeasonId) -> Result<PinnedRounds> {
        let key = pinned_races_key(season);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(PinnedRounds::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(rounds) => Ok(rounds.into_iter().collect()),
            Err(e) => {
                warn!(%key, error = %e, "ignoring unreadable pinned races");
                Ok(PinnedRounds::new())
            }
        }
    }

    pub fn is_pinned(&self, season: &SeasonId, round: &RoundId) -> Result<bool> {
        Ok(self.pinned(season)?.contains(round.as_str()))
    }

    /// Flip a round's membership, persist it, and return whether it is now pinned.
    pub fn toggle_pin(&mut self, season: &SeasonId, round: &RoundId) -> Result<bool> {
        let mut pinned = self.pinned(season)?;
        let now_pinned = pinned.toggle(round.as_str());

        let value = serde_json::to_string(&pinned)?;
        self.store.set(&pinned_races_key(season), &value)?;

        info!(%season, %round, pinned = now_pinned, "toggled pin");
        Ok(now_pinned)
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> S {
        self.store
    }
}
