//! Domain models shared by the fetchers, the pin store and the views.
//!
//! Field names are Rust-style; the `deserialize` renames map the Ergast wire
//! names onto them so JSON output stays in our own vocabulary.

use serde::{Deserialize, Serialize};

/// A championship season as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub season: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub lat: String,
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(rename(deserialize = "circuitName"))]
    pub name: String,
    #[serde(rename(deserialize = "Location"))]
    pub location: Location,
}

/// One race in a season, identified within that season by `round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub round: String,
    #[serde(rename(deserialize = "raceName"))]
    pub race_name: String,
    #[serde(rename(deserialize = "Circuit"))]
    pub circuit: Circuit,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename(deserialize = "givenName"))]
    pub given_name: String,
    #[serde(rename(deserialize = "familyName"))]
    pub family_name: String,
    pub nationality: String,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub name: String,
}

/// Finishing time; only classified finishers carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceTime {
    #[serde(rename(deserialize = "time"))]
    pub display: String,
    pub millis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverResult {
    pub position: String,
    #[serde(rename(deserialize = "Driver"))]
    pub driver: Driver,
    #[serde(rename(deserialize = "Constructor"))]
    pub constructor: Constructor,
    #[serde(rename(deserialize = "Time"), default)]
    pub time: Option<RaceTime>,
}

/// What every fetcher hands back: the items of this request plus the
/// remote total across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Rounds pinned within one season, in the order they were pinned.
///
/// Membership is unique: inserting a round that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnedRounds(Vec<String>);

impl PinnedRounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, round: &str) -> bool {
        self.0.iter().any(|r| r == round)
    }

    /// Returns `true` if the round was newly added.
    pub fn insert(&mut self, round: &str) -> bool {
        if self.contains(round) {
            return false;
        }
        self.0.push(round.to_string());
        true
    }

    /// Returns `true` if the round was present.
    pub fn remove(&mut self, round: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|r| r != round);
        before != self.0.len()
    }

    /// Flip membership and return the resulting state.
    pub fn toggle(&mut self, round: &str) -> bool {
        if self.remove(round) {
            false
        } else {
            self.insert(round)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PinnedRounds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pinned = Self::new();
        for round in iter {
            let round: String = round.into();
            pinned.insert(&round);
        }
        pinned
    }
}
