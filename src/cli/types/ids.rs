//! ID types for seasons and rounds.

use crate::error::{F1Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season identifier (the championship year).
///
/// Kept as the string the API uses, but validated to be all digits so it is
/// safe to splice into request paths and storage keys.
///
/// # Examples
///
/// ```rust
/// use f1_seasons::SeasonId;
///
/// let season = SeasonId::new("2023").unwrap();
/// assert_eq!(season.as_str(), "2023");
/// assert!(SeasonId::new("20x3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonId(String);

impl SeasonId {
    pub fn new(season: impl Into<String>) -> Result<Self> {
        let season = season.into();
        let trimmed = season.trim();
        if is_number(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(F1Error::InvalidSeason { season })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = F1Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Type-safe wrapper for a race round within a season
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(String);

impl RoundId {
    /// Rounds are stored in canonical form (`05` becomes `5`) so they compare
    /// equal to the API's `round` field.
    pub fn new(round: impl Into<String>) -> Result<Self> {
        let round = round.into();
        let trimmed = round.trim();
        if !is_number(trimmed) {
            return Err(F1Error::InvalidRound { round });
        }
        match trimmed.parse::<u32>() {
            Ok(n) => Ok(Self(n.to_string())),
            Err(_) => Err(F1Error::InvalidRound { round }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoundId {
    type Err = F1Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
