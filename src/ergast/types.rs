//! Wire envelope of the Ergast API.
//!
//! Every response is wrapped in `MRData`, which carries the paging metadata
//! (as numeric strings) next to exactly one table.

use serde::{de::Error, Deserialize, Deserializer};

use crate::models::{DriverResult, Page, Race, Season};

#[cfg(test)]
mod tests;

fn de_str_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(u32),
    }

    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Str(s) => s.trim().parse::<u32>().map_err(D::Error::custom),
        StrOrNum::Num(n) => Ok(n),
    }
}

/// Top-level envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "MRData")]
    pub mr_data: MrData<T>,
}

#[derive(Debug, Deserialize)]
pub struct MrData<T> {
    #[serde(deserialize_with = "de_str_u32")]
    pub limit: u32,
    #[serde(deserialize_with = "de_str_u32")]
    pub offset: u32,
    #[serde(deserialize_with = "de_str_u32")]
    pub total: u32,
    #[serde(flatten)]
    pub table: T,
}

#[derive(Debug, Deserialize)]
pub struct SeasonTableWrapper {
    #[serde(rename = "SeasonTable")]
    pub season_table: SeasonTable,
}

#[derive(Debug, Deserialize)]
pub struct SeasonTable {
    #[serde(rename = "Seasons", default)]
    pub seasons: Vec<Season>,
}

#[derive(Debug, Deserialize)]
pub struct RaceTableWrapper<R> {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable<R>,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable<R> {
    #[serde(rename = "Races", default = "Vec::new")]
    pub races: Vec<R>,
}

/// A race entry from `/{season}/{round}/results.json`; only the results are kept.
#[derive(Debug, Deserialize)]
pub struct RaceWithResults {
    #[serde(rename = "Results", default)]
    pub results: Vec<DriverResult>,
}

pub type SeasonsEnvelope = Envelope<SeasonTableWrapper>;
pub type RacesEnvelope = Envelope<RaceTableWrapper<Race>>;
pub type ResultsEnvelope = Envelope<RaceTableWrapper<RaceWithResults>>;

impl SeasonsEnvelope {
    pub fn into_page(self) -> Page<Season> {
        Page {
            items: self.mr_data.table.season_table.seasons,
            total: self.mr_data.total,
        }
    }
}

impl RacesEnvelope {
    pub fn into_page(self) -> Page<Race> {
        Page {
            items: self.mr_data.table.race_table.races,
            total: self.mr_data.total,
        }
    }
}

impl ResultsEnvelope {
    /// Results of the first race in the table. `total` is the number of
    /// classified entries the API reports for that race.
    pub fn into_page(self) -> Page<DriverResult> {
        let items = self
            .mr_data
            .table
            .race_table
            .races
            .into_iter()
            .next()
            .map(|race| race.results)
            .unwrap_or_default();

        Page {
            items,
            total: self.mr_data.total,
        }
    }
}
