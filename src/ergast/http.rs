use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    core::http::{default_headers, join_url, USER_AGENT},
    ergast::types::{RacesEnvelope, ResultsEnvelope, SeasonsEnvelope},
    models::{DriverResult, Page, Race, Season},
    F1Error, Result, RoundId, SeasonId,
};


/// Base path for the Ergast F1 API.
pub const ERGAST_BASE_URL: &str = "https://ergast.com/api/f1";

/// Largest `limit` the API accepts; used when a page wants a whole collection.
pub const FETCH_ALL_LIMIT: u32 = 1000;

/// Thin client over the season, race and result endpoints.
///
/// Every call is a fresh request: nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct ErgastClient {
    http: Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(ERGAST_BASE_URL)
    }

    /// Point the client at another host, e.g. a mirror or a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /seasons.json`
    pub async fn fetch_seasons(&self, limit: u32, offset: u32) -> Result<Page<Season>> {
        let envelope: SeasonsEnvelope = self.get_json("seasons.json", limit, offset).await?;
        Ok(envelope.into_page())
    }

    /// `GET /{season}.json`
    pub async fn fetch_races(
        &self,
        season: &SeasonId,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Race>> {
        let envelope: RacesEnvelope = self
            .get_json(&format!("{season}.json"), limit, offset)
            .await?;
        Ok(envelope.into_page())
    }

    /// `GET /{season}/{round}/results.json`, unwrapped to the first race's results.
    pub async fn fetch_race_results(
        &self,
        season: &SeasonId,
        round: &RoundId,
    ) -> Result<Page<DriverResult>> {
        let envelope: ResultsEnvelope = self
            .get_json(&format!("{season}/{round}/results.json"), FETCH_ALL_LIMIT, 0)
            .await?;
        Ok(envelope.into_page())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, limit: u32, offset: u32) -> Result<T> {
        let url = join_url(&self.base_url, path);
        let params = [("limit", limit.to_string()), ("offset", offset.to_string())];

        debug!(%url, limit, offset, "requesting");

        let res = self.http.get(&url).query(&params).send().await?;

        let status = res.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "non-success response");
            return Err(F1Error::Fetch {
                status: status.as_u16(),
                url,
            });
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
