//! Races for a season (`/season/:seasonId`), with pinned races first.

use serde_json::json;
use tracing::warn;

use crate::{
    core::{
        paginate::{page_count, slice},
        pins::sort_by_pinned,
    },
    ergast::{ErgastClient, FETCH_ALL_LIMIT},
    models::{PinnedRounds, Race},
    storage::{KeyValueStore, PinStore},
    view::{
        render::{render_breadcrumbs, render_failure, render_pager, render_races},
        ListingState, PageState, PinNotice, Route,
    },
    F1Error, Result, RoundId, SeasonId,
};

/// A season's races, sorted pinned-first, plus the view state around them.
#[derive(Debug, Clone)]
pub struct RacesPage {
    pub season: SeasonId,
    pub listing: ListingState,
    pub state: PageState<Vec<Race>>,
    pinned: PinnedRounds,
    notice: Option<PinNotice>,
}

impl RacesPage {
    /// Fetch the whole season and order it with the season's pins.
    ///
    /// Fetch problems end up in `state`; only a storage failure is returned.
    pub async fn load<S: KeyValueStore>(
        client: &ErgastClient,
        pins: &PinStore<S>,
        season: SeasonId,
        listing: ListingState,
    ) -> Result<Self> {
        let pinned = pins.pinned(&season)?;

        let state = match client.fetch_races(&season, FETCH_ALL_LIMIT, 0).await {
            Ok(page) if page.is_empty() => PageState::Empty {
                message: format!("No races found for season {season}."),
            },
            Ok(page) => {
                if page.total as usize > page.items.len() {
                    warn!(
                        %season,
                        total = page.total,
                        fetched = page.items.len(),
                        "race list truncated"
                    );
                }
                PageState::Loaded {
                    data: sort_by_pinned(&page.items, &pinned),
                }
            }
            Err(e) => {
                if e.is_fetch_failure() {
                    warn!(%season, error = %e, "failed to fetch races");
                } else {
                    warn!(%season, error = %e, "unreadable races response");
                }
                PageState::Failed {
                    message: "Failed to fetch race data. Please try again later.".to_string(),
                }
            }
        };

        Ok(Self {
            season,
            listing,
            state,
            pinned,
            notice: None,
        })
    }

    pub fn with_listing(self, listing: ListingState) -> Self {
        Self { listing, ..self }
    }

    /// All races in display order; empty unless loaded.
    pub fn races(&self) -> &[Race] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn pinned(&self) -> &PinnedRounds {
        &self.pinned
    }

    pub fn visible(&self) -> Result<&[Race]> {
        Ok(slice(
            self.races(),
            self.listing.page,
            self.listing.race_page_size(),
        )?)
    }

    pub fn page_count(&self) -> Result<usize> {
        Ok(page_count(self.races().len(), self.listing.race_page_size())?)
    }

    /// Pin or unpin a round, persist it, and re-sort what is on screen.
    ///
    /// Once the season is loaded only its listed rounds can be toggled; an
    /// unknown round fails with [`F1Error::InvalidRound`] and nothing is stored.
    pub fn toggle_pin<S: KeyValueStore>(
        &mut self,
        pins: &mut PinStore<S>,
        round: &RoundId,
    ) -> Result<PinNotice> {
        if self.state.is_loaded() && !self.races().iter().any(|r| r.round == round.as_str()) {
            return Err(F1Error::InvalidRound {
                round: round.to_string(),
            });
        }

        let now_pinned = pins.toggle_pin(&self.season, round)?;
        self.pinned = pins.pinned(&self.season)?;

        let pinned = &self.pinned;
        if let Some(races) = self.state.data_mut() {
            *races = sort_by_pinned(races, pinned);
        }

        let notice = PinNotice { pinned: now_pinned };
        self.notice = Some(notice);
        Ok(notice)
    }

    /// The pending confirmation, if any. It is handed out only once.
    pub fn take_notice(&mut self) -> Option<PinNotice> {
        self.notice.take()
    }

    pub fn render(&self) -> Result<String> {
        let route = Route::RacesForSeason {
            season: self.season.clone(),
        };

        let mut out = String::new();
        out.push_str(&render_breadcrumbs(&route.breadcrumbs()));
        out.push_str(&format!("\n\nRaces for Season {}\n", self.season));

        match &self.state {
            PageState::Loading => out.push_str("Loading...\n"),
            PageState::Failed { message } => out.push_str(&render_failure(message)),
            PageState::Empty { message } => out.push_str(&render_failure(message)),
            PageState::Loaded { .. } => {
                out.push_str("Select a race to view details.\n\n");
                out.push_str(&render_races(
                    self.visible()?,
                    &self.pinned,
                    self.listing.view,
                    &self.season,
                ));
                out.push('\n');
                out.push_str(&render_pager(self.listing.page, self.page_count()?));
                out.push('\n');
            }
        }
        Ok(out)
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        let state = match &self.state {
            PageState::Loaded { .. } => json!({ "state": "loaded" }),
            other => serde_json::to_value(other)?,
        };

        Ok(json!({
            "season": self.season,
            "page": self.listing.page,
            "pages": self.page_count()?,
            "pinned": self.pinned,
            "races": self.visible()?,
            "state": state,
        }))
    }
}

/// Handle the races command
pub async fn handle_races<S: KeyValueStore>(
    client: &ErgastClient,
    pins: &PinStore<S>,
    season: SeasonId,
    listing: ListingState,
    as_json: bool,
) -> Result<()> {
    let page = RacesPage::load(client, pins, season, listing).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&page.to_json()?)?); // tarpaulin::skip
    } else {
        print!("{}", page.render()?); // tarpaulin::skip
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::ListView,
        models::{Circuit, Location},
        storage::MemoryStore,
    };

    fn race(round: &str) -> Race {
        Race {
            round: round.to_string(),
            race_name: format!("Race {round}"),
            circuit: Circuit {
                name: "Circuit".to_string(),
                location: Location {
                    country: "Somewhere".to_string(),
                    lat: "0".to_string(),
                    long: "0".to_string(),
                },
            },
            date: "2023-01-01".to_string(),
            url: String::new(),
        }
    }

    fn loaded_page(rounds: &[&str], listing: ListingState) -> RacesPage {
        RacesPage {
            season: SeasonId::new("2023").unwrap(),
            listing,
            state: PageState::Loaded {
                data: rounds.iter().map(|r| race(r)).collect(),
            },
            pinned: PinnedRounds::new(),
            notice: None,
        }
    }

    fn rounds(page: &RacesPage) -> Vec<&str> {
        page.races().iter().map(|r| r.round.as_str()).collect()
    }

    #[test]
    fn test_toggle_pin_resorts_and_notifies_once() {
        let mut pins = PinStore::new(MemoryStore::new());
        let mut page = loaded_page(&["1", "2", "3"], ListingState::default());

        let notice = page
            .toggle_pin(&mut pins, &RoundId::new("3").unwrap())
            .unwrap();
        assert!(notice.pinned);
        assert_eq!(rounds(&page), vec!["3", "1", "2"]);

        assert_eq!(page.take_notice(), Some(PinNotice { pinned: true }));
        assert_eq!(page.take_notice(), None);
    }

    #[test]
    fn test_unpin_returns_race_to_its_position() {
        let mut pins = PinStore::new(MemoryStore::new());
        let mut page = loaded_page(&["1", "2", "3"], ListingState::default());
        let round = RoundId::new("2").unwrap();

        page.toggle_pin(&mut pins, &round).unwrap();
        assert_eq!(rounds(&page), vec!["2", "1", "3"]);

        let notice = page.toggle_pin(&mut pins, &round).unwrap();
        assert!(!notice.pinned);
        assert_eq!(
            notice.message(),
            "Race un-pinned and moved to its original position!"
        );
        assert_eq!(rounds(&page), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_visible_uses_view_page_size() {
        let all: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
        let refs: Vec<&str> = all.iter().map(String::as_str).collect();

        let cards = loaded_page(&refs, ListingState::new(ListView::Card).with_page(3));
        assert_eq!(cards.page_count().unwrap(), 3);
        let visible: Vec<&str> = cards
            .visible()
            .unwrap()
            .iter()
            .map(|r| r.round.as_str())
            .collect();
        assert_eq!(visible, vec!["9", "10"]);

        let list = cards.with_listing(ListingState::new(ListView::List));
        assert_eq!(list.page_count().unwrap(), 1);
        assert_eq!(list.visible().unwrap().len(), 10);
    }

    #[test]
    fn test_toggle_unknown_round_is_rejected() {
        let mut pins = PinStore::new(MemoryStore::new());
        let mut page = loaded_page(&["1", "5"], ListingState::default());

        let err = page
            .toggle_pin(&mut pins, &RoundId::new("99").unwrap())
            .unwrap_err();
        assert!(matches!(err, F1Error::InvalidRound { round } if round == "99"));

        assert!(pins.pinned(&page.season).unwrap().is_empty());
        assert_eq!(rounds(&page), vec!["1", "5"]);
        assert_eq!(page.take_notice(), None);
    }

    #[test]
    fn test_zero_padded_round_pins_listed_race() {
        let mut pins = PinStore::new(MemoryStore::new());
        let mut page = loaded_page(&["1", "5"], ListingState::default());

        let round: RoundId = "05".parse().unwrap();
        assert!(page.toggle_pin(&mut pins, &round).unwrap().pinned);

        assert_eq!(rounds(&page), vec!["5", "1"]);
        assert_eq!(
            pins.pinned(&page.season).unwrap().iter().collect::<Vec<_>>(),
            vec!["5"]
        );
        assert!(page.pinned().contains("5"));
    }

    #[test]
    fn test_toggle_on_failed_page_still_persists() {
        let mut pins = PinStore::new(MemoryStore::new());
        let mut page = loaded_page(&[], ListingState::default());
        page.state = PageState::Failed {
            message: "Failed to fetch race data. Please try again later.".to_string(),
        };

        let round = RoundId::new("4").unwrap();
        assert!(page.toggle_pin(&mut pins, &round).unwrap().pinned);
        assert!(pins.is_pinned(&page.season, &round).unwrap());
        assert!(page.races().is_empty());
    }

    #[test]
    fn test_render_failure_offers_way_home() {
        let mut page = loaded_page(&[], ListingState::default());
        page.state = PageState::Failed {
            message: "Failed to fetch race data. Please try again later.".to_string(),
        };

        let out = page.render().unwrap();
        assert!(out.starts_with("Seasons > Season 2023"));
        assert!(out.contains("Failed to fetch race data."));
        assert!(out.contains("Go back to home"));
    }
}
