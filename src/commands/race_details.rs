//! Race details (`/season/race/:seasonId/:round`): results table or time chart.

use serde_json::json;
use tracing::warn;

use crate::{
    cli::types::ResultsView,
    core::paginate::{offset_for, page_count, slice},
    ergast::ErgastClient,
    models::DriverResult,
    view::{
        chart::{chart_points, render_chart},
        render::{render_breadcrumbs, render_failure, render_pager, render_results},
        state::ROWS_PER_TABLE_PAGE,
        PageState, Route,
    },
    Result, RoundId, SeasonId,
};

#[derive(Debug, Clone)]
pub struct RaceDetailsPage {
    pub season: SeasonId,
    pub round: RoundId,
    pub view: ResultsView,
    pub page: usize,
    pub state: PageState<Vec<DriverResult>>,
}

impl RaceDetailsPage {
    pub async fn load(
        client: &ErgastClient,
        season: SeasonId,
        round: RoundId,
        view: ResultsView,
        page: usize,
    ) -> Self {
        let state = match client.fetch_race_results(&season, &round).await {
            Ok(results) if results.is_empty() => PageState::Empty {
                message: "No results available for this race.".to_string(),
            },
            Ok(results) => PageState::Loaded {
                data: results.items,
            },
            Err(e) => {
                if e.is_fetch_failure() {
                    warn!(%season, %round, error = %e, "failed to fetch race results");
                } else {
                    warn!(%season, %round, error = %e, "unreadable race results response");
                }
                PageState::Failed {
                    message: "Failed to load race results. Please try again later.".to_string(),
                }
            }
        };

        Self {
            season,
            round,
            view,
            page: page.max(1),
            state,
        }
    }

    pub fn results(&self) -> &[DriverResult] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn visible(&self) -> Result<&[DriverResult]> {
        Ok(slice(self.results(), self.page, ROWS_PER_TABLE_PAGE)?)
    }

    pub fn page_count(&self) -> Result<usize> {
        Ok(page_count(self.results().len(), ROWS_PER_TABLE_PAGE)?)
    }

    pub fn render(&self) -> Result<String> {
        let route = Route::RaceDetails {
            season: self.season.clone(),
            round: self.round.clone(),
        };

        let mut out = String::new();
        out.push_str(&render_breadcrumbs(&route.breadcrumbs()));
        out.push_str(&format!(
            "\n\nRace Details - Season {}, Round {}\n",
            self.season, self.round
        ));

        match &self.state {
            PageState::Loading => out.push_str("Loading...\n"),
            PageState::Failed { message } => out.push_str(&render_failure(message)),
            PageState::Empty { message } => {
                out.push_str(message);
                out.push('\n');
            }
            PageState::Loaded { .. } => {
                out.push_str("Participating Drivers\n\n");
                match self.view {
                    ResultsView::List => {
                        out.push_str(&render_results(
                            self.visible()?,
                            offset_for(self.page, ROWS_PER_TABLE_PAGE),
                        ));
                        out.push('\n');
                        out.push_str(&render_pager(self.page, self.page_count()?));
                        out.push('\n');
                    }
                    // The chart always covers the whole field
                    ResultsView::Chart => {
                        out.push_str(&render_chart(&chart_points(self.results())));
                    }
                }
            }
        }
        Ok(out)
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        let state = match &self.state {
            PageState::Loaded { .. } => json!({ "state": "loaded" }),
            other => serde_json::to_value(other)?,
        };

        let body = match self.view {
            ResultsView::List => json!({
                "page": self.page,
                "pages": self.page_count()?,
                "results": self.visible()?,
            }),
            ResultsView::Chart => json!({ "chart": chart_points(self.results()) }),
        };

        Ok(json!({
            "season": self.season,
            "round": self.round,
            "view": self.view.to_string(),
            "data": body,
            "state": state,
        }))
    }
}

/// Handle the results command
pub async fn handle_race_details(
    client: &ErgastClient,
    season: SeasonId,
    round: RoundId,
    view: ResultsView,
    page: usize,
    as_json: bool,
) -> Result<()> {
    let details = RaceDetailsPage::load(client, season, round, view, page).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&details.to_json()?)?); // tarpaulin::skip
    } else {
        print!("{}", details.render()?); // tarpaulin::skip
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constructor, Driver, RaceTime};

    fn result(position: usize, millis: Option<u64>) -> DriverResult {
        DriverResult {
            position: position.to_string(),
            driver: Driver {
                given_name: "Driver".to_string(),
                family_name: position.to_string(),
                nationality: "Italian".to_string(),
            },
            constructor: Constructor {
                name: "Ferrari".to_string(),
            },
            time: millis.map(|m| RaceTime {
                display: String::new(),
                millis: m.to_string(),
            }),
        }
    }

    fn page(view: ResultsView, page: usize, count: usize) -> RaceDetailsPage {
        RaceDetailsPage {
            season: SeasonId::new("2019").unwrap(),
            round: RoundId::new("14").unwrap(),
            view,
            page,
            state: PageState::Loaded {
                data: (1..=count)
                    .map(|p| result(p, (p <= 15).then_some(5_000_000 + p as u64)))
                    .collect(),
            },
        }
    }

    #[test]
    fn test_second_page_continues_numbering() {
        let details = page(ResultsView::List, 2, 20);
        let out = details.render().unwrap();

        assert!(out.contains("Seasons > Races for Season 2019 > Race Details - Round 14"));
        assert!(out.contains("\n11  11th"));
        assert!(out.contains("Page 2 of 2"));
        // non-finishers render the sentinel
        assert!(out.lines().any(|l| l.starts_with("20") && l.ends_with("N/A")));
    }

    #[test]
    fn test_chart_view_skips_non_finishers() {
        let details = page(ResultsView::Chart, 1, 20);
        let json = details.to_json().unwrap();
        assert_eq!(json["data"]["chart"].as_array().unwrap().len(), 15);
        assert_eq!(json["view"], "chart");
    }

    #[test]
    fn test_empty_results_message() {
        let mut details = page(ResultsView::List, 1, 0);
        details.state = PageState::Empty {
            message: "No results available for this race.".to_string(),
        };
        let out = details.render().unwrap();
        assert!(out.contains("No results available for this race."));
        assert!(!out.contains("Go back to home"));
    }
}
