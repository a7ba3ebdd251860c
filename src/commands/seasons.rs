//! Season listing page (`/`).

use serde_json::json;
use tracing::warn;

use crate::{
    core::paginate::{page_count, slice},
    ergast::{ErgastClient, FETCH_ALL_LIMIT},
    models::Season,
    view::{
        render::{render_breadcrumbs, render_failure, render_pager, render_seasons},
        state::SEASONS_PER_PAGE,
        ListingState, PageState, Route,
    },
    Result,
};

/// The season list with its layout and current page.
#[derive(Debug, Clone)]
pub struct SeasonsPage {
    pub listing: ListingState,
    pub state: PageState<Vec<Season>>,
}

impl SeasonsPage {
    pub async fn load(client: &ErgastClient, listing: ListingState) -> Self {
        let state = match client.fetch_seasons(FETCH_ALL_LIMIT, 0).await {
            Ok(page) if page.is_empty() => PageState::Empty {
                message: "No seasons found.".to_string(),
            },
            Ok(page) => {
                if page.total as usize > page.items.len() {
                    warn!(
                        total = page.total,
                        fetched = page.items.len(),
                        "season list truncated"
                    );
                }
                PageState::Loaded { data: page.items }
            }
            Err(e) => {
                if e.is_fetch_failure() {
                    warn!(error = %e, "failed to fetch seasons");
                } else {
                    warn!(error = %e, "unreadable seasons response");
                }
                PageState::Failed {
                    message: "Failed to fetch seasons data. Please try again later.".to_string(),
                }
            }
        };

        Self { listing, state }
    }

    pub fn visible(&self) -> Result<&[Season]> {
        let seasons = self.state.data().map(Vec::as_slice).unwrap_or_default();
        Ok(slice(seasons, self.listing.page, SEASONS_PER_PAGE)?)
    }

    pub fn page_count(&self) -> Result<usize> {
        let total = self.state.data().map_or(0, Vec::len);
        Ok(page_count(total, SEASONS_PER_PAGE)?)
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        out.push_str(&render_breadcrumbs(&Route::SeasonList.breadcrumbs()));
        out.push_str("\n\nSeasons\n");

        match &self.state {
            PageState::Loading => out.push_str("Loading...\n"),
            PageState::Failed { message } => out.push_str(&render_failure(message)),
            PageState::Empty { message } => {
                out.push_str(message);
                out.push('\n');
            }
            PageState::Loaded { .. } => {
                out.push_str("Select a season to view its races.\n\n");
                out.push_str(&render_seasons(self.visible()?, self.listing.view));
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
            "page": self.listing.page,
            "pages": self.page_count()?,
            "seasons": self.visible()?,
            "state": state,
        }))
    }
}

/// Handle the seasons command
pub async fn handle_seasons(
    client: &ErgastClient,
    listing: ListingState,
    as_json: bool,
) -> Result<()> {
    let page = SeasonsPage::load(client, listing).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&page.to_json()?)?); // tarpaulin::skip
    } else {
        print!("{}", page.render()?); // tarpaulin::skip
    }
    Ok(())
}
