//! Open a page by its route path

use crate::{
    cli::types::{ListView, ResultsView},
    commands::{
        race_details::handle_race_details, races::handle_races, seasons::handle_seasons,
        CommandContext,
    },
    storage::KeyValueStore,
    view::{render::render_breadcrumbs, render::render_not_found, ListingState, Route},
    Result,
};

/// Render the page behind `path`, or the not-found view for unknown paths.
pub async fn handle_open<S: KeyValueStore>(
    ctx: &CommandContext<S>,
    path: &str,
    as_json: bool,
) -> Result<()> {
    match Route::parse(path) {
        Route::SeasonList => {
            handle_seasons(&ctx.client, ListingState::new(ListView::default()), as_json).await
        }
        Route::RacesForSeason { season } => {
            handle_races(
                &ctx.client,
                &ctx.pins,
                season,
                ListingState::new(ListView::default()),
                as_json,
            )
            .await
        }
        Route::RaceDetails { season, round } => {
            handle_race_details(
                &ctx.client,
                season,
                round,
                ResultsView::default(),
                1,
                as_json,
            )
            .await
        }
        route @ Route::NotFound { .. } => {
            // tarpaulin::skip - console output
            println!("{}\n", render_breadcrumbs(&route.breadcrumbs()));
            print!("{}", render_not_found(&route.path()));
            Ok(())
        }
    }
}
