//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use f1_seasons::{
    cli::{Commands, F1},
    commands::{
        open::handle_open, pin::handle_pin, race_details::handle_race_details,
        races::handle_races, seasons::handle_seasons, CommandContext,
    },
    view::ListingState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = F1::parse();

    let default_filter = if app.verbose {
        "f1_seasons=debug"
    } else {
        "f1_seasons=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut ctx = CommandContext::open(app.base_url, app.db)
        .context("failed to set up API client and local storage")?;

    match app.command {
        Commands::Seasons { listing } => {
            handle_seasons(&ctx.client, listing.listing_state(), listing.json).await?
        }

        Commands::Races { season, listing } => {
            handle_races(
                &ctx.client,
                &ctx.pins,
                season,
                listing.listing_state(),
                listing.json,
            )
            .await?
        }

        Commands::Results {
            season,
            round,
            page,
            view,
            json,
        } => handle_race_details(&ctx.client, season, round, view, page as usize, json).await?,

        Commands::Pin {
            season,
            round,
            view,
        } => {
            handle_pin(
                &ctx.client,
                &mut ctx.pins,
                season,
                round,
                ListingState::default().with_view(view),
            )
            .await?
        }

        Commands::Open { path, json } => handle_open(&ctx, &path, json).await?,
    }

    Ok(())
}
