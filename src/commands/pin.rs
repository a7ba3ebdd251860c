//! Pin toggle command

use crate::{
    commands::races::RacesPage,
    ergast::ErgastClient,
    storage::{KeyValueStore, PinStore},
    view::ListingState,
    Result, RoundId, SeasonId,
};

/// Toggle a race's pin, print the confirmation, then the re-sorted season.
pub async fn handle_pin<S: KeyValueStore>(
    client: &ErgastClient,
    pins: &mut PinStore<S>,
    season: SeasonId,
    round: RoundId,
    listing: ListingState,
) -> Result<()> {
    let mut page = RacesPage::load(client, pins, season, listing).await?;
    page.toggle_pin(pins, &round)?;

    if let Some(notice) = page.take_notice() {
        println!("✓ {}", notice.message()); // tarpaulin::skip
        println!();
    }
    print!("{}", page.render()?); // tarpaulin::skip

    Ok(())
}
