//! Plain-text rendering of listings, cards and result tables.

use crate::{
    cli::types::ListView,
    core::format::{format_race_date, maps_url, position_cell, time_cell},
    models::{DriverResult, PinnedRounds, Race, Season},
    view::routes::Crumb,
    SeasonId,
};

fn table_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{:<w$}", c.as_ref()))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Simple left-aligned table with a header row.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    for line in std::iter::once(table_line(headers, &widths))
        .chain(std::iter::once(table_line(&rule[..], &widths)))
        .chain(rows.iter().map(|row| table_line(&row[..], &widths)))
    {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_breadcrumbs(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}

pub fn render_pager(page: usize, pages: usize) -> String {
    if pages == 0 {
        return String::new();
    }
    format!("Page {page} of {pages}")
}

pub fn render_seasons(seasons: &[Season], view: ListView) -> String {
    match view {
        ListView::List => {
            let rows: Vec<Vec<String>> = seasons
                .iter()
                .map(|s| vec![s.season.clone(), s.url.clone()])
                .collect();
            table(&["Season", "Link"], &rows)
        }
        ListView::Card => seasons
            .iter()
            .map(|s| {
                format!(
                    "[ {} ]  races: f1-seasons races {}\n",
                    s.season, s.season
                )
            })
            .collect(),
    }
}

fn pin_marker(pinned: &PinnedRounds, race: &Race) -> &'static str {
    if pinned.contains(&race.round) {
        "📌"
    } else {
        ""
    }
}

pub fn render_races(
    races: &[Race],
    pinned: &PinnedRounds,
    view: ListView,
    season: &SeasonId,
) -> String {
    match view {
        ListView::List => {
            let rows: Vec<Vec<String>> = races
                .iter()
                .map(|r| {
                    vec![
                        pin_marker(pinned, r).to_string(),
                        r.round.clone(),
                        r.race_name.clone(),
                        r.circuit.name.clone(),
                        r.date.clone(),
                    ]
                })
                .collect();
            table(&["Pin", "Round", "Race Name", "Circuit", "Date"], &rows)
        }
        ListView::Card => races
            .iter()
            .map(|r| render_race_card(r, pinned.contains(&r.round), season))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_race_card(race: &Race, pinned: bool, season: &SeasonId) -> String {
    let title = if pinned {
        format!("📌 {}", race.race_name)
    } else {
        race.race_name.clone()
    };

    format!(
        "{title}\n  Circuit: {}\n  Country: {}\n  Date:    {}\n  Round:   {}\n  More:    {}\n  Map:     {}\n  Details: f1-seasons results {season} {}\n",
        race.circuit.name,
        race.circuit.location.country,
        format_race_date(&race.date),
        race.round,
        race.url,
        maps_url(&race.circuit.location.lat, &race.circuit.location.long),
        race.round,
    )
}

/// Results table; `first_index` is the zero-based index of the first row on
/// this page, so the `#` column keeps counting across pages.
pub fn render_results(results: &[DriverResult], first_index: usize) -> String {
    let rows: Vec<Vec<String>> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (first_index + i + 1).to_string(),
                position_cell(&r.position),
                r.driver.full_name(),
                r.driver.nationality.clone(),
                r.constructor.name.clone(),
                time_cell(r.time.as_ref()),
            ]
        })
        .collect();
    table(
        &["#", "Position", "Driver Name", "Nationality", "Team", "Time"],
        &rows,
    )
}

/// Error block with the way back to the season list.
pub fn render_failure(message: &str) -> String {
    format!("{message}\nGo back to home: f1-seasons seasons\n")
}

pub fn render_not_found(path: &str) -> String {
    format!("404 - Page Not Found\nNo page at {path:?}.\nGo back to home: f1-seasons seasons\n")
}
