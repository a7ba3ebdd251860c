//! Route table and breadcrumbs.

use std::fmt;

use crate::{RoundId, SeasonId};

/// The three pages plus the catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    SeasonList,
    /// `/season/:seasonId`
    RacesForSeason { season: SeasonId },
    /// `/season/race/:seasonId/:round`
    RaceDetails { season: SeasonId, round: RoundId },
    NotFound { path: String },
}

impl Route {
    /// Resolve a path. Anything that does not match a page, including
    /// non-numeric ids, resolves to [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Some(Route::SeasonList),
            ["season", season] => SeasonId::new(*season)
                .ok()
                .map(|season| Route::RacesForSeason { season }),
            ["season", "race", season, round] => {
                match (SeasonId::new(*season), RoundId::new(*round)) {
                    (Ok(season), Ok(round)) => Some(Route::RaceDetails { season, round }),
                    _ => None,
                }
            }
            _ => None,
        };

        route.unwrap_or_else(|| Route::NotFound {
            path: path.to_string(),
        })
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::SeasonList => "/".to_string(),
            Route::RacesForSeason { season } => format!("/season/{season}"),
            Route::RaceDetails { season, round } => format!("/season/race/{season}/{round}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        match self {
            Route::SeasonList => vec![Crumb::current("Seasons")],
            Route::RacesForSeason { season } => vec![
                Crumb::link("Seasons", Route::SeasonList),
                Crumb::current(format!("Season {season}")),
            ],
            Route::RaceDetails { season, round } => vec![
                Crumb::link("Seasons", Route::SeasonList),
                Crumb::link(
                    format!("Races for Season {season}"),
                    Route::RacesForSeason {
                        season: season.clone(),
                    },
                ),
                Crumb::current(format!("Race Details - Round {round}")),
            ],
            Route::NotFound { .. } => vec![
                Crumb::link("Seasons", Route::SeasonList),
                Crumb::current("Not Found"),
            ],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One breadcrumb; the last crumb of a trail has no target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: Option<Route>,
}

impl Crumb {
    fn link(label: impl Into<String>, target: Route) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(s: &str) -> SeasonId {
        SeasonId::new(s).unwrap()
    }

    #[test]
    fn test_root() {
        assert_eq!(Route::parse("/"), Route::SeasonList);
        assert_eq!(Route::parse(""), Route::SeasonList);
    }

    #[test]
    fn test_races_for_season() {
        assert_eq!(
            Route::parse("/season/2023"),
            Route::RacesForSeason {
                season: season("2023")
            }
        );
        assert_eq!(
            Route::parse("/season/2023/"),
            Route::RacesForSeason {
                season: season("2023")
            }
        );
    }

    #[test]
    fn test_race_details() {
        assert_eq!(
            Route::parse("/season/race/2023/5"),
            Route::RaceDetails {
                season: season("2023"),
                round: RoundId::new("5").unwrap()
            }
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in [
            "/seasons",
            "/season",
            "/season/abc",
            "/season/race/2023",
            "/season/race/2023/x",
            "/season/2023/extra",
            "/race/5",
        ] {
            assert!(
                matches!(Route::parse(path), Route::NotFound { .. }),
                "{path} should be not found"
            );
        }
    }

    #[test]
    fn test_path_roundtrip() {
        for path in ["/", "/season/1999", "/season/race/1999/16"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_breadcrumbs_for_race_details() {
        let route = Route::parse("/season/race/2021/3");
        let labels: Vec<String> = route
            .breadcrumbs()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Seasons".to_string(),
                "Races for Season 2021".to_string(),
                "Race Details - Round 3".to_string()
            ]
        );
    }

    #[test]
    fn test_breadcrumb_targets() {
        let crumbs = Route::parse("/season/2021").breadcrumbs();
        assert_eq!(crumbs[0].target, Some(Route::SeasonList));
        assert_eq!(crumbs[1].target, None);
    }
}
