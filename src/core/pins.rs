//! Ordering of a season's races with pinned rounds first.

use crate::models::{PinnedRounds, Race};

/// Sort races so pinned rounds come first, each group ordered by numeric
/// round. The sort is stable, so equal rounds keep their received order, and
/// rounds that are not numbers go last in their group.
pub fn sort_by_pinned(races: &[Race], pinned: &PinnedRounds) -> Vec<Race> {
    let mut sorted = races.to_vec();
    sorted.sort_by_key(|race| {
        (
            !pinned.contains(&race.round),
            race.round.trim().parse::<u32>().unwrap_or(u32::MAX),
        )
    });
    sorted
}
