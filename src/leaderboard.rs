//! Mock leaderboard shown on the home screen.
//!
//! The competitor rows are fixed fixtures; only the angler's own row is
//! computed, from the stats facade. TODO: replace the fixtures once a
//! backend leaderboard exists.

use crate::{models::Catch, stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    TotalCatches,
    BiggestFish,
    MostSpecies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    pub value: String,
    pub rank: u32,
    pub is_current_user: bool,
}

impl LeaderboardEntry {
    fn competitor(id: &str, username: &str, value: &str, rank: u32) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            value: value.to_string(),
            rank,
            is_current_user: false,
        }
    }

    fn you(id: &str, value: String, rank: u32) -> Self {
        Self {
            id: id.to_string(),
            username: "You".to_string(),
            value,
            rank,
            is_current_user: true,
        }
    }
}

/// The requested board with the angler spliced in among the fixtures.
pub fn mock_board(board: Board, snapshot: &[Catch]) -> Vec<LeaderboardEntry> {
    match board {
        Board::TotalCatches => vec![
            LeaderboardEntry::you("1", stats::total_catches(snapshot).to_string(), 1),
            LeaderboardEntry::competitor("2", "FishMaster99", "47", 2),
            LeaderboardEntry::competitor("3", "AngelAnnie", "42", 3),
            LeaderboardEntry::competitor("4", "BassBoss", "38", 4),
            LeaderboardEntry::competitor("5", "TroutTracker", "35", 5),
        ],
        Board::BiggestFish => vec![
            LeaderboardEntry::competitor("1", "BigCatchMike", "15.2 lbs", 1),
            LeaderboardEntry::you(
                "2",
                stats::biggest_fish(snapshot)
                    .map(Catch::display_weight)
                    .unwrap_or_else(|| "0.0 lbs".to_string()),
                2,
            ),
            LeaderboardEntry::competitor("3", "LunkerLisa", "12.8 lbs", 3),
            LeaderboardEntry::competitor("4", "MonsterMark", "11.5 lbs", 4),
            LeaderboardEntry::competitor("5", "WhopperWill", "10.9 lbs", 5),
        ],
        Board::MostSpecies => vec![
            LeaderboardEntry::competitor("1", "SpeciesSeeker", "23", 1),
            LeaderboardEntry::competitor("2", "DiverseDan", "19", 2),
            LeaderboardEntry::you("3", stats::unique_species_count(snapshot).to_string(), 3),
            LeaderboardEntry::competitor("4", "VarietyVic", "15", 4),
            LeaderboardEntry::competitor("5", "MultiMary", "12", 5),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::models::FishingLocation;

    use super::*;

    fn catch(species: &str, weight: f64) -> Catch {
        Catch::log(
            species.to_string(),
            weight,
            18.0,
            None,
            FishingLocation::new(44.97, -93.26, None).unwrap(),
            1.0,
        )
    }

    #[test]
    fn every_board_has_five_entries_and_one_current_user() {
        for board in [Board::TotalCatches, Board::BiggestFish, Board::MostSpecies] {
            let entries = mock_board(board, &[]);

            assert_eq!(entries.len(), 5);
            assert_eq!(
                entries.iter().filter(|entry| entry.is_current_user).count(),
                1
            );
            assert_eq!(
                entries.iter().map(|entry| entry.rank).collect::<Vec<_>>(),
                vec![1, 2, 3, 4, 5]
            );
        }
    }

    #[test]
    fn total_catches_row_tracks_the_log() {
        let snapshot = vec![catch("Bass", 5.0), catch("Trout", 7.5)];

        let entries = mock_board(Board::TotalCatches, &snapshot);
        let you = entries.iter().find(|entry| entry.is_current_user).unwrap();

        assert_eq!(you.rank, 1);
        assert_eq!(you.value, "2");
    }

    #[test]
    fn biggest_fish_row_defaults_to_zero_pounds() {
        let entries = mock_board(Board::BiggestFish, &[]);
        let you = entries.iter().find(|entry| entry.is_current_user).unwrap();

        assert_eq!(you.rank, 2);
        assert_eq!(you.value, "0.0 lbs");
    }

    #[test]
    fn biggest_fish_row_shows_the_display_weight() {
        let snapshot = vec![catch("Bass", 5.0), catch("Trout", 7.5)];

        let entries = mock_board(Board::BiggestFish, &snapshot);
        let you = entries.iter().find(|entry| entry.is_current_user).unwrap();

        assert_eq!(you.value, "7.5 lbs");
    }

    #[test]
    fn most_species_row_counts_distinct_species() {
        let snapshot = vec![catch("Bass", 5.0), catch("Bass", 4.0), catch("Trout", 7.5)];

        let entries = mock_board(Board::MostSpecies, &snapshot);
        let you = entries.iter().find(|entry| entry.is_current_user).unwrap();

        assert_eq!(you.rank, 3);
        assert_eq!(you.value, "2");
    }
}
