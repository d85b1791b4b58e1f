// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::collections::HashSet;

use court_rotation::{CourtAssignment, ParticipantId, Schedule};
use itertools::Itertools;


// Seated participant ids of a court in slot order; empty slots are skipped.
#[allow(dead_code)]
pub fn court_ids(court: &CourtAssignment) -> Vec<u32> {
    court.participants().map(|p| p.id.0).collect()
}

#[allow(dead_code)]
pub fn round_ids(schedule: &Schedule, round_index: usize) -> Vec<Vec<u32>> {
    schedule.rounds[round_index].courts.iter().map(court_ids).collect()
}

// Invariants that hold for every schedule regardless of the mode.
#[allow(dead_code)]
pub fn assert_well_formed(schedule: &Schedule, rounds: usize, courts: usize) {
    assert_eq!(schedule.len(), rounds);
    for (round_index, round) in schedule.iter().enumerate() {
        assert_eq!(round.round_number, round_index + 1);
        assert!(round.courts.len() <= courts, "Round {} has too many courts", round.round_number);
        for (court_index, court) in round.courts.iter().enumerate() {
            assert_eq!(court.court_number, court_index + 1);
            let ids = court_ids(court);
            assert!(ids.iter().all_unique(), "Duplicate player on court: {ids:?}");
        }
        let mut seen = HashSet::new();
        for p in round.participants() {
            assert!(seen.insert(p.id), "{} plays twice in round {}", p.name, round.round_number);
        }
    }
}

// Difference between the most and the least active participant among ids `1..=roster_size`.
#[allow(dead_code)]
pub fn appearance_spread(schedule: &Schedule, roster_size: u32) -> usize {
    let counts = schedule.appearance_counts();
    let (min, max) = (1..=roster_size)
        .map(|id| counts.get(&ParticipantId(id)).copied().unwrap_or(0))
        .minmax()
        .into_option()
        .unwrap();
    max - min
}
