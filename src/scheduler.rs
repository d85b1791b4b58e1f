use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceCounter;
use crate::error::SchedulingError;
use crate::participant::Participant;
use crate::partnership::PartnershipLedger;
use crate::schedule::{CourtAssignment, PLAYERS_PER_COURT, Round, Schedule};
use crate::selector::select_group;
use crate::tiered::schedule_by_tier;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingMode {
    #[default]
    Standard,
    ByTier,
}

pub fn generate(
    mode: SchedulingMode, participants: &[Participant], courts: usize, rounds: usize,
) -> Result<Schedule<'_>, SchedulingError> {
    match mode {
        SchedulingMode::Standard => schedule(participants, courts, rounds),
        SchedulingMode::ByTier => Ok(schedule_by_tier(participants, courts, rounds)),
    }
}

// Builds `rounds` rounds of up to `courts` courts each from the whole roster. Every round seats
// the participants who have played least so far; within a round, groups are chosen to avoid
// repeating partnerships formed earlier in the run.
//
// `courts` and `rounds` are expected to be at least 1.
pub fn schedule(
    participants: &[Participant], courts: usize, rounds: usize,
) -> Result<Schedule<'_>, SchedulingError> {
    if participants.len() < PLAYERS_PER_COURT {
        return Err(SchedulingError::InsufficientParticipants { actual: participants.len() });
    }
    let mut appearances = AppearanceCounter::new();
    let mut ledger = PartnershipLedger::new();
    let mut schedule = Schedule::default();
    for round_number in 1..=rounds {
        let round =
            schedule_round(participants, courts, round_number, &mut appearances, &mut ledger);
        schedule.rounds.push(round);
    }
    info!(
        "Scheduled {} rounds on {} courts for {} participants ({} partnerships formed)",
        rounds,
        courts,
        participants.len(),
        ledger.len()
    );
    Ok(schedule)
}

fn schedule_round<'a>(
    participants: &'a [Participant], courts: usize, round_number: usize,
    appearances: &mut AppearanceCounter, ledger: &mut PartnershipLedger,
) -> Round<'a> {
    let capacity = courts * PLAYERS_PER_COURT;
    let mut pool = appearances.least_played(participants, capacity);
    let mut assignments = Vec::new();
    for court_number in 1..=courts {
        if pool.is_empty() {
            break;
        }
        let group = if pool.len() >= PLAYERS_PER_COURT {
            select_group(&pool, ledger)
        } else {
            // Fewer than a full court left: seat everyone and leave the rest empty.
            std::mem::take(&mut pool)
        };
        pool.retain(|p| group.iter().all(|g| g.id != p.id));
        appearances.record(&group);
        ledger.record(&group);
        debug!(
            "Round {round_number}, court {court_number}: {}",
            group.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        assignments.push(CourtAssignment::new(court_number, None, &group));
    }
    Round { round_number, courts: assignments }
}
