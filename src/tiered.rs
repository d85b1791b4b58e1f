use std::collections::HashSet;

use enum_map::EnumMap;
use itertools::Itertools;
use log::{debug, info};
use strum::IntoEnumIterator;

use crate::appearance::AppearanceCounter;
use crate::participant::{CourtTier, Participant, ParticipantId, Tier};
use crate::partnership::PartnershipLedger;
use crate::schedule::{CourtAssignment, PLAYERS_PER_COURT, Round, Schedule};
use crate::selector::select_group;


// Fairness state of one pool: a tier, or the cross-tier mixed pool.
#[derive(Clone, Debug, Default)]
struct PoolState {
    appearances: AppearanceCounter,
    ledger: PartnershipLedger,
}

impl PoolState {
    // `available` must hold at least `PLAYERS_PER_COURT` participants.
    fn seat<'a>(&mut self, available: &[&'a Participant]) -> Vec<&'a Participant> {
        let candidates =
            self.appearances.least_played(available.iter().copied(), PLAYERS_PER_COURT);
        let group = select_group(&candidates, &self.ledger);
        self.appearances.record(&group);
        self.ledger.record(&group);
        group
    }
}

// Like `schedule`, but prefers same-tier courts. Each round hands one court to every tier that
// can fill it, in `Tier` order, until the court budget runs out. If a court is still free, one
// mixed court is drawn from everybody not yet playing this round.
//
// Tiers and the mixed pool keep separate appearance counters and partnership ledgers. A roster
// that cannot fill any court produces rounds without courts rather than an error.
pub fn schedule_by_tier(
    participants: &[Participant], courts: usize, rounds: usize,
) -> Schedule<'_> {
    let mut members: EnumMap<Tier, Vec<&Participant>> = EnumMap::default();
    for p in participants {
        members[p.tier].push(p);
    }
    let mut tier_pools: EnumMap<Tier, PoolState> = EnumMap::default();
    let mut mixed_pool = PoolState::default();
    let mut schedule = Schedule::default();

    for round_number in 1..=rounds {
        let mut used: HashSet<ParticipantId> = HashSet::new();
        let mut assignments = Vec::new();

        for tier in Tier::iter() {
            if assignments.len() >= courts {
                break;
            }
            let available =
                members[tier].iter().copied().filter(|p| !used.contains(&p.id)).collect_vec();
            if available.len() < PLAYERS_PER_COURT {
                continue;
            }
            let group = tier_pools[tier].seat(&available);
            used.extend(group.iter().map(|p| p.id));
            let court_number = assignments.len() + 1;
            debug!("Round {round_number}, court {court_number}: {tier} group");
            let tier_label = Some(CourtTier::Tier(tier));
            assignments.push(CourtAssignment::new(court_number, tier_label, &group));
        }

        if assignments.len() < courts {
            let remaining = participants.iter().filter(|p| !used.contains(&p.id)).collect_vec();
            if remaining.len() >= PLAYERS_PER_COURT {
                let group = mixed_pool.seat(&remaining);
                let court_number = assignments.len() + 1;
                debug!("Round {round_number}, court {court_number}: mixed group");
                let tier_label = Some(CourtTier::Mixed);
                assignments.push(CourtAssignment::new(court_number, tier_label, &group));
            }
        }

        schedule.rounds.push(Round { round_number, courts: assignments });
    }
    info!(
        "Scheduled {} tiered rounds on {} courts for {} participants",
        rounds,
        courts,
        participants.len()
    );
    schedule
}
