use std::collections::HashMap;

use serde::Serialize;

use crate::participant::{CourtTier, Participant, ParticipantId};


pub const PLAYERS_PER_COURT: usize = 4;
pub const PLAYERS_PER_TEAM: usize = 2;

// `None` marks a seat nobody was available for.
pub type Slot<'a> = Option<&'a Participant>;

// Slots 0-1 form team A, slots 2-3 form team B.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CourtAssignment<'a> {
    pub court_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<CourtTier>,
    pub slots: [Slot<'a>; PLAYERS_PER_COURT],
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Round<'a> {
    pub round_number: usize,
    pub courts: Vec<CourtAssignment<'a>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Schedule<'a> {
    pub rounds: Vec<Round<'a>>,
}

impl<'a> CourtAssignment<'a> {
    // Seats `players` in order and pads the rest of the court with empty slots.
    pub fn new(court_number: usize, tier: Option<CourtTier>, players: &[&'a Participant]) -> Self {
        assert!(
            players.len() <= PLAYERS_PER_COURT,
            "Cannot seat {} players on one court",
            players.len()
        );
        let mut slots = [None; PLAYERS_PER_COURT];
        for (slot, &player) in slots.iter_mut().zip(players) {
            *slot = Some(player);
        }
        CourtAssignment { court_number, tier, slots }
    }

    pub fn team_a(&self) -> &[Slot<'a>] { &self.slots[..PLAYERS_PER_TEAM] }
    pub fn team_b(&self) -> &[Slot<'a>] { &self.slots[PLAYERS_PER_TEAM..] }

    pub fn participants(&self) -> impl Iterator<Item = &'a Participant> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn is_full(&self) -> bool { self.slots.iter().all(Option::is_some) }
}

impl<'a> Round<'a> {
    pub fn participants(&self) -> impl Iterator<Item = &'a Participant> + '_ {
        self.courts.iter().flat_map(|court| court.participants())
    }
}

impl<'a> Schedule<'a> {
    pub fn len(&self) -> usize { self.rounds.len() }
    pub fn is_empty(&self) -> bool { self.rounds.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Round<'a>> { self.rounds.iter() }

    // Number of seated slots per participant over the whole schedule. Participants who never
    // played are absent.
    pub fn appearance_counts(&self) -> HashMap<ParticipantId, usize> {
        let mut counts = HashMap::new();
        for p in self.rounds.iter().flat_map(|round| round.participants()) {
            *counts.entry(p.id).or_default() += 1;
        }
        counts
    }
}
