use std::collections::HashSet;

use serde::Serialize;

use crate::participant::{Participant, ParticipantId};
use crate::schedule::{PLAYERS_PER_COURT, PLAYERS_PER_TEAM};
use crate::util::sort_two;


// Unordered pair of teammates: the smaller id always comes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct PartnershipKey(ParticipantId, ParticipantId);

impl PartnershipKey {
    pub fn new(a: ParticipantId, b: ParticipantId) -> Self {
        let (first, second) = sort_two((a, b));
        PartnershipKey(first, second)
    }

    // Both teams of a four-player group: slots {0, 1} and slots {2, 3}. Returns nothing for a
    // group that is not exactly four players.
    pub fn for_group(group: &[&Participant]) -> Option<[PartnershipKey; 2]> {
        if group.len() != PLAYERS_PER_COURT {
            return None;
        }
        let (team_a, team_b) = group.split_at(PLAYERS_PER_TEAM);
        Some([
            PartnershipKey::new(team_a[0].id, team_a[1].id),
            PartnershipKey::new(team_b[0].id, team_b[1].id),
        ])
    }
}

// Partnerships already formed during one scheduling run. Entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct PartnershipLedger {
    pairs: HashSet<PartnershipKey>,
}

impl PartnershipLedger {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.pairs.len() }
    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }
    pub fn contains(&self, key: PartnershipKey) -> bool { self.pairs.contains(&key) }

    // How many of the group's two teams have already played together.
    pub fn collisions(&self, group: &[&Participant]) -> usize {
        PartnershipKey::for_group(group)
            .map_or(0, |keys| keys.into_iter().filter(|&k| self.contains(k)).count())
    }

    // Records both teams of a full court; short groups form no partnerships.
    pub fn record(&mut self, group: &[&Participant]) {
        if let Some(keys) = PartnershipKey::for_group(group) {
            self.pairs.extend(keys);
        }
    }
}
