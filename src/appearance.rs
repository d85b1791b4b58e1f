use std::collections::HashMap;

use itertools::Itertools;

use crate::participant::{Participant, ParticipantId};


// Rounds played so far, per participant. Unknown participants count as zero.
#[derive(Clone, Debug, Default)]
pub struct AppearanceCounter {
    counts: HashMap<ParticipantId, usize>,
}

impl AppearanceCounter {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, id: ParticipantId) -> usize { self.counts.get(&id).copied().unwrap_or(0) }

    pub fn record(&mut self, players: &[&Participant]) {
        for p in players {
            *self.counts.entry(p.id).or_default() += 1;
        }
    }

    // Returns up to `limit` candidates, fewest appearances first. The sort is stable, so ties keep
    // the order of `candidates`.
    pub fn least_played<'a>(
        &self, candidates: impl IntoIterator<Item = &'a Participant>, limit: usize,
    ) -> Vec<&'a Participant> {
        candidates
            .into_iter()
            .sorted_by_key(|p| self.get(p.id))
            .take(limit)
            .collect()
    }
}
