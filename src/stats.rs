use derive_new::new;
use itertools::Itertools;
use serde::Serialize;

use crate::participant::Participant;
use crate::schedule::Schedule;


#[derive(Clone, PartialEq, Eq, Debug, new, Serialize)]
pub struct PlayCount<'a> {
    pub participant: &'a Participant,
    pub count: usize,
}

// How many courts every roster participant was seated on, most active first. Participants who
// never played are listed with zero; ties keep roster order.
pub fn play_counts<'a>(schedule: &Schedule<'_>, roster: &'a [Participant]) -> Vec<PlayCount<'a>> {
    let counts = schedule.appearance_counts();
    roster
        .iter()
        .map(|p| PlayCount::new(p, counts.get(&p.id).copied().unwrap_or(0)))
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect()
}
