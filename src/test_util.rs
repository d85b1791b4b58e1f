// Test utilities that cannot be moved to the "tests" folder, because unit tests use them too.

use crate::participant::{Participant, ParticipantId, Tier};


pub fn sample_participant(id: u32, tier: Tier) -> Participant {
    Participant::new(ParticipantId(id), format!("p{id}"), tier)
}

// Participants with ids `1..=n`, all in the same tier.
pub fn sample_roster(n: u32) -> Vec<Participant> {
    (1..=n).map(|id| sample_participant(id, Tier::Beginner)).collect()
}

// Consecutive ids starting from 1: beginners first, then intermediates, then advanced.
pub fn sample_tiered_roster(beginners: u32, intermediates: u32, advanced: u32) -> Vec<Participant> {
    let tiers = std::iter::repeat_n(Tier::Beginner, beginners as usize)
        .chain(std::iter::repeat_n(Tier::Intermediate, intermediates as usize))
        .chain(std::iter::repeat_n(Tier::Advanced, advanced as usize));
    tiers.zip(1..).map(|(tier, id)| sample_participant(id, tier)).collect()
}
