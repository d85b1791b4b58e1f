use std::fmt;

use enum_map::{EnumMap, enum_map};

use crate::participant::{Participant, ParticipantId, Tier};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RosterError {
    EmptyName,
    UnknownParticipant(ParticipantId),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::EmptyName => f.write_str("Participant name must not be empty."),
            RosterError::UnknownParticipant(id) => write!(f, "No participant with id {id}."),
        }
    }
}

impl std::error::Error for RosterError {}

// Participants in entry order. Ids are handed out sequentially and never reused, even after
// a participant is removed.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    pub fn participants(&self) -> &[Participant] { &self.participants }
    pub fn len(&self) -> usize { self.participants.len() }
    pub fn is_empty(&self) -> bool { self.participants.is_empty() }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn add(&mut self, name: &str, tier: Tier) -> Result<ParticipantId, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        self.participants.push(Participant::new(id, name.to_owned(), tier));
        Ok(id)
    }

    pub fn remove(&mut self, id: ParticipantId) -> Result<Participant, RosterError> {
        let Some(index) = self.participants.iter().position(|p| p.id == id) else {
            return Err(RosterError::UnknownParticipant(id));
        };
        Ok(self.participants.remove(index))
    }

    pub fn tier_sizes(&self) -> EnumMap<Tier, usize> {
        let mut sizes = enum_map! { _ => 0 };
        for p in &self.participants {
            sizes[p.tier] += 1;
        }
        sizes
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_required() {
        let mut roster = Roster::new();
        let id = roster.add("  Alice ", Tier::Advanced).unwrap();
        assert_eq!(roster.get(id).unwrap().name, "Alice");
        assert_eq!(roster.add("   ", Tier::Beginner), Err(RosterError::EmptyName));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut roster = Roster::new();
        let alice = roster.add("Alice", Tier::Beginner).unwrap();
        let bob = roster.add("Bob", Tier::Beginner).unwrap();
        assert_eq!(roster.remove(bob).unwrap().name, "Bob");
        assert_eq!(roster.remove(bob), Err(RosterError::UnknownParticipant(bob)));
        let charlie = roster.add("Charlie", Tier::Beginner).unwrap();
        assert_ne!(charlie, bob);
        assert_ne!(charlie, alice);
    }

    #[test]
    fn counts_per_tier() {
        let mut roster = Roster::new();
        roster.add("Alice", Tier::Beginner).unwrap();
        roster.add("Bob", Tier::Advanced).unwrap();
        roster.add("Charlie", Tier::Advanced).unwrap();
        let sizes = roster.tier_sizes();
        assert_eq!(sizes[Tier::Beginner], 1);
        assert_eq!(sizes[Tier::Intermediate], 0);
        assert_eq!(sizes[Tier::Advanced], 2);
    }
}
