#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod appearance;
pub mod combinations;
pub mod error;
pub mod participant;
pub mod partnership;
pub mod roster;
pub mod schedule;
pub mod scheduler;
pub mod selector;
pub mod stats;
pub mod test_util;
pub mod tiered;
pub mod util;

pub use error::SchedulingError;
pub use participant::{CourtTier, Participant, ParticipantId, Tier};
pub use roster::{Roster, RosterError};
pub use schedule::{CourtAssignment, PLAYERS_PER_COURT, Round, Schedule, Slot};
pub use scheduler::{SchedulingMode, generate, schedule};
pub use stats::{PlayCount, play_counts};
pub use tiered::schedule_by_tier;
