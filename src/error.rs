use std::fmt;

use crate::schedule::PLAYERS_PER_COURT;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SchedulingError {
    // Raised before any round is built; the roster must grow before retrying.
    InsufficientParticipants { actual: usize },
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingError::InsufficientParticipants { actual } => write!(
                f,
                "At least {PLAYERS_PER_COURT} participants are required, got {actual}."
            ),
        }
    }
}

impl std::error::Error for SchedulingError {}
