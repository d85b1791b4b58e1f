use court_rotation::{PLAYERS_PER_COURT, SchedulingError, Tier};
use enum_map::EnumMap;
use strum::IntoEnumIterator;

use crate::roster_file::read_roster_file;


pub fn run(roster_file: &str) -> anyhow::Result<()> {
    let roster = read_roster_file(roster_file)?;
    let sizes: EnumMap<Tier, usize> = roster.tier_sizes();
    for tier in Tier::iter() {
        println!("{:<14}{}", tier.to_string(), sizes[tier]);
    }
    println!("{:<14}{}", "total", roster.len());
    if roster.len() < PLAYERS_PER_COURT {
        return Err(SchedulingError::InsufficientParticipants { actual: roster.len() }.into());
    }
    println!("OK");
    Ok(())
}
