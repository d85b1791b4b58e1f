use court_rotation::{PLAYERS_PER_COURT, PlayCount, Schedule, SchedulingMode, generate, play_counts};
use log::{info, warn};
use serde::Serialize;

use crate::roster_file::read_roster_file;
use crate::tui;


pub struct ScheduleConfig {
    pub roster_file: String,
    pub courts: usize,
    pub rounds: usize,
    pub mode: SchedulingMode,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    mode: SchedulingMode,
    play_counts: Vec<PlayCount<'a>>,
    rounds: &'a Schedule<'a>,
}

pub fn run(config: ScheduleConfig) -> anyhow::Result<()> {
    let roster = read_roster_file(&config.roster_file)?;
    info!("Loaded {} participants from '{}'", roster.len(), config.roster_file);
    if config.mode == SchedulingMode::ByTier && roster.len() < PLAYERS_PER_COURT {
        warn!("The roster cannot fill a single court; all rounds will be empty");
    }

    let schedule = generate(config.mode, roster.participants(), config.courts, config.rounds)?;
    let counts = play_counts(&schedule, roster.participants());
    if config.json {
        let output = JsonOutput {
            mode: config.mode,
            play_counts: counts,
            rounds: &schedule,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", tui::render_play_counts(&counts));
        print!("{}", tui::render_schedule(&schedule));
    }
    Ok(())
}
