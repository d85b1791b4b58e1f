#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod check_roster;
mod roster_file;
mod schedule_main;
mod tui;

use clap::{Command, arg};
use court_rotation::SchedulingMode;


// Upper bounds accepted on the command line.
const MAX_COURTS: i64 = 10;
const MAX_ROUNDS: i64 = 20;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Court rotation")
        .version(clap::crate_version!())
        .about("Assigns a roster to doubles courts over several rounds")
        .subcommand_required(true)
        .subcommand(
            Command::new("schedule")
                .about("Generate a schedule and print it")
                .arg(arg!(<roster_file> "Path to the roster: yaml list of {name, tier} entries."))
                .arg(
                    arg!(-c --"courts" <n> "Number of courts")
                        .value_parser(1..=MAX_COURTS)
                        .default_value("1"),
                )
                .arg(
                    arg!(-r --"rounds" <n> "Number of rounds")
                        .value_parser(1..=MAX_ROUNDS)
                        .default_value("1"),
                )
                .arg(arg!(--"by-tier" "Prefer same-tier courts, then fill one mixed court."))
                .arg(arg!(--"json" "Print the schedule as JSON.")),
        )
        .subcommand(
            Command::new("check-roster")
                .about("Verifies that a roster file is valid and can fill a court.")
                .arg(arg!(<roster_file> "Path to the roster file")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("schedule", sub_matches)) => schedule_main::run(schedule_main::ScheduleConfig {
            roster_file: sub_matches.get_one::<String>("roster_file").unwrap().clone(),
            courts: *sub_matches.get_one::<i64>("courts").unwrap() as usize,
            rounds: *sub_matches.get_one::<i64>("rounds").unwrap() as usize,
            mode: if sub_matches.get_flag("by-tier") {
                SchedulingMode::ByTier
            } else {
                SchedulingMode::Standard
            },
            json: sub_matches.get_flag("json"),
        }),
        Some(("check-roster", sub_matches)) => {
            check_roster::run(sub_matches.get_one::<String>("roster_file").unwrap())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
