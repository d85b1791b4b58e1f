use console::Style;
use court_rotation::{CourtAssignment, CourtTier, PlayCount, Round, Schedule, Slot, Tier};
use itertools::Itertools;


fn tier_style(tier: CourtTier) -> Style {
    match tier {
        CourtTier::Tier(Tier::Beginner) => Style::new().black().on_green(),
        CourtTier::Tier(Tier::Intermediate) => Style::new().black().on_yellow(),
        CourtTier::Tier(Tier::Advanced) => Style::new().white().on_red(),
        CourtTier::Mixed => Style::new().reverse(),
    }
}

fn render_slot(slot: Slot) -> String {
    match slot {
        Some(p) => format!("{} ({})", p.name, p.tier),
        None => Style::new().dim().apply_to("(empty)").to_string(),
    }
}

fn render_team(team: &[Slot]) -> String { team.iter().map(|&slot| render_slot(slot)).join(" & ") }

fn render_court(court: &CourtAssignment) -> String {
    let badge = court
        .tier
        .map(|tier| format!(" {}", tier_style(tier).apply_to(format!("[{tier}]"))))
        .unwrap_or_default();
    format!(
        "  Court {}{}: {}  vs  {}\n",
        court.court_number,
        badge,
        render_team(court.team_a()),
        render_team(court.team_b())
    )
}

fn render_round(round: &Round) -> String {
    let title = format!("Round {}", round.round_number);
    let mut out = format!("{}\n", Style::new().bold().apply_to(title));
    if round.courts.is_empty() {
        out.push_str("  (no courts)\n");
    }
    for court in &round.courts {
        out.push_str(&render_court(court));
    }
    out
}

pub fn render_schedule(schedule: &Schedule) -> String {
    schedule.iter().map(render_round).join("\n")
}

pub fn render_play_counts(counts: &[PlayCount]) -> String {
    let width = counts.iter().map(|c| c.participant.name.chars().count()).max().unwrap_or(0);
    let mut out = format!("{}\n", Style::new().bold().apply_to("Courts played"));
    for c in counts {
        out.push_str(&format!("  {:<width$}  {}\n", c.participant.name, c.count));
    }
    out
}


#[cfg(test)]
mod tests {
    use court_rotation::test_util::sample_tiered_roster;
    use court_rotation::{play_counts, schedule_by_tier};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_text_rendering() {
        console::set_colors_enabled(false);
        let roster = sample_tiered_roster(4, 2, 0);
        let schedule = schedule_by_tier(&roster, 2, 1);
        assert_eq!(
            render_schedule(&schedule),
            "Round 1\n  Court 1 [beginner]: p1 (beginner) & p2 (beginner)  vs  \
             p3 (beginner) & p4 (beginner)\n"
        );
        let counts = play_counts(&schedule, &roster);
        assert_eq!(
            render_play_counts(&counts),
            "Courts played\n  p1  1\n  p2  1\n  p3  1\n  p4  1\n  p5  0\n  p6  0\n"
        );
    }

    #[test]
    fn empty_slots_are_marked() {
        console::set_colors_enabled(false);
        let roster = court_rotation::test_util::sample_roster(6);
        let schedule = court_rotation::schedule(&roster, 2, 1).unwrap();
        let court = &schedule.rounds[0].courts[1];
        assert_eq!(
            render_court(court),
            "  Court 2: p5 (beginner) & p6 (beginner)  vs  (empty) & (empty)\n"
        );
    }
}
