// Roster files are YAML lists:
//
//   - name: Alice
//     tier: advanced
//   - name: Bob          # tier defaults to beginner
//
// Participants get ids in file order.

use anyhow::Context;
use court_rotation::{Roster, Tier};
use serde::Deserialize;


#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub tier: Tier,
}

pub fn parse_roster(contents: &str) -> anyhow::Result<Roster> {
    let entries: Vec<RosterEntry> =
        serde_yaml::from_str(contents).context("Failed to parse roster.")?;
    let mut roster = Roster::new();
    for (index, entry) in entries.into_iter().enumerate() {
        roster
            .add(&entry.name, entry.tier)
            .with_context(|| format!("Invalid roster entry #{}.", index + 1))?;
    }
    Ok(roster)
}

pub fn read_roster_file(filename: &str) -> anyhow::Result<Roster> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read roster file '{filename}'."))?;
    parse_roster(&contents).with_context(|| format!("Roster file '{filename}'."))
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_entries_in_order() {
        let roster = parse_roster("- name: Alice\n  tier: advanced\n- name: ' Bob '\n").unwrap();
        let parsed = roster
            .participants()
            .iter()
            .map(|p| (p.id.0, p.name.as_str(), p.tier))
            .collect::<Vec<_>>();
        assert_eq!(parsed, vec![(0, "Alice", Tier::Advanced), (1, "Bob", Tier::Beginner)]);
    }

    #[test]
    fn rejects_empty_names() {
        let err = parse_roster("- name: Alice\n- name: '  '\n").unwrap_err();
        assert!(format!("{err:#}").contains("entry #2"), "{err:#}");
    }

    #[test]
    fn rejects_unknown_tiers() {
        assert!(parse_roster("- name: Alice\n  tier: expert\n").is_err());
    }

    #[test]
    fn empty_file_is_an_empty_roster() {
        assert!(parse_roster("[]").unwrap().is_empty());
    }
}
