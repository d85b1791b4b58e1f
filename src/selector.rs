use log::trace;

use crate::combinations::combinations;
use crate::participant::Participant;
use crate::partnership::PartnershipLedger;
use crate::schedule::PLAYERS_PER_COURT;


// Upper bound on the number of four-player subsets inspected per court.
pub const SEARCH_BUDGET: usize = 100;

// Picks four players for one court, avoiding partnerships the ledger has already seen.
//
// Subsets are inspected in `combinations` order; the first subset with the lowest collision
// count wins, and the search stops at the first collision-free one. This is a bounded heuristic:
// a better grouping may exist beyond the first `SEARCH_BUDGET` subsets.
//
// A pool of four or fewer players is returned as is.
pub fn select_group<'a>(
    pool: &[&'a Participant], ledger: &PartnershipLedger,
) -> Vec<&'a Participant> {
    if pool.len() <= PLAYERS_PER_COURT {
        return pool.to_vec();
    }
    let mut best: Option<(usize, Vec<&'a Participant>)> = None;
    for (index, group) in combinations(pool, PLAYERS_PER_COURT).take(SEARCH_BUDGET).enumerate() {
        let score = ledger.collisions(&group);
        if best.as_ref().is_none_or(|(best_score, _)| score < *best_score) {
            trace!("Candidate group {index} improves best collision score to {score}");
            let perfect = score == 0;
            best = Some((score, group));
            if perfect {
                break;
            }
        }
    }
    match best {
        Some((_, group)) => group,
        None => pool[..PLAYERS_PER_COURT].to_vec(),
    }
}
