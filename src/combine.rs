//! Match combiner: collapses duplicate matches on the same stored string,
//! keeping the one with the fewest edits.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::Match;

pub(crate) fn combine<V: Clone>(matches: Vec<Match<V>>) -> Vec<Match<V>> {
    let mut by_string: HashMap<String, Match<V>> = HashMap::new();

    for candidate in matches {
        match by_string.entry(candidate.string.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if candidate.edits < slot.get().edits {
                    slot.insert(candidate);
                }
                // ties keep the existing entry
            }
        }
    }

    let mut out: Vec<Match<V>> = by_string.into_values().collect();
    out.sort_by(|a, b| a.string.cmp(&b.string));
    out
}
