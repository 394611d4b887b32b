//! Earliest-ancestor query over (parent, child) relation lists.

use std::collections::HashMap;

/// Find the earliest ancestor of `start` in a list of `(parent, child)`
/// relations.
///
/// Walks upward one full generation at a time: each generation is the set of
/// direct parents of the previous one, processed as a single batch. When a
/// generation has no parents of its own, the numerically smallest id in it
/// is the earliest ancestor (an explicit tie-break). Returns `None` when the
/// starting node has no parents at all.
pub fn earliest_ancestor(relations: &[(u64, u64)], start: u64) -> Option<u64> {
    // child -> parents, so each relation is scanned once up front
    let mut parents: HashMap<u64, Vec<u64>> = HashMap::new();
    for &(parent, child) in relations {
        parents.entry(child).or_default().push(parent);
    }

    let mut generation: Vec<u64> = vec![start];

    loop {
        let mut next: Vec<u64> = Vec::new();
        for node in &generation {
            if let Some(batch) = parents.get(node) {
                next.extend_from_slice(batch);
            }
        }

        if next.is_empty() {
            // Last non-empty generation: smallest id wins the tie-break
            let earliest = generation.iter().copied().min().unwrap_or(start);
            return if earliest == start { None } else { Some(earliest) };
        }

        next.sort_unstable();
        next.dedup();
        generation = next;
    }
}
