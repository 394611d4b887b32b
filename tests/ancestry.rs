//! Earliest-ancestor query tests.

use graphwalk::earliest_ancestor;

/// The standard family tree used across these tests:
///
/// ```text
///  10
///   |
///   1   2    4    11
///    \ /    / \   /
///     3    5    8
///      \  / \   |
///       6    7  9
/// ```
const RELATIONS: [(u64, u64); 10] = [
    (1, 3),
    (2, 3),
    (3, 6),
    (5, 6),
    (5, 7),
    (4, 5),
    (4, 8),
    (8, 9),
    (11, 8),
    (10, 1),
];

#[test]
fn test_node_with_no_parents_has_no_ancestor() {
    assert_eq!(earliest_ancestor(&RELATIONS, 2), None);
    assert_eq!(earliest_ancestor(&RELATIONS, 4), None);
    assert_eq!(earliest_ancestor(&RELATIONS, 10), None);
    assert_eq!(earliest_ancestor(&RELATIONS, 11), None);
}

#[test]
fn test_node_absent_from_relations_has_no_ancestor() {
    assert_eq!(earliest_ancestor(&RELATIONS, 42), None);
    assert_eq!(earliest_ancestor(&[], 1), None);
}

#[test]
fn test_single_generation_ancestor() {
    // 1's only parent is 10, which has none of its own
    assert_eq!(earliest_ancestor(&RELATIONS, 1), Some(10));
}

#[test]
fn test_tie_break_takes_smallest_id_in_last_generation() {
    // 8's parents are {4, 11}, neither of which has parents
    assert_eq!(earliest_ancestor(&RELATIONS, 8), Some(4));
    // 9 walks through 8 to the same final generation
    assert_eq!(earliest_ancestor(&RELATIONS, 9), Some(4));
}

#[test]
fn test_deepest_generation_wins() {
    // 6 -> {3, 5} -> {1, 2, 4} -> {10}: the last generation is deeper than
    // the closer parentless nodes 2 and 4
    assert_eq!(earliest_ancestor(&RELATIONS, 6), Some(10));
    assert_eq!(earliest_ancestor(&RELATIONS, 3), Some(10));
    // 7 -> {5} -> {4}
    assert_eq!(earliest_ancestor(&RELATIONS, 7), Some(4));
}

#[test]
fn test_explicit_tie_break_pair() {
    let relations = [(10, 1), (20, 1)];
    assert_eq!(earliest_ancestor(&relations, 1), Some(10));
}
