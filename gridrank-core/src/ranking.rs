//! Stable ascending ranking.
//!
//! Rank 1 goes to the smallest value. Equal values are ranked in input order,
//! so every position gets a distinct rank and the output is a permutation of
//! `1..=len`.

/// Computes the 1-based ascending rank of each value, ties broken by position.
///
/// Positions are sorted by `(value, position)` and the resulting order is
/// inverted into a rank per position. Works for any length and the full `i64`
/// range.
pub fn calculate_ranks(values: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    // sort_by_key is stable, which keeps equal values in input order
    order.sort_by_key(|&position| values[position]);

    let mut ranks = vec![0; values.len()];
    for (rank_index, position) in order.into_iter().enumerate() {
        ranks[position] = rank_index + 1;
    }
    ranks
}
