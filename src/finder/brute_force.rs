use itertools::Itertools;

/// Exhaustive O(n²) search over every `(i, j)` with `i < j`.
///
/// Pairs are visited in lexicographic order, so the first hit is the
/// lexicographically smallest qualifying pair. Sums that overflow `i64`
/// never qualify.
pub fn find_pair_brute_force(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    (0..nums.len())
        .tuple_combinations()
        .find(|&(i, j)| nums[i].checked_add(nums[j]) == Some(target))
}
