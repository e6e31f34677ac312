use std::collections::HashMap;

/// Single forward pass with a value -> first-seen-index table.
///
/// At each position the complement `target - nums[i]` is looked up among the
/// values already passed; the first hit returns `(first_seen, i)`. A value is
/// recorded only on its first occurrence, so repeated values keep their
/// earliest index.
///
/// The result is a qualifying pair but not necessarily the lexicographically
/// smallest one; see [`find_pair_brute_force`](super::find_pair_brute_force).
pub fn find_pair_linear(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        // An unrepresentable complement cannot be among the seen values.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = first_seen.get(&complement) {
                return Some((j, i));
            }
        }
        first_seen.entry(value).or_insert(i);
    }

    None
}
