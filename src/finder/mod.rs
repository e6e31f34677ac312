//! # Pair-sum search
//!
//! Given a sequence `a[0..n)` and a target `t`, find indices `i < j` with
//! `a[i] + a[j] = t`. Two strategies are provided:
//!
//! * [`find_pair_brute_force`]: checks all `n(n-1)/2` pairs in lexicographic
//!   order, `O(n²)` time and `O(1)` space. Returns the lexicographically
//!   smallest qualifying pair.
//! * [`find_pair_linear`]: one forward scan keeping a map from value to its
//!   first index, `O(n)` time and `O(n)` space. Returns the qualifying pair
//!   with the smallest second index.
//!
//! The two may report different pairs when several qualify. Both are correct.
//!
//! ## Example
//!
//! ```rust
//! use pairsum::finder::*;
//!
//! let nums = [1, 4, 0, 3];
//! assert_eq!(find_pair_brute_force(&nums, 4), Some((0, 3)));
//! assert_eq!(find_pair_linear(&nums, 4), Some((1, 2)));
//!
//! let finder = PairSumFinder::new(Strategy::Linear);
//! assert_eq!(finder.find(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert!(is_qualifying_pair(&nums, 4, (1, 2)));
//! ```

pub mod brute_force;
pub mod linear;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use brute_force::find_pair_brute_force;
pub use linear::find_pair_linear;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BruteForce,
    #[default]
    Linear,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BruteForce, Strategy::Linear];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Linear => "linear",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy `{0}`, expected `brute-force` or `linear`")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" | "brute" => Ok(Strategy::BruteForce),
            "linear" | "hash" => Ok(Strategy::Linear),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Stateless front for the two strategies. Holds only the selection, so a
/// single finder can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairSumFinder {
    strategy: Strategy,
}

impl PairSumFinder {
    pub const fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn find(&self, nums: &[i64], target: i64) -> Option<(usize, usize)> {
        let pair = match self.strategy {
            Strategy::BruteForce => find_pair_brute_force(nums, target),
            Strategy::Linear => find_pair_linear(nums, target),
        };
        debug!(
            "{} over {} values, target {}: {:?}",
            self.strategy,
            nums.len(),
            target,
            pair
        );
        pair
    }
}

/// Whether `(i, j)` names two distinct in-range positions summing exactly to
/// `target`.
pub fn is_qualifying_pair(nums: &[i64], target: i64, (i, j): (usize, usize)) -> bool {
    if i == j {
        return false;
    }
    match (nums.get(i), nums.get(j)) {
        (Some(a), Some(b)) => a.checked_add(*b) == Some(target),
        _ => false,
    }
}
