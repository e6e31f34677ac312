//! Running many independent queries, and comparing both strategies on one.
//!
//! Every search owns its lookup table, so queries can be fanned out over the
//! rayon pool without any coordination.
use std::fmt;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::finder::{PairSumFinder, Strategy, is_qualifying_pair};
use crate::report::Outcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub sequence: Vec<i64>,
    pub target: i64,
}

impl Query {
    pub fn new(sequence: Vec<i64>, target: i64) -> Self {
        Query {
            name: None,
            sequence,
            target,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

pub fn solve(query: &Query, strategy: Strategy) -> Outcome {
    let pair = PairSumFinder::new(strategy).find(&query.sequence, query.target);
    Outcome::new(
        query.name.clone(),
        strategy,
        &query.sequence,
        query.target,
        pair,
    )
}

/// Solves every query with `strategy`. Output order follows input order.
pub fn solve_all(queries: &[Query], strategy: Strategy, parallel: bool) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = if parallel {
        queries.par_iter().map(|q| solve(q, strategy)).collect()
    } else {
        queries.iter().map(|q| solve(q, strategy)).collect()
    };
    let found = outcomes.iter().filter(|o| o.is_found()).count();
    info!(
        "{}: {} of {} queries have a pair",
        strategy,
        found,
        outcomes.len()
    );
    outcomes
}

/// Marks the outcome with whether its pair actually qualifies. A missing
/// pair is confirmed by an exhaustive search.
pub fn verify(query: &Query, outcome: &mut Outcome) {
    let ok = match outcome.pair {
        Some(pair) => is_qualifying_pair(&query.sequence, query.target, pair),
        None => solve(query, Strategy::BruteForce).pair.is_none(),
    };
    outcome.verified = Some(ok);
}

/// Both strategies run on the same query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub brute_force: Outcome,
    pub linear: Outcome,
    /// Both found a pair, or both found none.
    pub agree_on_solvability: bool,
    /// Both reported the very same pair. Not required for correctness.
    pub same_pair: bool,
    pub brute_force_valid: bool,
    pub linear_valid: bool,
}

impl CrossCheck {
    pub fn is_consistent(&self) -> bool {
        self.agree_on_solvability && self.brute_force_valid && self.linear_valid
    }
}

pub fn cross_check(query: &Query) -> CrossCheck {
    let brute_force = solve(query, Strategy::BruteForce);
    let linear = solve(query, Strategy::Linear);
    let valid = |o: &Outcome| match o.pair {
        Some(pair) => is_qualifying_pair(&query.sequence, query.target, pair),
        None => true,
    };
    CrossCheck {
        agree_on_solvability: brute_force.is_found() == linear.is_found(),
        same_pair: brute_force.pair == linear.pair,
        brute_force_valid: valid(&brute_force),
        linear_valid: valid(&linear),
        brute_force,
        linear,
    }
}

pub fn cross_check_all(queries: &[Query], parallel: bool) -> Vec<CrossCheck> {
    if parallel {
        queries.par_iter().map(cross_check).collect()
    } else {
        queries.iter().map(cross_check).collect()
    }
}

impl fmt::Display for CrossCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.brute_force)?;
        writeln!(f, "{}", self.linear)?;
        let verdict = if !self.is_consistent() {
            "MISMATCH"
        } else if self.same_pair {
            "same pair"
        } else {
            "different valid pairs"
        };
        write!(f, "=> {verdict}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries() -> Vec<Query> {
        vec![
            Query::new(vec![2, 7, 11, 15], 9).named("classic"),
            Query::new(vec![3, 2, 4], 6),
            Query::new(vec![], 0),
            Query::new(vec![1, 2, 3], 100),
            Query::new(vec![1, 4, 0, 3], 4),
        ]
    }

    #[test]
    fn test_solve_all_keeps_order() {
        let qs = queries();
        let sequential = solve_all(&qs, Strategy::Linear, false);
        let parallel = solve_all(&qs, Strategy::Linear, true);
        assert_eq!(sequential, parallel);
        let pairs: Vec<_> = parallel.iter().map(|o| o.pair).collect();
        assert_eq!(
            pairs,
            vec![Some((0, 1)), Some((1, 2)), None, None, Some((1, 2))]
        );
        assert_eq!(parallel[0].name.as_deref(), Some("classic"));
    }

    #[test]
    fn test_verify() {
        let query = Query::new(vec![3, 2, 4], 6);
        let mut outcome = solve(&query, Strategy::Linear);
        verify(&query, &mut outcome);
        assert_eq!(outcome.verified, Some(true));

        outcome.pair = Some((0, 1));
        verify(&query, &mut outcome);
        assert_eq!(outcome.verified, Some(false));

        let query = Query::new(vec![1, 2, 3], 100);
        let mut outcome = solve(&query, Strategy::Linear);
        verify(&query, &mut outcome);
        assert_eq!(outcome.verified, Some(true));
    }

    #[test]
    fn test_cross_check_different_pairs() {
        let check = cross_check(&Query::new(vec![1, 4, 0, 3], 4));
        assert!(check.is_consistent());
        assert!(!check.same_pair);
        assert_eq!(check.brute_force.pair, Some((0, 3)));
        assert_eq!(check.linear.pair, Some((1, 2)));
        assert!(check.to_string().ends_with("=> different valid pairs"));
    }

    #[test]
    fn test_cross_check_all() {
        let checks = cross_check_all(&queries(), true);
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().all(CrossCheck::is_consistent));
        assert!(checks[0].same_pair);
        assert!(checks[2].same_pair);
    }
}
