//! # pairsum
//!
//! Locating two positions in an integer sequence whose values sum to a
//! target ("two-sum"), by exhaustive search or by a single hashed scan.
//!
//! ## Modules
//!
//! - `finder` – the two search strategies and a stateless front over them
//! - `batch` – solving many queries (optionally on the rayon pool), cross-checks
//! - `input` – sequence parsing and JSON/RON/TOML/YAML query files
//! - `config` – `pairsum.toml` defaults
//! - `options` – command-line flags
//! - `report` – result records and their renderings
//!
//! ```rust
//! use pairsum::finder::{find_pair_brute_force, find_pair_linear};
//!
//! assert_eq!(find_pair_brute_force(&[3, 2, 4], 6), Some((1, 2)));
//! assert_eq!(find_pair_linear(&[3, 2, 4], 6), Some((1, 2)));
//! assert_eq!(find_pair_linear(&[1, 2, 3], 100), None);
//! ```

pub mod batch;
pub mod config;
pub mod finder;
pub mod input;
pub mod options;
pub mod report;

pub use batch::Query;
pub use finder::{PairSumFinder, Strategy, find_pair_brute_force, find_pair_linear};
