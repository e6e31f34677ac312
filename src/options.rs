//! Parsing Options.
//! Flags come from the command line or `PAIRSUM_FLAGS`, e.g.
//! `-s both -n "2,7,11,15" -t 9` or `-f queries.toml --format json`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use thiserror::Error;

use crate::finder::Strategy;
use crate::input::{InputError, parse_sequence};
use crate::report::OutputFormat;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("mismatched quotes in flags")]
    Quotes(#[from] shellwords::MismatchedQuotes),
    #[error("invalid --numbers")]
    Numbers(#[from] InputError),
    #[error("--numbers requires --target")]
    MissingTarget,
    #[error("nothing to solve, pass --numbers with --target, or --file")]
    MissingInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyChoice {
    Single(Strategy),
    Both,
}

fn parse_strategy_choice(s: &str) -> Result<StrategyChoice, String> {
    if s.trim().eq_ignore_ascii_case("both") {
        return Ok(StrategyChoice::Both);
    }
    s.parse::<Strategy>()
        .map(StrategyChoice::Single)
        .map_err(|e| e.to_string())
}

fn make_options_parser() -> clap::Command {
    Command::new("pairsum")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Find two positions in a sequence whose values sum to a target")
        .args_override_self(true)
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .value_name("brute-force|linear|both")
                .help("Search strategy [default: from config, else linear]")
                .value_parser(parse_strategy_choice),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_name("INT")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("numbers")
                .short('n')
                .long("numbers")
                .value_name("LIST")
                .help("Comma or space separated integers")
                .allow_hyphen_values(true)
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Query file (.json, .ron, .toml, .yaml)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the report here instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("text|json|ron")
                .value_parser(|s: &str| s.parse::<OutputFormat>()),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .default_value("pairsum.toml"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Check every reported pair")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Solve queries on the current thread only")
                .action(ArgAction::SetTrue),
        )
}

/// Inline numbers, or a query file. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline { numbers: Vec<i64>, target: i64 },
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: InputSource,
    /// `None` leaves the choice to the config file.
    pub strategy: Option<StrategyChoice>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: PathBuf,
    pub verify: bool,
    pub sequential: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, OptionsError> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, OptionsError> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let strategy = matches.get_one::<StrategyChoice>("strategy").copied();
        let format = matches.get_one::<OutputFormat>("format").copied();

        let target = matches.get_one::<i64>("target").copied();
        let numbers = matches.get_one::<String>("numbers");
        let input = match (numbers, matches.get_one::<String>("file")) {
            (Some(numbers), _) => InputSource::Inline {
                numbers: parse_sequence(numbers)?,
                target: target.ok_or(OptionsError::MissingTarget)?,
            },
            (None, Some(file)) => InputSource::File(PathBuf::from(file)),
            (None, None) => return Err(OptionsError::MissingInput),
        };

        let config = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("pairsum.toml"));

        Ok(Options {
            input,
            strategy,
            format,
            output: matches.get_one::<String>("output").map(PathBuf::from),
            config,
            verify: matches.get_flag("verify"),
            sequential: matches.get_flag("sequential"),
        })
    }
}
