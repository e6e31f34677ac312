use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;

use pairsum::batch::{Query, cross_check_all, solve_all, verify};
use pairsum::config::PairSumConfig;
use pairsum::input::load_queries;
use pairsum::options::{InputSource, Options, OptionsError, StrategyChoice};
use pairsum::report::{OutputFormat, render, write_report};

fn main() {
    if std::env::var("PAIRSUM_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("PAIRSUM_LOG")
            .write_style("PAIRSUM_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    // Flags from the environment go first so the command line can override them.
    let mut flags = match shellwords::split(&std::env::var("PAIRSUM_FLAGS").unwrap_or_default()) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("error: PAIRSUM_FLAGS: {e}");
            std::process::exit(2);
        }
    };
    flags.extend(std::env::args().skip(1));

    let options = match Options::parse_from_args(&flags) {
        Ok(options) => options,
        Err(OptionsError::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {:#}", anyhow::Error::from(e));
            std::process::exit(2);
        }
    };
    debug!("pairsum options: {:?}", options);

    let exit_code = match run(&options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(options: &Options) -> Result<()> {
    let config = PairSumConfig::load_from_file(&options.config)?;
    debug!("config: {:?}", config);

    let choice = options
        .strategy
        .unwrap_or(StrategyChoice::Single(config.strategy));
    let format = options.format.unwrap_or(config.format);
    let parallel = config.parallel && !options.sequential;
    let check = config.verify || options.verify;

    let queries = match &options.input {
        InputSource::Inline { numbers, target } => vec![Query::new(numbers.clone(), *target)],
        InputSource::File(path) => load_queries(path)
            .with_context(|| format!("Failed to load queries from {:?}", path))?,
    };

    match choice {
        StrategyChoice::Single(strategy) => {
            let mut outcomes = solve_all(&queries, strategy, parallel);
            if check {
                for (query, outcome) in queries.iter().zip(outcomes.iter_mut()) {
                    verify(query, outcome);
                }
            }
            emit(&outcomes, format, options.output.as_deref())
        }
        StrategyChoice::Both => {
            let checks = cross_check_all(&queries, parallel);
            let mismatches = checks.iter().filter(|c| !c.is_consistent()).count();
            if mismatches > 0 {
                warn!("{} query(ies) with inconsistent results", mismatches);
            }
            emit(&checks, format, options.output.as_deref())
        }
    }
}

fn emit<T>(records: &[T], format: OutputFormat, output: Option<&Path>) -> Result<()>
where
    T: Serialize + Display,
{
    match output {
        Some(path) => write_report(path, records, format)
            .with_context(|| format!("Failed to write report: {:?}", path))?,
        None => {
            let content = render(records, format)?;
            if content.ends_with('\n') {
                print!("{content}");
            } else {
                println!("{content}");
            }
        }
    }
    Ok(())
}
