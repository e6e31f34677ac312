//! Result records and their text/JSON/RON renderings.
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::finder::Strategy;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json error")]
    Json(#[from] serde_json::Error),
    #[error("ron error")]
    Ron(#[from] ron::Error),
    #[error("io error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ron,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "ron" => Ok(OutputFormat::Ron),
            other => Err(format!("unsupported output format `{other}`")),
        }
    }
}

/// What one strategy produced for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub strategy: Strategy,
    pub target: i64,
    /// Length of the searched sequence.
    pub len: usize,
    pub pair: Option<(usize, usize)>,
    /// `(nums[i], nums[j])` for the reported pair.
    pub values: Option<(i64, i64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Outcome {
    pub fn new(
        name: Option<String>,
        strategy: Strategy,
        nums: &[i64],
        target: i64,
        pair: Option<(usize, usize)>,
    ) -> Self {
        let values = pair.and_then(|(i, j)| Some((*nums.get(i)?, *nums.get(j)?)));
        Outcome {
            name,
            strategy,
            target,
            len: nums.len(),
            pair,
            values,
            verified: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.pair.is_some()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "[{name}] ")?;
        }
        write!(f, "{}: ", self.strategy)?;
        match (self.pair, self.values) {
            (Some((i, j)), Some((a, b))) => {
                write!(f, "found ({i}, {j}): {a} + {b} = {}", self.target)?
            }
            (Some((i, j)), None) => write!(f, "found ({i}, {j})")?,
            _ => write!(f, "no pair sums to {}", self.target)?,
        }
        match self.verified {
            Some(true) => write!(f, " [verified]"),
            Some(false) => write!(f, " [INVALID]"),
            None => Ok(()),
        }
    }
}

pub fn to_json_string<T>(value: &T) -> Result<String, ReportError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, ReportError>
where
    T: Serialize + ?Sized,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

/// Renders a list of records. Text output is one `Display` line per record.
pub fn render<T>(records: &[T], format: OutputFormat) -> Result<String, ReportError>
where
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for record in records {
                out.push_str(&record.to_string());
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => to_json_string(records),
        OutputFormat::Ron => to_ron_string(records),
    }
}

pub fn write_report<P, T>(path: P, records: &[T], format: OutputFormat) -> Result<(), ReportError>
where
    P: AsRef<Path>,
    T: Serialize + fmt::Display,
{
    let path = path.as_ref();
    let content = render(records, format)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    debug!("wrote {} record(s) to {:?}", records.len(), path);
    Ok(())
}
