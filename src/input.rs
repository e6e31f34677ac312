//! Reading sequences and query files.
//!
//! Query files are picked by extension: `.json`, `.ron`, `.toml`, `.yaml`/`.yml`.
//! Each may hold a single query, a list of queries, or a table with a `query`
//! list (the natural TOML shape, `[[query]]`; in RON, `(query: [...])`).
use std::fs;
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::batch::Query;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());
static RON_TABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\w+\s*)?\(\s*query\s*:").unwrap());

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid integer `{token}` at position {position}")]
    InvalidInteger { token: String, position: usize },
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("json error")]
    Json(#[from] serde_json::Error),
    #[error("ron error")]
    Ron(#[from] ron::error::SpannedError),
    #[error("toml error")]
    Toml(#[from] toml::de::Error),
    #[error("yaml error")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported query file format: {0}")]
    UnsupportedFormat(String),
}

/// Parses integers separated by commas and/or whitespace, optionally wrapped
/// in `[` `]`.
pub fn parse_sequence(s: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    SEPARATOR
        .split(inner)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QueryFile {
    Table { query: Vec<Query> },
    Many(Vec<Query>),
    One(Query),
}

impl From<QueryFile> for Vec<Query> {
    fn from(file: QueryFile) -> Self {
        match file {
            QueryFile::Table { query } | QueryFile::Many(query) => query,
            QueryFile::One(query) => vec![query],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFormat {
    Json,
    Ron,
    Toml,
    Yaml,
}

impl QueryFormat {
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(QueryFormat::Json),
            "ron" => Ok(QueryFormat::Ron),
            "toml" => Ok(QueryFormat::Toml),
            "yaml" | "yml" => Ok(QueryFormat::Yaml),
            _ => {
                warn!("cannot infer query format for {:?}", path);
                Err(InputError::UnsupportedFormat(path.display().to_string()))
            }
        }
    }
}

pub fn parse_queries(content: &str, format: QueryFormat) -> Result<Vec<Query>, InputError> {
    let queries: Vec<Query> = match format {
        QueryFormat::Json => serde_json::from_str::<QueryFile>(content)?.into(),
        QueryFormat::Toml => toml::from_str::<QueryFile>(content)?.into(),
        QueryFormat::Yaml => serde_yaml::from_str::<QueryFile>(content)?.into(),
        QueryFormat::Ron => parse_ron_queries(content)?,
    };
    Ok(queries)
}

#[derive(Deserialize)]
struct QueryTable {
    query: Vec<Query>,
}

// RON is typed, so the shape is picked up front and that parse's error is kept.
fn parse_ron_queries(content: &str) -> Result<Vec<Query>, InputError> {
    let queries = if content.trim_start().starts_with('[') {
        ron::from_str::<Vec<Query>>(content)?
    } else if RON_TABLE.is_match(content) {
        ron::from_str::<QueryTable>(content)?.query
    } else {
        vec![ron::from_str::<Query>(content)?]
    };
    Ok(queries)
}

pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<Query>, InputError> {
    let path = path.as_ref();
    let format = QueryFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let queries = parse_queries(&content, format)?;
    debug!("loaded {} query(ies) from {:?}", queries.len(), path);
    Ok(queries)
}
