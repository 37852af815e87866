use crate::search::{
    search_engines::{SearchEngine, SearchEngineName, TerminationCondition},
    Problem,
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time limit {value:?}: {source}")]
    TimeLimit {
        value: String,
        source: humantime::DurationError,
    },
    #[error("depth-limited search needs a depth-limit")]
    MissingDepthLimit,
}

/// Which engine to run and the limits it runs under, usually read from a
/// TOML file such as
///
/// ```toml
/// engine = "iddfs"
/// max-depth = 20
/// time-limit = "30s"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    pub engine: SearchEngineName,
    /// The limit of depth-limited search.
    #[serde(default)]
    pub depth_limit: Option<usize>,
    /// The deepest iteration iterative deepening search attempts, unbounded
    /// if absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub node_budget: Option<u64>,
    /// A human readable duration, e.g. `"1m 30s"`.
    #[serde(default)]
    pub time_limit: Option<String>,
    #[serde(default)]
    pub memory_limit_mb: Option<usize>,
}

impl SearchConfig {
    pub fn new(engine: SearchEngineName) -> Self {
        Self {
            engine,
            depth_limit: None,
            max_depth: None,
            node_budget: None,
            time_limit: None,
            memory_limit_mb: None,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_text(&text)?;
        info!(config_path = %path.display(), engine = %config.engine, "loaded search config");
        Ok(config)
    }

    pub fn parsed_time_limit(&self) -> Result<Option<Duration>, ConfigError> {
        self.time_limit
            .as_deref()
            .map(|value| {
                humantime::parse_duration(value).map_err(|source| ConfigError::TimeLimit {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }

    pub fn termination_condition(&self) -> Result<TerminationCondition, ConfigError> {
        Ok(TerminationCondition::new(
            self.node_budget,
            self.parsed_time_limit()?,
            self.memory_limit_mb,
        ))
    }

    pub fn create_engine<P: Problem>(&self) -> Result<Box<dyn SearchEngine<P>>, ConfigError> {
        let depth_limit = match self.engine {
            SearchEngineName::Dls => Some(self.depth_limit.ok_or(ConfigError::MissingDepthLimit)?),
            SearchEngineName::Iddfs => self.max_depth,
            _ => None,
        };
        Ok(self.engine.create(depth_limit))
    }
}
