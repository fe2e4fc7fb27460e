use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use degseq_core::{ErrorInfo, RealizeError};
use serde::{Deserialize, Serialize};

/// How labelled candidates are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Every `m`-subset of the node pairs, filtered by degree.
    #[default]
    Exhaustive,
    /// Havel–Hakimi seed plus the closure under double-edge switches.
    Switching,
}

/// How duplicates under relabelling are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMode {
    /// Ask the oracle about every stored representative.
    #[default]
    Pairwise,
    /// Key representatives by canonical form.
    Canonical,
}

impl Strategy {
    /// Stable label used in reports and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Switching => "switching",
        }
    }
}

impl DedupMode {
    /// Stable label used in reports and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DedupMode::Pairwise => "pairwise",
            DedupMode::Canonical => "canonical",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for DedupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RealizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exhaustive" => Ok(Strategy::Exhaustive),
            "switching" => Ok(Strategy::Switching),
            other => Err(unknown_option("strategy", other, "exhaustive, switching")),
        }
    }
}

impl FromStr for DedupMode {
    type Err = RealizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pairwise" => Ok(DedupMode::Pairwise),
            "canonical" => Ok(DedupMode::Canonical),
            other => Err(unknown_option("dedup", other, "pairwise, canonical")),
        }
    }
}

fn unknown_option(field: &str, value: &str, accepted: &str) -> RealizeError {
    RealizeError::Config(
        ErrorInfo::new("unknown-option", format!("unsupported {field} `{value}`"))
            .with_context("field", field)
            .with_hint(format!("expected one of: {accepted}")),
    )
}

/// Options for [`crate::enumerate_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnumerateOptions {
    /// Candidate generation strategy.
    pub strategy: Strategy,
    /// Duplicate detection mode.
    pub dedup: DedupMode,
    /// Name of the isomorphism oracle used for pairwise deduplication.
    pub oracle: String,
    /// Worker threads for the degree filter; `0` lets rayon decide.
    pub threads: usize,
    /// Abort with `deadline-exceeded` after this many milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            dedup: DedupMode::Pairwise,
            oracle: "backtrack".to_string(),
            threads: 0,
            deadline_ms: None,
        }
    }
}

impl EnumerateOptions {
    /// Parses options from YAML; missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RealizeError> {
        serde_yaml::from_str(yaml).map_err(|err| {
            RealizeError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })
    }

    /// Loads options from a YAML file.
    pub fn load(path: &Path) -> Result<Self, RealizeError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            RealizeError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            RealizeError::Config(info) => {
                RealizeError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Serialises the options as YAML.
    pub fn to_yaml_string(&self) -> Result<String, RealizeError> {
        serde_yaml::to_string(self).map_err(|err| {
            RealizeError::Config(ErrorInfo::new("config-serialize", err.to_string()))
        })
    }
}
