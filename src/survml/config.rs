//! Shared configuration loading
//!
//! Per-pipeline defaults can live in a YAML file next to the survey sources:
//!
//! ```yaml
//! cells:
//!   tag: col
//!   prefix: c
//! question:
//!   question_type: checkbox
//! ```
//!
//! Explicit CLI flags override file values; file values override built-ins.

use crate::survml::cells::CellOptions;
use crate::survml::question::QuestionOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// On-disk configuration: defaults for both pipelines
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvmlConfig {
    pub cells: CellOptions,
    pub question: QuestionOptions,
}

/// Error loading a configuration file
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a YAML file
pub fn load<P: AsRef<Path>>(path: P) -> Result<SurvmlConfig, ConfigError> {
    let content =
        fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: SurvmlConfig = serde_yaml::from_str("cells:\n  tag: col\n").unwrap();
        assert_eq!(config.cells.tag, "col");
        assert_eq!(config.cells.prefix, "r");
        assert_eq!(config.cells.delimiter, "\n");
        assert_eq!(config.question.question_type, "radio");
    }

    #[test]
    fn test_empty_yaml_is_all_defaults() {
        let config: SurvmlConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SurvmlConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match load("/definitely/not/here.yaml") {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected IO error, got {:?}", other),
        }
    }
}
