//! Runner configuration stored in `harness.toml`.
//!
//! The harness itself reads no configuration; this file only steers the hosted
//! wrapper (which suite to run, default log filter).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use harness::Suite;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default config file, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "harness.toml";

/// Scenario list selectable from config or CLI.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SuiteChoice {
    /// The reference scenario list.
    #[default]
    Core,
    /// Core plus overflow and wraparound scenarios.
    Extended,
}

impl From<SuiteChoice> for Suite {
    fn from(choice: SuiteChoice) -> Self {
        match choice {
            SuiteChoice::Core => Suite::Core,
            SuiteChoice::Extended => Suite::Extended,
        }
    }
}

/// Runner configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    pub suite: SuiteChoice,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            suite: SuiteChoice::Core,
            log_filter: "warn".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        EnvFilter::try_new(&self.log_filter)
            .map_err(|err| anyhow!("log_filter {:?} is invalid: {err}", self.log_filter))?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RunnerConfig::default()`.
pub fn load_config(path: &Path) -> Result<RunnerConfig> {
    if !path.exists() {
        let cfg = RunnerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RunnerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RunnerConfig::default());
        assert_eq!(Suite::from(cfg.suite), Suite::Core);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("harness.toml");
        fs::write(&path, "suite = \"extended\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.suite, SuiteChoice::Extended);
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn rejects_unknown_suite() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("harness.toml");
        fs::write(&path, "suite = \"everything\"\n").expect("write");
        let err = load_config(&path).expect_err("unknown suite");
        assert!(format!("{err:#}").contains("parse"));
    }

    #[test]
    fn rejects_blank_log_filter() {
        let cfg = RunnerConfig {
            log_filter: "  ".to_string(),
            ..RunnerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
