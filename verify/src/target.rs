//! Target file parsing and validation.
//!
//! A target is a TOML file naming the command that runs one harness binary,
//! optionally through an emulator or translator. See `verify/targets/`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// A parsed target file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TargetFile {
    pub target: Target,
}

/// How to run the harness and what to expect from it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Target {
    /// Identifier used in reports (slug format: `[a-z0-9_-]+`).
    pub id: String,
    /// Program and arguments, e.g. `["qemu-riscv64", "./arith"]`.
    pub command: Vec<String>,
    /// Repeat count for the determinism check.
    #[serde(default = "default_runs")]
    pub runs: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of cases the transcript must contain, if known.
    #[serde(default)]
    pub expected_cases: Option<usize>,
}

fn default_runs() -> u32 {
    2
}

fn default_timeout_secs() -> u64 {
    30
}

impl TargetFile {
    /// Load and validate a target file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read target {}", path.display()))?;
        let file: TargetFile = toml::from_str(&contents)
            .with_context(|| format!("parse target {}", path.display()))?;
        file.target
            .validate()
            .with_context(|| format!("validate target {}", path.display()))?;
        Ok(file)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let file: TargetFile = toml::from_str(contents).context("parse target")?;
        file.target.validate()?;
        Ok(file)
    }
}

impl Target {
    /// Target built from a command line instead of a file.
    pub fn ad_hoc(command: Vec<String>, runs: u32, timeout_secs: u64) -> Result<Self> {
        let target = Self {
            id: "ad-hoc".to_string(),
            command,
            runs,
            timeout_secs,
            expected_cases: None,
        };
        target.validate()?;
        Ok(target)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_target_id(&self.id)?;
        if self.command.is_empty() || self.command[0].trim().is_empty() {
            bail!("target.command must be a non-empty array");
        }
        if self.runs == 0 {
            bail!("target.runs must be > 0");
        }
        if self.timeout_secs == 0 {
            bail!("target.timeout_secs must be > 0");
        }
        if let Some(expected) = self.expected_cases
            && expected == 0
        {
            bail!("target.expected_cases must be > 0");
        }
        Ok(())
    }
}

fn validate_target_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("target.id must be non-empty");
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        bail!("target.id must match [a-z0-9_-]+");
    }
    Ok(())
}
