// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is read from an optional `.repoflow.toml` in the directory
//! being scanned. Every field has a default, so a missing file or a partial
//! one is fine:
//! - `[scan]`: which files to skip, the read-error policy, stale-issue closing
//! - `[tracker]`: API base URLs and the HTTP timeout

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".repoflow.toml";

const DEFAULT_GITHUB_API: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Project configuration stored in `.repoflow.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub tracker: TrackerConfig,
}

/// What the TODO scanner does when a file cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Report the file and keep scanning.
    #[default]
    Skip,
    /// Stop the whole scan at the first unreadable file.
    Abort,
}

/// `[scan]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Exact file names never scanned.
    pub ignored_files: Vec<String>,
    /// Substrings that mark a file name as binary or non-source.
    pub ignored_extensions: Vec<String>,
    pub on_error: ErrorPolicy,
    /// Close open marker issues whose TODO is gone after a complete scan.
    pub close_stale: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            ignored_files: [".localized", ".DS_Store", ".gitignore", CONFIG_FILE_NAME]
                .into_iter()
                .map(String::from)
                .collect(),
            ignored_extensions: [".app", ".exe", ".elf", ".md"]
                .into_iter()
                .map(String::from)
                .collect(),
            on_error: ErrorPolicy::Skip,
            close_stale: false,
        }
    }
}

/// `[tracker]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub github_api: String,
    /// GitLab API base. Defaults to `https://<remote host>/api/v4`.
    pub gitlab_api: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            github_api: DEFAULT_GITHUB_API.to_string(),
            gitlab_api: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TrackerConfig {
    /// GitLab API base for a remote host.
    pub fn gitlab_api_for(&self, host: &str) -> String {
        self.gitlab_api
            .clone()
            .unwrap_or_else(|| format!("https://{}/api/v4", host))
    }
}

impl Config {
    /// Loads configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads `.repoflow.toml` from `dir`, or defaults when there is none.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = config_path(dir);
        if path.is_file() {
            Config::load(&path)
        } else {
            Ok(Config::default())
        }
    }
}

/// Path of the config file for a directory.
fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
