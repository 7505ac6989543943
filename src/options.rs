//! Process-wide test options and the captured environment snapshot
//!
//! Configuration hierarchy, lowest to highest priority:
//! 1. Built-in defaults (the known tenant/alias/environment/geography lists)
//! 2. Options override file (`suitegrid.toml`, optional)
//! 3. Environment snapshot (`BASE_URL` and the runner knobs)
//!
//! The environment is read exactly once, at startup, into an [`EnvSnapshot`]
//! that consumers receive by reference. Nothing touches `std::env` after
//! that point, so the resolved option set is stable for the whole run.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Timeout values (milliseconds) shared with the external runner.
pub mod timeouts {
    /// Default per-action and per-navigation timeout
    pub const TWO_MINUTES_MS: u64 = 120_000;
    /// Upper bound for a single test body
    pub const TEST_TIMEOUT_MAX_MS: u64 = 600_000;
}

/// Browser engine a group runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    /// Parse a browser name case-insensitively.
    ///
    /// Unknown names fall back to chromium rather than failing the run.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "firefox" => Self::Firefox,
            "webkit" => Self::Webkit,
            _ => Self::Chromium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chromium => "chromium",
            Self::Firefox => "firefox",
            Self::Webkit => "webkit",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment snapshot captured once at process start.
///
/// Holds every runner knob the suite reads from the environment, with the
/// defaults applied. Injectable via [`EnvSnapshot::from_lookup`] so tests
/// never depend on ambient process state.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvSnapshot {
    pub browser: BrowserKind,
    pub headless: bool,
    pub open_devtools: bool,
    pub output_directory: PathBuf,
    pub run_name: String,
    pub repeat_each: u32,
    pub retries: u32,
    pub slow_mo_ms: u64,
    pub test_directory: String,
    pub test_timeout_ms: u64,
    pub workers: u32,
    pub base_url_override: Option<String>,
}

impl Default for EnvSnapshot {
    fn default() -> Self {
        Self {
            browser: BrowserKind::Chromium,
            headless: false,
            open_devtools: false,
            output_directory: PathBuf::from("."),
            run_name: "Integration Tests".to_string(),
            repeat_each: 1,
            retries: 1,
            slow_mo_ms: 40,
            test_directory: "src/tests".to_string(),
            test_timeout_ms: timeouts::TEST_TIMEOUT_MAX_MS,
            workers: 1,
            base_url_override: None,
        }
    }
}

impl EnvSnapshot {
    /// Capture the process environment. Call once, at startup.
    pub fn capture() -> Self {
        let mut snapshot = Self::from_lookup(|key| std::env::var(key).ok());
        if snapshot.output_directory == Path::new(".") {
            if let Ok(cwd) = std::env::current_dir() {
                snapshot.output_directory = cwd;
            }
        }
        snapshot
    }

    /// Build a snapshot from an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            browser: lookup("BROWSER")
                .map(|raw| BrowserKind::parse_or_default(&raw))
                .unwrap_or(defaults.browser),
            headless: flag(lookup("HEADLESS")),
            open_devtools: flag(lookup("AUTO_OPEN_DEVTOOLS")),
            output_directory: lookup("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_directory),
            run_name: lookup("TEST_RUN_NAME").unwrap_or(defaults.run_name),
            repeat_each: positive(lookup("REPEAT"), defaults.repeat_each),
            retries: positive(lookup("RETRIES"), defaults.retries),
            slow_mo_ms: positive(lookup("SLOW_DOWN_MS"), defaults.slow_mo_ms),
            test_directory: lookup("TEST_DIR").unwrap_or(defaults.test_directory),
            test_timeout_ms: positive(lookup("TEST_TIMEOUT"), defaults.test_timeout_ms),
            workers: positive(lookup("WORKERS"), defaults.workers),
            base_url_override: lookup("BASE_URL").filter(|url| !url.is_empty()),
        }
    }
}

fn flag(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// Numeric knobs treat absent, malformed and zero values as unset.
fn positive<N>(value: Option<String>, fallback: N) -> N
where
    N: std::str::FromStr + PartialOrd + Default,
{
    value
        .and_then(|raw| raw.trim().parse::<N>().ok())
        .filter(|parsed| *parsed > N::default())
        .unwrap_or(fallback)
}

/// Process-wide default option registry.
///
/// The single source of truth the matrix generator iterates over. Resolved
/// once per process and treated as immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOptions {
    pub owner: String,
    pub user_aliases: Vec<String>,
    pub tenants: Vec<String>,
    pub environments: Vec<String>,
    pub geographies: Vec<String>,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub is_testing_against_local: bool,
}

impl TestOptions {
    /// Built-in defaults, with the base URL taken from the snapshot.
    pub fn defaults(env: &EnvSnapshot) -> Self {
        Self {
            owner: "default".to_string(),
            user_aliases: vec![
                "default".to_string(),
                "admin".to_string(),
                "globalAdmin".to_string(),
                "testuser01".to_string(),
            ],
            tenants: vec![
                "makerShell".to_string(),
                "adminCenter".to_string(),
                "pva".to_string(),
                "powerPages".to_string(),
            ],
            environments: vec![
                "default".to_string(),
                "test".to_string(),
                "prod".to_string(),
            ],
            geographies: vec!["us".to_string(), "eu".to_string(), "in".to_string()],
            base_url: env
                .base_url_override
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            is_testing_against_local: false,
        }
    }

    /// Resolve the option registry for this run.
    ///
    /// Applies `suitegrid.toml` from `dir` over the built-in defaults when
    /// present. Unknown keys in the file are collected as non-fatal warnings;
    /// a file that exists but fails to parse is a fatal configuration error.
    pub fn resolve(dir: &Path, env: &EnvSnapshot) -> GridResult<(Self, Vec<OptionWarning>)> {
        let mut options = Self::defaults(env);

        let file = dir.join(OPTIONS_FILE_NAME);
        if !file.exists() {
            return Ok((options, Vec::new()));
        }

        let (overrides, warnings) = OptionsOverride::load_with_warnings(&file)?;
        options.apply(overrides);
        Ok((options, warnings))
    }

    fn apply(&mut self, overrides: OptionsOverride) {
        if let Some(owner) = overrides.owner {
            self.owner = owner;
        }
        if let Some(user_aliases) = overrides.user_aliases {
            self.user_aliases = user_aliases;
        }
        if let Some(tenants) = overrides.tenants {
            self.tenants = tenants;
        }
        if let Some(environments) = overrides.environments {
            self.environments = environments;
        }
        if let Some(geographies) = overrides.geographies {
            self.geographies = geographies;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(local) = overrides.is_testing_against_local {
            self.is_testing_against_local = local;
        }
    }
}

const OPTIONS_FILE_NAME: &str = "suitegrid.toml";

/// Partial option set loaded from the override file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsOverride {
    pub owner: Option<String>,
    pub user_aliases: Option<Vec<String>>,
    pub tenants: Option<Vec<String>>,
    pub environments: Option<Vec<String>>,
    pub geographies: Option<Vec<String>>,
    pub base_url: Option<String>,
    pub is_testing_against_local: Option<bool>,
}

/// Non-fatal warning surfaced for unknown keys in the options file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl OptionsOverride {
    /// Load the override file, collecting unknown-key warnings.
    pub fn load_with_warnings(path: &Path) -> GridResult<(Self, Vec<OptionWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_keys: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let overrides: Self = serde_ignored::deserialize(deserializer, |ignored| {
            unknown_keys.push(ignored.to_string());
        })
        .map_err(|e| GridError::InvalidOptionsFile {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_keys
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .rsplit('.')
                    .next()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                OptionWarning {
                    line: find_line_number(&content, &key),
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((overrides, warnings))
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
