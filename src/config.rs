use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use crate::checker::UnknownPolicy;
use crate::environment::Interactivity;

pub const DEFAULT_CONFIG_FILE: &str = ".license-checker.toml";
pub const DEFAULT_LICENSES_FILE: &str = ".licenses.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Decisions file: a YAML mapping of license to allowed/disallowed
    #[serde(default = "default_licenses_file")]
    pub licenses_file: PathBuf,

    /// Listing of `dependency,license` lines checked by default
    pub current_licenses: Option<PathBuf>,

    /// Output format (table, json)
    pub format: Option<String>,

    /// What to do with licenses that have no decision yet
    pub on_unknown: Option<UnknownPolicy>,

    /// Whether a person is watching the run (auto, always, never)
    pub interactive: Option<Interactivity>,
}

fn default_licenses_file() -> PathBuf {
    PathBuf::from(DEFAULT_LICENSES_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            licenses_file: default_licenses_file(),
            current_licenses: None,
            format: Some("table".to_string()),
            on_unknown: None,
            interactive: Some(Interactivity::Auto),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.licenses_file.as_os_str().is_empty() {
            bail!("licenses_file must not be empty");
        }

        match self.format.as_deref() {
            None | Some("table") | Some("json") => Ok(()),
            Some(other) => bail!("Unsupported format '{}', expected 'table' or 'json'", other),
        }
    }

    /// The unknown-license policy to apply: the configured one, otherwise
    /// `Report` when someone is watching and `Deny` in unattended runs.
    pub fn unknown_policy(&self, interactive: bool) -> UnknownPolicy {
        self.on_unknown.unwrap_or(if interactive {
            UnknownPolicy::Report
        } else {
            UnknownPolicy::Deny
        })
    }
}

/// Load configuration from `path`, or from `.license-checker.toml` in the
/// current directory. A missing file gives the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_CONFIG_FILE),
    };

    if !config_path.exists() {
        if path.is_some() {
            bail!("Config file not found: {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    config.validate()
        .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

    Ok(config)
}
