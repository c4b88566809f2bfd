use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::LicenseChecker;

impl LicenseChecker {
    /// Reads a YAML mapping of license to decision, e.g. `MIT: true`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read licenses file: {}", path.as_ref().display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let decisions: BTreeMap<String, bool> = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse licenses file: {}", path.as_ref().display()))?;

        Ok(Self::from_map(decisions))
    }

    /// Like [`LicenseChecker::from_file`], but a missing file gives a checker
    /// without decisions.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            log::info!(
                "No licenses file at {}, starting without decisions",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self.decisions()).context("Failed to serialize license decisions")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write licenses file: {}", path.as_ref().display()))?;

        Ok(())
    }
}
