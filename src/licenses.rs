use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

/// Parses a listing of `dependency,license` records, one per line, as
/// printed by a package manager's license script. The license is everything
/// after the first comma. A dependency listed twice keeps its last license.
pub fn parse_current_licenses(content: &str) -> Result<IndexMap<String, String>> {
    let mut licenses = IndexMap::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((dependency, license)) = line.split_once(',') else {
            bail!("Line {}: expected 'dependency,license', got '{}'", index + 1, line);
        };

        let dependency = dependency.trim();
        if dependency.is_empty() {
            bail!("Line {}: missing dependency name", index + 1);
        }

        licenses.insert(dependency.to_string(), license.trim().to_string());
    }

    Ok(licenses)
}

/// Reads a listing from a file, or from stdin when `path` is `-`.
pub fn read_current_licenses(path: &Path) -> Result<IndexMap<String, String>> {
    let content = if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read current licenses from stdin")?;
        content
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read current licenses: {}", path.display()))?
    };

    parse_current_licenses(&content)
        .with_context(|| format!("Failed to parse current licenses: {}", path.display()))
}
