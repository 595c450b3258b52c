use anyhow::{Context, Result};
use glob::glob;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Token count at which the advisory threshold notice fires, unless the
/// record carries its own limit.
pub const DEFAULT_USAGE_THRESHOLD: u64 = 150_000;

/// One usage record as written by the peripheral usage tooling under
/// `~/.omcm/usage/`. A missing or corrupt cache is an absence signal,
/// never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageSnapshot {
    pub total_tokens: u64,
    /// Per-record override of the advisory threshold
    #[serde(default)]
    pub threshold_tokens: Option<u64>,
}

impl UsageSnapshot {
    pub fn is_over_threshold(&self) -> bool {
        self.total_tokens >= self.threshold_tokens.unwrap_or(DEFAULT_USAGE_THRESHOLD)
    }

    /// Newest usage record in the default cache directory, or `None`.
    pub fn read_latest() -> Option<Self> {
        match read_latest_in(&usage_dir()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                debug!("usage cache unavailable: {err:#}");
                None
            }
        }
    }
}

fn usage_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".omcm").join("usage")
}

/// Newest record (by modification time) among `dir/*.json`. Unreadable
/// entries are skipped.
fn read_latest_in(dir: &Path) -> Result<Option<UsageSnapshot>> {
    let pattern = dir.join("*.json");
    let pattern = pattern.to_string_lossy();

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in glob(&pattern).with_context(|| format!("Invalid usage glob: {}", pattern))? {
        let Ok(path) = entry else { continue };
        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };
        let Ok(modified) = meta.modified() else {
            continue;
        };
        if newest.as_ref().map_or(true, |(ts, _)| modified > *ts) {
            newest = Some((modified, path));
        }
    }

    let Some((_, path)) = newest else {
        return Ok(None);
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read usage record: {}", path.display()))?;
    let snapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse usage record: {}", path.display()))?;

    Ok(Some(snapshot))
}
