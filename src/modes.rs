use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

const MODES_FILENAME: &str = "modes.yaml";

/// Built-in trigger keywords, applied when no config file is present or
/// the file fails to load.
pub static DEFAULT_MODES: LazyLock<BTreeMap<String, Vec<String>>> = LazyLock::new(|| {
    let mut m = BTreeMap::new();
    m.insert(
        "debug".to_string(),
        vec!["디버그".to_string(), "why is this failing".to_string()],
    );
    m.insert(
        "plan".to_string(),
        vec!["계획".to_string(), "plan mode".to_string()],
    );
    m.insert(
        "review".to_string(),
        vec!["리뷰".to_string(), "review this".to_string()],
    );
    m
});

/// Raw configuration structure (as parsed from YAML)
#[derive(Debug, Deserialize)]
struct ModesFileRaw {
    modes: BTreeMap<String, Vec<String>>,
}

/// Resolved mapping from mode name to the keywords that trigger it in a
/// submitted prompt.
#[derive(Debug, Clone)]
pub struct ModeTable {
    modes: BTreeMap<String, Vec<String>>,
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            modes: DEFAULT_MODES.clone(),
        }
    }
}

impl ModeTable {
    /// Load the user table from `$XDG_CONFIG_HOME/omcm/modes.yaml`,
    /// substituting the built-in defaults on any failure.
    pub fn load_or_default() -> Self {
        match load_modes(&modes_path()) {
            Ok(table) => table,
            Err(err) => {
                debug!("mode config unavailable, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    /// First mode (in name order) with a trigger keyword occurring in the
    /// prompt, matched case-insensitively.
    pub fn match_mode(&self, prompt: &str) -> Option<&str> {
        if prompt.is_empty() {
            return None;
        }
        let haystack = prompt.to_lowercase();
        for (mode, keywords) in &self.modes {
            if keywords
                .iter()
                .any(|keyword| haystack.contains(&keyword.to_lowercase()))
            {
                return Some(mode);
            }
        }
        None
    }
}

/// Path to the user mode config in XDG config.
fn modes_path() -> PathBuf {
    let xdg_config = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });

    xdg_config.join("omcm").join(MODES_FILENAME)
}

/// Loads and validates a modes.yaml file.
fn load_modes(path: &Path) -> Result<ModeTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mode config: {}", path.display()))?;

    let parsed: ModesFileRaw = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse mode config: {}", path.display()))?;

    if parsed.modes.is_empty() {
        bail!(
            "Invalid mode config at {}: no modes defined",
            path.display()
        );
    }
    for (mode, keywords) in &parsed.modes {
        if keywords.is_empty() {
            bail!(
                "Invalid mode config at {}: mode '{}' has no trigger keywords",
                path.display(),
                mode
            );
        }
    }

    Ok(ModeTable {
        modes: parsed.modes,
    })
}
