use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

/// How the simulated backend answers a save request.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Timeout,
    Network,
    BadStatus,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub json: bool,
    pub outcome: Option<Outcome>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            json: self.json || other.json,
            outcome: other.outcome.or(self.outcome),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata)
                .join("editable-webdata")
                .join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("editable-webdata")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("editable-webdata").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("editable-webdata")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".editablerc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# editable-webdata defaults (saved with --save)".to_string());
    if flags.json {
        lines.push("--json".to_string());
    }
    if let Some(value) = flags.outcome.and_then(|o| o.to_possible_value()) {
        lines.push(format!("--outcome {}", value.get_name()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract the persistable flags from raw argument tokens.
///
/// Unknown tokens (including positional arguments) are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--json" {
            flags.json = true;
        } else if token == "--outcome" {
            if let Some(next) = tokens.get(i + 1) {
                flags.outcome = parse_outcome(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--outcome=") {
            flags.outcome = parse_outcome(value);
        }
        i += 1;
    }
    flags
}

fn parse_outcome(s: &str) -> Option<Outcome> {
    <Outcome as ValueEnum>::from_str(s, false).ok()
}
