//! Configuration file handling
//!
//! The config lives at `$LYRICSYNC_CONFIG` or
//! `<config dir>/lyricsync/config.toml`. A missing file means defaults, and
//! every section falls back to its defaults field by field.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};

use crate::player::refresh::{RefreshMode, RefreshStrategy};
use crate::tui::Theme;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LYRICSYNC_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub display: DisplayConfig,
    pub lyrics: LyricsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How the display is refreshed: "tick" (every frame) or "event"
    pub strategy: RefreshMode,
    pub frame_interval_ms: u64,
    pub time_update_interval_ms: u64,
    pub speed: f64,
    pub seek_step_secs: f64,
    /// Seconds of playback after the last line before the session ends
    pub tail_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            strategy: RefreshMode::Tick,
            frame_interval_ms: 16,
            time_update_interval_ms: 250,
            speed: 1.0,
            seek_step_secs: 5.0,
            tail_secs: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: String,
    /// Lines shown above and below the active line
    pub context_lines: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "stage".to_string(),
            context_lines: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    /// Reject tracks with validation issues instead of warning
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file used while the player owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("lyricsync").join("config.toml"))
    }

    pub fn refresh_strategy(&self) -> RefreshStrategy {
        RefreshStrategy::from_mode(
            self.playback.strategy,
            Duration::from_millis(self.playback.frame_interval_ms.max(1)),
            Duration::from_millis(self.playback.time_update_interval_ms.max(1)),
        )
    }

    pub fn theme(&self) -> Result<Theme> {
        match Theme::by_name(&self.display.theme) {
            Some(theme) => Ok(theme),
            None => bail!(
                "Unknown theme '{}' (expected one of: {})",
                self.display.theme,
                Theme::NAMES.join(", ")
            ),
        }
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct MigrateResult {
    /// Migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field missing from `content` with its default value.
///
/// Existing values, ordering and comments are preserved. Unknown keys are
/// left untouched.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Config file is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Default config did not serialize to TOML")?;

    let mut added_fields = Vec::new();
    let mut sections_added = BTreeSet::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            let mut table = Table::new();
            for (key, value) in default_table.iter() {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
            doc.insert(section, Item::Table(table));
            sections_added.insert(section.to_string());
            continue;
        }

        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            bail!("Config section [{}] is not a table", section);
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added: sections_added.into_iter().collect(),
    })
}
