//! Config subcommands handler

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use lyricsync::config::migrate_config;
use lyricsync::tui::Theme;
use lyricsync::Config;

use super::current_theme;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = config.theme().unwrap_or_default();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist), adds any
/// missing fields from the default config, shows a preview and asks for
/// confirmation unless `yes` is set.
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        let total_fields = result.added_fields.len();
        let total_sections = result.sections_added.len();
        let summary = if total_sections > 0 {
            format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            )
        } else {
            format!("Found {} missing field(s):", total_fields)
        };
        println!("{}", theme.primary_text(&summary));
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    for line in diff_preview(&result.content, &result.added_fields, !file_exists) {
        println!("{}", paint_diff_line(&theme, &line));
    }
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&theme, &question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if !file_exists {
        Config::default().save()?;
        println!("{}", theme.success_text("Config file created successfully."));
        return Ok(());
    }

    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{}", theme.success_text("Config updated successfully."));
    Ok(())
}

fn paint_diff_line(theme: &Theme, line: &str) -> String {
    if line.starts_with('+') {
        theme.success_text(line)
    } else {
        theme.secondary_text(line)
    }
}

/// Diff-style preview of the migrated config.
///
/// Added lines get a `+ ` prefix, and the header of a section that received
/// fields is shown once for context. For new files everything is an addition.
fn diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) -> Vec<String> {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let mut out = Vec::new();
    let mut current_section = String::new();
    let mut pending_header: Option<&str> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if is_new_file {
            if !trimmed.is_empty() {
                out.push(format!("+ {}", line));
            }
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
            pending_header = Some(line);
            continue;
        }

        let Some(eq_pos) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq_pos].trim();
        if added.contains(format!("{}.{}", current_section, key).as_str()) {
            if let Some(header) = pending_header.take() {
                out.push(format!("  {}", header));
            }
            out.push(format!("+ {}", line));
        }
    }
    out
}

/// Prompt user for yes/no confirmation.
///
/// Returns false without prompting when stdin is not a TTY.
fn prompt_confirmation(theme: &Theme, message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
