//! Config subcommands handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use pagestat::config::migrate_config;
use pagestat::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file location.
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Write a config file with defaults.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save_to(config_path)?;
    println!("Config file written to {}", config_path.display());
    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and asks for confirmation unless `yes` is set.
pub fn handle_migrate(config_path: &Path, yes: bool) -> Result<()> {
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("Config is already up to date.");
        return Ok(());
    }

    if file_exists {
        if result.sections_added.is_empty() {
            println!("Found {} missing field(s):", result.added_fields.len());
        } else {
            println!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            );
        }
    } else {
        println!("Config file does not exist. Will create with default settings.");
    }
    println!();
    print_diff_preview(&result.content, &result.added_fields, !file_exists);
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&question)? {
        println!("No changes made.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Config updated successfully.");

    Ok(())
}

/// Print a diff-style preview of the config changes.
///
/// Lines holding added fields get a `+` prefix; for new files every
/// non-empty line does.
fn print_diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) {
    let mut current_section = String::new();
    let mut pending_header: Option<&str> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].to_string();
            pending_header = Some(line);
            continue;
        }

        let is_added = match trimmed.find('=') {
            Some(eq_pos) => {
                let key = trimmed[..eq_pos].trim();
                added_fields.contains(&format!("{}.{}", current_section, key))
            }
            None => false,
        };

        if is_added || (is_new_file && !trimmed.is_empty()) {
            if let Some(header) = pending_header.take() {
                println!("+ {}", header);
            }
            println!("+ {}", line);
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to apply changes automatically");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
