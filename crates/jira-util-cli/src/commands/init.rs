// Rust guideline compliant 2026-10-18

//! Implementation of the `jira-util init` command.
//!
//! Writes a template environment section into the configuration file.

use crate::context::GlobalOptions;
use crate::terminal::{print_success, print_warning};
use anyhow::{bail, Result};
use jira_util_core::{Config, EnvironmentConfig};
use std::path::Path;

/// Adds a template section for `env` to the configuration at `path`.
///
/// Other sections of an existing file are kept.
///
/// # Arguments
///
/// * `path` - Configuration file, created if absent
/// * `env` - Section name
/// * `force` - Replace an existing section of the same name
///
/// # Returns
///
/// `true` if an existing section was replaced.
///
/// # Errors
///
/// Returns an error if:
/// - The section exists and `force` is not set
/// - The existing file is invalid
/// - The file cannot be written
pub fn write_template(path: &Path, env: &str, force: bool) -> Result<bool> {
    let mut config = if path.exists() {
        Config::load(path)?
    } else {
        Config::default()
    };

    let replaced = config.environments.contains_key(env);
    if replaced && !force {
        bail!(
            "Environment '{}' already exists in {}; use --force to overwrite it",
            env,
            path.display()
        );
    }

    config
        .environments
        .insert(env.to_string(), EnvironmentConfig::template());
    config.save(path)?;
    Ok(replaced)
}

/// Writes the template section and reports where.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `force` - Replace an existing section of the same name
///
/// # Errors
///
/// Returns an error if the template cannot be written.
pub fn execute(options: &GlobalOptions, force: bool) -> Result<()> {
    let path = options.config_path()?;
    let replaced = write_template(&path, &options.env, force)?;

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "status": "ok",
                "action": "init",
                "path": path,
                "env": options.env,
                "replaced": replaced,
            }))?
        );
        return Ok(());
    }

    if replaced {
        print_warning(
            &format!("Replaced existing environment '{}'", options.env),
            options.use_color,
        );
    }
    print_success(
        &format!("Wrote environment '{}' to {}", options.env, path.display()),
        options.use_color,
    );
    println!("  Fill in base_url, user, api_token and the field ids before use.");
    Ok(())
}
