// Rust guideline compliant 2026-10-18

//! Global options and the per-command tracker session.

use anyhow::{anyhow, Context, Result};
use jira_util_client::HttpTracker;
use jira_util_core::{Config, EnvironmentConfig, FieldComposer};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Explicit configuration file; defaults to `~/.jira-util.toml`.
    pub config: Option<PathBuf>,
    /// Environment section name.
    pub env: String,
    /// Emit JSON envelopes instead of human-readable text.
    pub json: bool,
    /// Color human-readable output.
    pub use_color: bool,
}

impl GlobalOptions {
    /// Resolves the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path was given and the home directory is unknown.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::default_path()
                .ok_or_else(|| anyhow!("Cannot locate home directory; pass --config")),
        }
    }

    /// Loads the selected environment with process environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid, or the
    /// environment section does not exist.
    pub fn environment(&self) -> Result<EnvironmentConfig> {
        load_environment(&self.config_path()?, &self.env, |key| std::env::var(key).ok())
    }

    /// Loads the environment and builds an HTTP tracker for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be loaded or lacks
    /// connection settings.
    pub fn connect(&self) -> Result<Session> {
        let env = self.environment()?;
        let tracker = HttpTracker::new(&env)?;
        debug!(env = %self.env, base_url = tracker.base_url(), "connected");
        Ok(Session { env, tracker })
    }
}

/// Loads one environment section and applies overrides.
///
/// # Arguments
///
/// * `path` - Configuration file
/// * `name` - Environment section name
/// * `lookup` - Override lookup, usually the process environment
///
/// # Errors
///
/// Returns an error if the file is missing or invalid, or the section
/// does not exist.
pub fn load_environment<F>(path: &Path, name: &str, lookup: F) -> Result<EnvironmentConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::load(path)?;
    let mut env = config
        .environment(name)
        .with_context(|| format!("Failed to select environment in {}", path.display()))?;
    env.apply_env_overrides(lookup);
    Ok(env)
}

/// A loaded environment and its tracker.
#[derive(Debug)]
pub struct Session {
    /// Environment settings.
    pub env: EnvironmentConfig,
    /// Tracker for the environment.
    pub tracker: HttpTracker,
}

impl Session {
    /// Builds the field composer for ticket creation.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field id is not configured.
    pub fn composer(&self) -> Result<FieldComposer> {
        Ok(FieldComposer::new(&self.env)?)
    }
}
