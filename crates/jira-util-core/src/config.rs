// Rust guideline compliant 2026-10-18

//! Configuration management for jira-util.
//!
//! The configuration file is TOML with one table per environment:
//!
//! ```toml
//! [default]
//! base_url = "example.atlassian.net"
//! auth = "basic"
//! user = "me@example.com"
//! api_token = "secret"
//! project = "MAR"
//! epic_field = "customfield_10014"
//! epic_name_field = "customfield_10011"
//! sprint_field = "customfield_10020"
//! board_id = "999"
//! priority = "Medium"
//!
//! [default.custom_fields]
//! customfield_11111 = "CustomValue1"
//! customfield_22222 = { accountId = "123456:abcdef123" }
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the environment used when none is given.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// File name of the configuration file in the home directory.
pub const CONFIG_FILE_NAME: &str = ".jira-util.toml";

/// How the client authenticates against the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AuthScheme {
    /// `Authorization: Basic base64(user:api_token)`.
    #[default]
    #[serde(rename = "basic", alias = "Basic")]
    Basic,
    /// `Authorization: Bearer api_token`.
    #[serde(rename = "bearer", alias = "Bearer", alias = "token", alias = "Token")]
    Bearer,
}

/// Settings for one tracker environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Tracker host, with or without scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Authentication scheme.
    #[serde(default)]
    pub auth: AuthScheme,

    /// User name for basic authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// API token, password, or bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Default project key for new tickets.
    #[serde(default = "default_project")]
    pub project: String,

    /// Field id of the epic link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_field: Option<String>,

    /// Field id of the epic name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_name_field: Option<String>,

    /// Field id of the sprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_field: Option<String>,

    /// Agile board used for sprint lookup and backlog ranking.
    #[serde(
        default,
        deserialize_with = "deserialize_board_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub board_id: Option<String>,

    /// Field id linking an epic to its deliverable. When absent the
    /// standard `parent` field is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_link_field: Option<String>,

    /// Priority name applied to every new ticket.
    #[serde(default = "default_priority")]
    pub priority: String,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Field values applied to every created ticket, last.
    #[serde(default)]
    pub custom_fields: BTreeMap<String, serde_json::Value>,
}

fn default_project() -> String {
    "MAR".to_string()
}

fn default_priority() -> String {
    "Medium".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

/// Accepts `board_id = "999"` as well as `board_id = 999`.
fn deserialize_board_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            auth: AuthScheme::default(),
            user: None,
            api_token: None,
            project: default_project(),
            epic_field: None,
            epic_name_field: None,
            sprint_field: None,
            board_id: None,
            parent_link_field: None,
            priority: default_priority(),
            timeout_secs: default_timeout_secs(),
            custom_fields: BTreeMap::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Returns a section with placeholder values for every key.
    pub fn template() -> Self {
        Self {
            base_url: Some("example.atlassian.net".to_string()),
            user: Some("your_email@example.com".to_string()),
            api_token: Some("your-api-token".to_string()),
            epic_field: Some("customfield_10014".to_string()),
            epic_name_field: Some("customfield_10011".to_string()),
            sprint_field: Some("customfield_10020".to_string()),
            board_id: Some("1".to_string()),
            ..Self::default()
        }
    }

    /// Applies environment variable overrides.
    ///
    /// Supported variables:
    /// - `JIRA_UTIL_BASE_URL`
    /// - `JIRA_UTIL_USER`
    /// - `JIRA_UTIL_API_TOKEN`
    /// - `JIRA_UTIL_PROJECT`
    /// - `JIRA_UTIL_PRIORITY`
    ///
    /// # Arguments
    ///
    /// * `lookup` - Variable lookup, usually `|k| std::env::var(k).ok()`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("JIRA_UTIL_BASE_URL") {
            self.base_url = Some(val);
        }
        if let Some(val) = lookup("JIRA_UTIL_USER") {
            self.user = Some(val);
        }
        if let Some(val) = lookup("JIRA_UTIL_API_TOKEN") {
            self.api_token = Some(val);
        }
        if let Some(val) = lookup("JIRA_UTIL_PROJECT") {
            self.project = val;
        }
        if let Some(val) = lookup("JIRA_UTIL_PRIORITY") {
            self.priority = val;
        }
    }

    /// Validates the connection settings.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` if:
    /// - `base_url` or `api_token` is absent
    /// - `auth` is basic and `user` is absent
    pub fn validate(&self) -> Result<()> {
        require(&self.base_url, "base_url")?;
        require(&self.api_token, "api_token")?;
        if self.auth == AuthScheme::Basic {
            require(&self.user, "user")?;
        }
        Ok(())
    }
}

/// Returns a required optional value or a `MissingConfiguration` error.
///
/// # Errors
///
/// Returns `MissingConfiguration(key)` if the value is absent or blank.
pub fn require<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingConfiguration(key.to_string())),
    }
}

/// All configured environments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    /// Environment sections keyed by name.
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

impl Config {
    /// Returns the default configuration file path (`~/.jira-util.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Returns the named environment section.
    ///
    /// # Errors
    ///
    /// Returns an error if no section has that name.
    pub fn environment(&self, name: &str) -> Result<EnvironmentConfig> {
        self.environments.get(name).cloned().ok_or_else(|| {
            let known: Vec<&str> = self.environments.keys().map(String::as_str).collect();
            Error::Config(format!(
                "Unknown environment '{}' (available: {})",
                name,
                known.join(", ")
            ))
        })
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
