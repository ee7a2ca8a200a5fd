//! Configuration loading for group search.
//!
//! Layered config: defaults -> config file -> env vars -> caller overrides.
//! The default config file lives at ~/.config/group-search/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::GroupsError;

/// Default cap on candidate slugs hydrated per group search.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Default size of the member listing returned for empty member queries.
pub const DEFAULT_MEMBER_PAGE_SIZE: usize = 20;

/// Main group search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Built-in groups that exist only in process memory.
    /// Prepended to the persisted candidates unless a search hides them.
    #[serde(default = "default_ephemeral_groups")]
    pub ephemeral_groups: Vec<String>,

    /// Reserved slug of the banned-users pseudo-group, never returned by search
    #[serde(default = "default_banned_users_slug")]
    pub banned_users_slug: String,

    /// Maximum number of candidate slugs hydrated per group search
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Size of the default member listing used for empty member queries
    #[serde(default = "default_member_page_size")]
    pub member_page_size: usize,

    /// Log level (trace, debug, info, warn, error).
    /// Not read by the library; the embedding process uses it to build its
    /// tracing filter.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_ephemeral_groups() -> Vec<String> {
    vec!["guests".to_string(), "spiders".to_string()]
}

fn default_banned_users_slug() -> String {
    "banned-users".to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_member_page_size() -> usize {
    DEFAULT_MEMBER_PAGE_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ephemeral_groups: default_ephemeral_groups(),
            banned_users_slug: default_banned_users_slug(),
            max_results: default_max_results(),
            member_page_size: default_member_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/group-search/config.toml)
    /// 3. Caller-specified config file (optional)
    /// 4. Environment variables (GROUPS_*)
    ///
    /// Nested keys use a double underscore in env vars, e.g.
    /// `GROUPS_MAX_RESULTS=50` or `GROUPS_EPHEMERAL_GROUPS=guests,spiders`.
    pub fn load(config_path: Option<&str>) -> Result<Self, GroupsError> {
        let config_dir = ProjectDirs::from("", "", "group-search")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("banned_users_slug", default_banned_users_slug())
            .map_err(|e| GroupsError::Config(e.to_string()))?
            .set_default("max_results", default_max_results() as i64)
            .map_err(|e| GroupsError::Config(e.to_string()))?
            .set_default("member_page_size", default_member_page_size() as i64)
            .map_err(|e| GroupsError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| GroupsError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("GROUPS")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("ephemeral_groups")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| GroupsError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| GroupsError::Config(e.to_string()))?;

        settings.validate().map_err(GroupsError::Config)?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 {
            return Err("max_results must be > 0".to_string());
        }
        if self.member_page_size == 0 {
            return Err("member_page_size must be > 0".to_string());
        }
        if self.banned_users_slug.is_empty() {
            return Err("banned_users_slug must not be empty".to_string());
        }
        Ok(())
    }
}
