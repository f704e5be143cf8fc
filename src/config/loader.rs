// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_EVENT_PREFIX, DEFAULT_GET_VIEWS_METHOD, DEFAULT_HOST_ID, DEFAULT_PORTFOLIO_TABLE,
    DEFAULT_RELEASE_VIEW_METHOD, DEFAULT_SUBMIT_VIEW_METHOD,
};
use crate::errors::ConfigError;
use crate::observability::messages::{validation::ConfigValidationFailed, StructuredLog};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for the portfolio service.
///
/// Loaded from YAML or TOML, chosen by file extension.
///
/// # Fields
/// * `host_id` - Peer host the remote calls go to (optional, defaults to -1)
/// * `wwwroot` - Base URL of the local site, used for jump links
/// * `portfolio_table` - Table holding portfolio records (optional)
/// * `remote_methods` - Remote method paths (optional, each has a default)
/// * `events` - Event naming options (optional)
///
/// # Example
/// ```yaml
/// host_id: 3
/// wwwroot: "https://moodle.example.edu"
/// portfolio_table: mahara_portfolio
/// remote_methods:
///   get_views_for_user: "mod/mahara/rpclib.php/get_views_for_user"
/// events:
///   prefix: mahara
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host_id")]
    pub host_id: i64,
    pub wwwroot: String,
    #[serde(default = "default_portfolio_table")]
    pub portfolio_table: String,
    #[serde(default)]
    pub remote_methods: RemoteMethods,
    #[serde(default)]
    pub events: EventConfig,
}

fn default_host_id() -> i64 {
    DEFAULT_HOST_ID
}

fn default_portfolio_table() -> String {
    DEFAULT_PORTFOLIO_TABLE.to_string()
}

impl ServiceConfig {
    /// Configuration with every optional field at its default.
    pub fn new(wwwroot: impl Into<String>) -> Self {
        Self {
            host_id: DEFAULT_HOST_ID,
            wwwroot: wwwroot.into(),
            portfolio_table: default_portfolio_table(),
            remote_methods: RemoteMethods::default(),
            events: EventConfig::default(),
        }
    }

    pub fn with_host(mut self, host_id: i64) -> Self {
        self.host_id = host_id;
        self
    }
}

/// Remote method paths invoked on the peer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteMethods {
    pub get_views_for_user: String,
    pub submit_view_for_assessment: String,
    pub release_submitted_view: String,
}

impl Default for RemoteMethods {
    fn default() -> Self {
        Self {
            get_views_for_user: DEFAULT_GET_VIEWS_METHOD.to_string(),
            submit_view_for_assessment: DEFAULT_SUBMIT_VIEW_METHOD.to_string(),
            release_submitted_view: DEFAULT_RELEASE_VIEW_METHOD.to_string(),
        }
    }
}

/// Event naming options.
///
/// Every event the service triggers is named `<prefix>_<event>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub prefix: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_EVENT_PREFIX.to_string(),
        }
    }
}

impl EventConfig {
    pub fn event_name(&self, event: &str) -> String {
        format!("{}_{}", self.prefix, event)
    }
}

/// Load a config from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let content = fs::read_to_string(path)?;
    match extension.as_str() {
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        "toml" => Ok(toml::from_str(&content)?),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a config and run [`validate_config`](crate::config::validate_config) on it
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;

    if let Err(errors) = crate::config::validate_config(&cfg) {
        ConfigValidationFailed {
            source: &path.display().to_string(),
            errors: &errors,
        }
        .log();
        return Err(ConfigError::Invalid(errors));
    }

    Ok(cfg)
}
