//! Client configuration.
//!
//! Defaults are baked in at build time (`TASKBOARD_API_URL`) and can be
//! overridden at runtime by settings persisted in browser storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// How a cross-column move relates to its remote status update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Apply locally at once, then sync. A failed sync is reported but never
    /// rolled back; the next refresh repairs the board.
    #[default]
    Optimistic,
    /// Apply a status change only after the store confirms it.
    ConfirmThenApply,
}

impl UpdatePolicy {
    pub fn all() -> [UpdatePolicy; 2] {
        [UpdatePolicy::Optimistic, UpdatePolicy::ConfirmThenApply]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpdatePolicy::Optimistic => "optimistic",
            UpdatePolicy::ConfirmThenApply => "confirm_then_apply",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UpdatePolicy::Optimistic => "Optimistic (apply immediately)",
            UpdatePolicy::ConfirmThenApply => "Confirm then apply",
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "optimistic" => Ok(UpdatePolicy::Optimistic),
            "confirm_then_apply" => Ok(UpdatePolicy::ConfirmThenApply),
            other => Err(format!("unknown update policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub update_policy: UpdatePolicy,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TASKBOARD_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            update_policy: UpdatePolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse persisted settings. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(raw)?;
        config.api_base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if config.api_base_url.is_empty() {
            config.api_base_url = AppConfig::default().api_base_url;
        }
        Ok(config)
    }

    /// Parse persisted settings, falling back to defaults when they are unreadable.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring stored settings: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn level_filter(&self) -> tracing::level_filters::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(tracing::level_filters::LevelFilter::INFO)
    }
}
