//! General application configuration.

use civic_core::enums::StatusFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_true() -> bool {
    true
}

fn default_status() -> String {
    StatusFilter::All.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Populate an empty collection with sample issues on startup.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Status filter applied by `civic list` when `--status` is not given.
    #[serde(default = "default_status")]
    pub default_status: String,

    /// Print a notification after a report is stored.
    #[serde(default = "default_true")]
    pub notify: bool,
}

impl GeneralConfig {
    /// Parse `default_status` into a filter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value is not `all` or a
    /// known status.
    pub fn status_filter(&self) -> Result<StatusFilter, ConfigError> {
        self.default_status
            .parse()
            .map_err(|error: civic_core::errors::CoreError| ConfigError::InvalidValue {
                field: "general.default_status".to_string(),
                reason: error.to_string(),
            })
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            default_status: default_status(),
            notify: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use civic_core::enums::IssueStatus;

    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.seed_sample_data);
        assert!(config.notify);
        assert_eq!(config.default_status, "all");
        assert_eq!(config.status_filter().unwrap(), StatusFilter::All);
    }

    #[test]
    fn parses_configured_status() {
        let config = GeneralConfig {
            default_status: "in-progress".into(),
            ..GeneralConfig::default()
        };
        assert_eq!(
            config.status_filter().unwrap(),
            StatusFilter::Only(IssueStatus::InProgress)
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let config = GeneralConfig {
            default_status: "archived".into(),
            ..GeneralConfig::default()
        };
        let err = config.status_filter().unwrap_err();
        assert!(err.to_string().contains("general.default_status"));
    }
}
