//! User settings for pocket-ledger
//!
//! Display locale and currency, the utilization thresholds used to flag
//! budget categories, the dashboard buffer warning and an optional default
//! snapshot location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Money, MoneyFormat};
use crate::services::budget::RiskThresholds;

/// User settings for pocket-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locale and currency used when rendering amounts
    #[serde(default)]
    pub money_format: MoneyFormat,

    /// Utilization limits for the warn and danger levels
    #[serde(default)]
    pub risk_thresholds: RiskThresholds,

    /// Remaining buffer below which the dashboard shows a warning
    #[serde(default = "default_buffer_threshold")]
    pub dashboard_buffer_threshold: Money,

    /// Snapshot to load when `--snapshot` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_buffer_threshold() -> Money {
    Money::from_major(100)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            money_format: MoneyFormat::default(),
            risk_thresholds: RiskThresholds::default(),
            dashboard_buffer_threshold: default_buffer_threshold(),
            snapshot_path: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Thresholds must be ordered percentages
    pub fn validate(&self) -> Result<(), LedgerError> {
        let RiskThresholds { warn, danger } = self.risk_thresholds;
        if !(0.0..=100.0).contains(&warn) || !(0.0..=100.0).contains(&danger) {
            return Err(LedgerError::Config(
                "risk thresholds must lie between 0 and 100".into(),
            ));
        }
        if warn > danger {
            return Err(LedgerError::Config(format!(
                "warn threshold ({}) exceeds danger threshold ({})",
                warn, danger
            )));
        }
        if self.dashboard_buffer_threshold.is_negative() {
            return Err(LedgerError::Config(
                "dashboard buffer threshold cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
