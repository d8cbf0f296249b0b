//! Configuration management for the Travel Guide planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelGuideError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Travel Guide planner
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TravelGuideConfig {
    /// Value-score tunables
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Planner tunables
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Value-score weights and normalization inputs.
///
/// The score is `weight_cost * cost_factor + weight_exchange *
/// exchange_factor`, both factors clamped to [0,1]. The weights must sum
/// to 1 so the overall score stays in [0,1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the daily-cost factor
    #[serde(default = "default_weight_cost")]
    pub weight_cost: f64,
    /// Weight of the exchange-rate factor
    #[serde(default = "default_weight_exchange")]
    pub weight_exchange: f64,
    /// Daily cost (USD) at which the cost factor bottoms out
    #[serde(default = "default_cost_ceiling")]
    pub cost_ceiling: f64,
    /// Exchange rate at which the exchange factor maxes out
    #[serde(default = "default_reference_rate")]
    pub reference_rate: f64,
}

/// Planner tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum scheduled activities per day
    #[serde(default = "default_max_activities_per_day")]
    pub max_activities_per_day: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weight_cost() -> f64 {
    0.6
}

fn default_weight_exchange() -> f64 {
    0.4
}

fn default_cost_ceiling() -> f64 {
    500.0
}

fn default_reference_rate() -> f64 {
    2.0
}

fn default_max_activities_per_day() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_cost: default_weight_cost(),
            weight_exchange: default_weight_exchange(),
            cost_ceiling: default_cost_ceiling(),
            reference_rate: default_reference_rate(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_activities_per_day: default_max_activities_per_day(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TravelGuideConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with TRAVELGUIDE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRAVELGUIDE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TravelGuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelguide").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_scoring()?;
        self.validate_planner()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_scoring(&self) -> Result<()> {
        let s = &self.scoring;

        if !(0.0..=1.0).contains(&s.weight_cost) || !(0.0..=1.0).contains(&s.weight_exchange) {
            return Err(
                TravelGuideError::config("Scoring weights must each be within [0, 1]").into(),
            );
        }

        if (s.weight_cost + s.weight_exchange - 1.0).abs() > 1e-9 {
            return Err(TravelGuideError::config(format!(
                "Scoring weights must sum to 1 (got {})",
                s.weight_cost + s.weight_exchange
            ))
            .into());
        }

        if s.cost_ceiling <= 0.0 {
            return Err(TravelGuideError::config("Cost ceiling must be positive").into());
        }

        if s.reference_rate <= 0.0 {
            return Err(TravelGuideError::config("Reference exchange rate must be positive").into());
        }

        Ok(())
    }

    fn validate_planner(&self) -> Result<()> {
        if self.planner.max_activities_per_day == 0 {
            return Err(
                TravelGuideError::config("Max activities per day must be at least 1").into(),
            );
        }

        if self.planner.max_activities_per_day > 8 {
            return Err(TravelGuideError::config("Max activities per day cannot exceed 8").into());
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelGuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelGuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TravelGuideConfig::default();
        assert_eq!(config.scoring.weight_cost, 0.6);
        assert_eq!(config.scoring.weight_exchange, 0.4);
        assert_eq!(config.scoring.cost_ceiling, 500.0);
        assert_eq!(config.planner.max_activities_per_day, 3);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = TravelGuideConfig::default();
        config.scoring.weight_cost = 0.9;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("sum to 1"));
    }

    #[test]
    fn test_weights_must_be_in_unit_interval() {
        let mut config = TravelGuideConfig::default();
        config.scoring.weight_cost = 1.4;
        config.scoring.weight_exchange = -0.4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_activities_bounds() {
        let mut config = TravelGuideConfig::default();
        config.planner.max_activities_per_day = 0;
        assert!(config.validate().is_err());

        config.planner.max_activities_per_day = 20;
        assert!(config.validate().is_err());

        config.planner.max_activities_per_day = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = TravelGuideConfig::default();
        config.logging.level = "shout".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = TravelGuideConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("travelguide"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
