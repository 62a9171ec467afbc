// crates/value-engine-config/src/config.rs
// ============================================================================
// Module: Value Engine Configuration
// Description: Configuration loading and validation for the value engine.
// Purpose: Provide strict config parsing with hard limits and engine defaults.
// Dependencies: value-engine-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown keys are rejected in every table. Every field has a default, so an
//! empty file (or no file at the default location) yields the stock
//! assumption set with zero platform spend.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use value_engine_core::Assumptions;
use value_engine_core::HourlyRates;
use value_engine_core::TaskMinutes;
use value_engine_core::core::assumptions::DEFAULT_ANNUAL_GROWTH_RATE;
use value_engine_core::core::assumptions::DEFAULT_AVG_DATA_BREACH_COST;
use value_engine_core::core::assumptions::DEFAULT_AVG_SUPPORT_TICKET_COST;
use value_engine_core::core::assumptions::DEFAULT_PROJECTION_YEARS;
use value_engine_core::core::assumptions::DEFAULT_REALIZATION_RAMP;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "value-engine.toml";
/// Environment variable overriding the configuration path.
pub const CONFIG_ENV_VAR: &str = "VALUE_ENGINE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Value engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueEngineConfig {
    /// Assumption set used for seeding and projection.
    #[serde(default)]
    pub assumptions: AssumptionsConfig,
    /// Platform spend figures used for ROI and investment.
    #[serde(default)]
    pub spend: SpendConfig,
}

impl ValueEngineConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// When neither a path nor the environment variable is given and the
    /// default file does not exist, the built-in defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bytes exceed the size limit, are not
    /// UTF-8, fail to parse, or fail validation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assumptions
            .to_assumptions()
            .validate()
            .map_err(|err| ConfigError::Invalid(format!("assumptions: {err}")))?;
        self.spend.validate()
    }

    /// Returns the engine assumption snapshot.
    #[must_use]
    pub fn assumptions(&self) -> Assumptions {
        self.assumptions.to_assumptions()
    }
}

/// `[assumptions]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssumptionsConfig {
    /// Number of projected years.
    pub projection_years: u32,
    /// Adoption ramp per year.
    pub realization_ramp: Vec<f64>,
    /// Compound annual growth rate.
    pub annual_growth_rate: f64,
    /// Benchmark cost of a data breach.
    pub avg_data_breach_cost: f64,
    /// Benchmark cost of a support ticket.
    pub avg_support_ticket_cost: f64,
    /// `[assumptions.hourly_rates]` table.
    pub hourly_rates: HourlyRatesConfig,
    /// `[assumptions.task_minutes]` table.
    pub task_minutes: TaskMinutesConfig,
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            projection_years: DEFAULT_PROJECTION_YEARS,
            realization_ramp: DEFAULT_REALIZATION_RAMP.to_vec(),
            annual_growth_rate: DEFAULT_ANNUAL_GROWTH_RATE,
            avg_data_breach_cost: DEFAULT_AVG_DATA_BREACH_COST,
            avg_support_ticket_cost: DEFAULT_AVG_SUPPORT_TICKET_COST,
            hourly_rates: HourlyRatesConfig::default(),
            task_minutes: TaskMinutesConfig::default(),
        }
    }
}

impl AssumptionsConfig {
    /// Converts the table into the engine's assumption snapshot.
    #[must_use]
    pub fn to_assumptions(&self) -> Assumptions {
        Assumptions {
            hourly_rates: self.hourly_rates.into(),
            task_minutes: self.task_minutes.into(),
            projection_years: self.projection_years,
            realization_ramp: self.realization_ramp.clone(),
            annual_growth_rate: self.annual_growth_rate,
            avg_data_breach_cost: self.avg_data_breach_cost,
            avg_support_ticket_cost: self.avg_support_ticket_cost,
        }
    }
}

/// `[assumptions.hourly_rates]` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HourlyRatesConfig {
    /// Basic/administrative rate.
    pub basic: f64,
    /// Operations rate.
    pub operations: f64,
    /// Engineering rate.
    pub engineering: f64,
    /// Executive rate.
    pub executive: f64,
}

impl Default for HourlyRatesConfig {
    fn default() -> Self {
        let rates = HourlyRates::default();
        Self {
            basic: rates.basic,
            operations: rates.operations,
            engineering: rates.engineering,
            executive: rates.executive,
        }
    }
}

impl From<HourlyRatesConfig> for HourlyRates {
    fn from(value: HourlyRatesConfig) -> Self {
        Self {
            basic: value.basic,
            operations: value.operations,
            engineering: value.engineering,
            executive: value.executive,
        }
    }
}

/// `[assumptions.task_minutes]` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskMinutesConfig {
    /// Simple task minutes.
    pub simple: f64,
    /// Medium task minutes.
    pub medium: f64,
    /// Complex task minutes.
    pub complex: f64,
}

impl Default for TaskMinutesConfig {
    fn default() -> Self {
        let minutes = TaskMinutes::default();
        Self {
            simple: minutes.simple,
            medium: minutes.medium,
            complex: minutes.complex,
        }
    }
}

impl From<TaskMinutesConfig> for TaskMinutes {
    fn from(value: TaskMinutesConfig) -> Self {
        Self {
            simple: value.simple,
            medium: value.medium,
            complex: value.complex,
        }
    }
}

/// `[spend]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpendConfig {
    /// Current annual platform spend.
    pub current: f64,
    /// Proposed annual platform spend.
    pub proposed: f64,
}

impl SpendConfig {
    /// Validates spend figures.
    fn validate(self) -> Result<(), ConfigError> {
        for (field, value) in [("spend.current", self.current), ("spend.proposed", self.proposed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a finite, non-negative number"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// The flag reports whether the path was named explicitly.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
