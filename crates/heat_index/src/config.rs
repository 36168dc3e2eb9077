//! Calculator configuration.
//!
//! Stored as JSON. Every field has a default, so a partial file (or `{}`)
//! is a valid configuration.

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::curves::{CurveSweep, MAX_SWEEP_POINTS};
use crate::format::DEFAULT_DECIMALS;
use crate::policy::InputPolicy;
use crate::units::TemperatureUnit;

/// Largest accepted `decimals` setting.
pub const MAX_DECIMALS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Input bounds and out-of-range handling.
    pub input: InputPolicy,
    /// Unit used for the displayed heat index and the chart's value axis.
    pub display_unit: TemperatureUnit,
    /// Decimal places for displayed values.
    pub decimals: usize,
    /// Show the number (with a caveat) when inputs are outside the validity
    /// domain instead of only the warning.
    pub show_value_outside_domain: bool,
    /// Initial form values.
    pub default_temperature_c: f64,
    pub default_humidity: f64,
    pub sweep: CurveSweep,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            input: InputPolicy::default(),
            display_unit: TemperatureUnit::Celsius,
            decimals: DEFAULT_DECIMALS,
            show_value_outside_domain: false,
            default_temperature_c: 32.0,
            default_humidity: 70.0,
            sweep: CurveSweep::default(),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    Io(std::io::Error),
    /// The file is not valid JSON for this schema.
    Parse(String),
    /// The file parsed but holds unusable values.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

// =============================================================================
// Load / save
// =============================================================================

impl CalculatorConfig {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.temperature_bounds.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "temperature bounds [{}, {}] must be finite with min <= max",
                self.input.temperature_bounds.min, self.input.temperature_bounds.max
            )));
        }
        if !self.input.humidity_bounds.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "humidity bounds [{}, {}] must be finite with min <= max",
                self.input.humidity_bounds.min, self.input.humidity_bounds.max
            )));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        if !self.default_temperature_c.is_finite() || !self.default_humidity.is_finite() {
            return Err(ConfigError::Invalid(
                "default inputs must be finite".to_string(),
            ));
        }

        let sweep = &self.sweep;
        if !(sweep.start_c.is_finite() && sweep.end_c.is_finite()) || sweep.start_c > sweep.end_c {
            return Err(ConfigError::Invalid(format!(
                "sweep range [{}, {}] must be finite with start <= end",
                sweep.start_c, sweep.end_c
            )));
        }
        if !(sweep.step_c.is_finite() && sweep.step_c > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sweep step must be positive, got {}",
                sweep.step_c
            )));
        }
        let points = ((sweep.end_c - sweep.start_c) / sweep.step_c).floor() + 1.0;
        if points > MAX_SWEEP_POINTS as f64 {
            return Err(ConfigError::Invalid(format!(
                "sweep needs {points} samples, at most {MAX_SWEEP_POINTS} allowed"
            )));
        }
        if sweep.humidity_levels.is_empty() {
            return Err(ConfigError::Invalid(
                "sweep needs at least one humidity level".to_string(),
            ));
        }
        if let Some(bad) = sweep.humidity_levels.iter().find(|h| !h.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "humidity level {bad} is not finite"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validate, then write atomically: a crash mid-save leaves the previous
    /// file intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.validate()?;
        let json = self.to_json()?;
        atomic_write(path.as_ref(), json.as_bytes())?;
        Ok(())
    }
}

/// Write to `{path}.tmp`, sync, then rename over `path`.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(tmp_path, path)?;
    Ok(())
}
