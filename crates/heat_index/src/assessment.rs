//! Full heat index assessment for one pair of form inputs.
//!
//! Runs the input policy, the validity-domain check and the
//! Celsius -> Fahrenheit -> heat index -> Celsius round trip. The value is
//! always computed; `within_valid_domain` only tells the caller whether to
//! trust it.

use serde::{Deserialize, Serialize};

use crate::calculator::{heat_index_fahrenheit, is_within_valid_domain};
use crate::config::CalculatorConfig;
use crate::format::format_temperature;
use crate::policy::{InputError, SanitizedInputs};
use crate::risk::HeatRisk;
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit};

/// Message shown in place of a result outside the validity domain.
pub const DOMAIN_WARNING: &str = "Formula is only accurate for T ≥ 26.7°C and RH ≥ 40%.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatIndexAssessment {
    pub inputs: SanitizedInputs,
    pub heat_index_c: f64,
    pub heat_index_f: f64,
    pub within_valid_domain: bool,
    pub risk: HeatRisk,
}

impl HeatIndexAssessment {
    pub fn heat_index_in(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.heat_index_c,
            TemperatureUnit::Fahrenheit => self.heat_index_f,
        }
    }

    /// Formatted value for display, or `None` when the form should show
    /// [`DOMAIN_WARNING`] instead.
    pub fn display_value(&self, config: &CalculatorConfig) -> Option<String> {
        if !self.within_valid_domain && !config.show_value_outside_domain {
            return None;
        }
        Some(format_temperature(
            self.heat_index_in(config.display_unit),
            config.display_unit,
            config.decimals,
        ))
    }
}

/// Assess raw form inputs under `config`.
pub fn assess(
    temperature_c: f64,
    humidity: f64,
    config: &CalculatorConfig,
) -> Result<HeatIndexAssessment, InputError> {
    let inputs = config.input.sanitize(temperature_c, humidity)?;
    let within_valid_domain = is_within_valid_domain(inputs.temperature_c, inputs.humidity);

    let temperature_f = celsius_to_fahrenheit(inputs.temperature_c);
    let heat_index_f = heat_index_fahrenheit(temperature_f, inputs.humidity);
    let heat_index_c = fahrenheit_to_celsius(heat_index_f);

    Ok(HeatIndexAssessment {
        inputs,
        heat_index_c,
        heat_index_f,
        within_valid_domain,
        risk: HeatRisk::from_fahrenheit(heat_index_f),
    })
}
