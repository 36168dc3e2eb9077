//! ECS resources holding the calculator configuration and the form inputs.

use std::path::PathBuf;

use bevy::prelude::*;
use heat_index::CalculatorConfig;

/// Active configuration. Edited in place by the settings panel.
#[derive(Resource, Debug, Clone, Default)]
pub struct CalculatorSettings(pub CalculatorConfig);

/// Where "Save settings" writes to. `None` disables saving.
#[derive(Resource, Debug, Clone, Default)]
pub struct SettingsPath(pub Option<PathBuf>);

/// Raw values from the input form (Celsius and percent).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CalculatorInputs {
    pub temperature_c: f64,
    pub humidity: f64,
}

impl CalculatorInputs {
    pub fn new(temperature_c: f64, humidity: f64) -> Self {
        Self {
            temperature_c,
            humidity,
        }
    }

    /// Form defaults taken from the configuration.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.default_temperature_c, config.default_humidity)
    }
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_default_to_config_defaults() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs, CalculatorInputs::new(32.0, 70.0));
    }

    #[test]
    fn test_inputs_follow_custom_config() {
        let config = CalculatorConfig {
            default_temperature_c: 28.5,
            default_humidity: 55.0,
            ..Default::default()
        };
        assert_eq!(
            CalculatorInputs::from_config(&config),
            CalculatorInputs::new(28.5, 55.0)
        );
    }
}
