//! Resolves the configuration and initial form values before the app runs.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use heat_index::{CalculatorConfig, ConfigError};
use ui::{CalculatorInputs, CalculatorSettings, SettingsPath};

use crate::cli::CliArgs;

pub const CONFIG_ENV_VAR: &str = "FEELS_LIKE_CONFIG";

/// `--config` wins over the environment variable.
pub fn config_path(args: &CliArgs, env_value: Option<String>) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
}

/// Load the config at `path`, falling back to defaults. A missing file is
/// expected on first run; anything else is logged as a warning.
pub fn load_config(path: Option<&Path>) -> CalculatorConfig {
    let Some(path) = path else {
        return CalculatorConfig::default();
    };
    match CalculatorConfig::load(path) {
        Ok(config) => {
            info!("Loaded settings from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No settings at {}, using defaults", path.display());
            CalculatorConfig::default()
        }
        Err(e) => {
            warn!(
                "Could not load settings from {}: {e}; using defaults",
                path.display()
            );
            CalculatorConfig::default()
        }
    }
}

/// Form values from the config, overridden by any CLI values.
pub fn initial_inputs(config: &CalculatorConfig, args: &CliArgs) -> CalculatorInputs {
    let defaults = CalculatorInputs::from_config(config);
    CalculatorInputs::new(
        args.temperature.unwrap_or(defaults.temperature_c),
        args.humidity.unwrap_or(defaults.humidity),
    )
}

/// Insert settings, settings path and initial inputs into `app`.
pub fn insert_calculator_resources(app: &mut App, args: &CliArgs) {
    let path = config_path(args, std::env::var(CONFIG_ENV_VAR).ok());
    let config = load_config(path.as_deref());
    let inputs = initial_inputs(&config, args);
    app.insert_resource(inputs)
        .insert_resource(CalculatorSettings(config))
        .insert_resource(SettingsPath(path));
}
