//! JSON-lines protocol for the `--headless` mode.
//!
//! Each line of stdin is one [`CalculatorCommand`] tagged by `"cmd"`; each
//! line of stdout is one [`CalculatorResponse`] carrying `protocol_version`
//! and a `"type"` tag. Dispatch is pure so it can be tested here; the I/O
//! loop lives in the app crate.

use serde::{Deserialize, Serialize};

use crate::assessment::{assess, HeatIndexAssessment, DOMAIN_WARNING};
use crate::calculator::{heat_index_fahrenheit, is_within_valid_domain};
use crate::config::CalculatorConfig;
use crate::curves::{humidity_curves, HumidityCurveSet};
use crate::units::{Temperature, TemperatureUnit};

pub const PROTOCOL_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Commands (stdin -> calculator)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum CalculatorCommand {
    /// Full assessment of a Celsius temperature and humidity under the active config.
    Assess { temperature_c: f64, humidity: f64 },
    /// Convert `value` from `from` into the other unit.
    Convert { value: f64, from: TemperatureUnit },
    /// Raw regression, no policy or domain check.
    HeatIndexF { temperature_f: f64, humidity: f64 },
    /// Validity-domain check only.
    Domain { temperature_c: f64, humidity: f64 },
    /// Chart curves for the configured sweep and display unit.
    Curves,
    /// Echo the active configuration.
    Config,
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (calculator -> stdout)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CalculatorResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    Ready,
    Assessment {
        assessment: HeatIndexAssessment,
        /// Formatted value, absent when `warning` is set.
        display: Option<String>,
        warning: Option<String>,
    },
    Converted { value: f64, unit: TemperatureUnit },
    HeatIndex { heat_index_f: f64 },
    Domain { within_valid_domain: bool },
    Curves { curves: HumidityCurveSet },
    Config { config: CalculatorConfig },
    Error { message: String },
    Goodbye,
}

pub fn make_response(payload: ResponsePayload) -> CalculatorResponse {
    CalculatorResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Parse one line of input. Parse failures become an `error` response.
pub fn parse_command(line: &str) -> Result<CalculatorCommand, CalculatorResponse> {
    serde_json::from_str(line).map_err(|e| {
        make_response(ResponsePayload::Error {
            message: format!("Parse error: {e}"),
        })
    })
}

pub fn process_command(cmd: CalculatorCommand, config: &CalculatorConfig) -> CalculatorResponse {
    let payload = match cmd {
        CalculatorCommand::Assess {
            temperature_c,
            humidity,
        } => match assess(temperature_c, humidity, config) {
            Ok(assessment) => {
                let display = assessment.display_value(config);
                let warning = (!assessment.within_valid_domain).then(|| DOMAIN_WARNING.to_string());
                ResponsePayload::Assessment {
                    assessment,
                    display,
                    warning,
                }
            }
            Err(e) => ResponsePayload::Error {
                message: e.to_string(),
            },
        },
        CalculatorCommand::Convert { value, from } => {
            let target = match from {
                TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
                TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
            };
            let converted = Temperature { value, unit: from }.in_unit(target);
            ResponsePayload::Converted {
                value: converted.value,
                unit: converted.unit,
            }
        }
        CalculatorCommand::HeatIndexF {
            temperature_f,
            humidity,
        } => ResponsePayload::HeatIndex {
            heat_index_f: heat_index_fahrenheit(temperature_f, humidity),
        },
        CalculatorCommand::Domain {
            temperature_c,
            humidity,
        } => ResponsePayload::Domain {
            within_valid_domain: is_within_valid_domain(temperature_c, humidity),
        },
        CalculatorCommand::Curves => ResponsePayload::Curves {
            curves: humidity_curves(&config.sweep, config.display_unit),
        },
        CalculatorCommand::Config => ResponsePayload::Config {
            config: config.clone(),
        },
        CalculatorCommand::Quit => ResponsePayload::Goodbye,
    };
    make_response(payload)
}

/// Serialize a response as a single JSON line.
pub fn to_line(response: &CalculatorResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        let message = serde_json::Value::String(format!("serialize error: {e}"));
        format!(r#"{{"protocol_version":{PROTOCOL_VERSION},"type":"error","message":{message}}}"#)
    })
}
