//! Heat index ("feels like" temperature) computation.
//!
//! The core is [`calculator`]: Celsius/Fahrenheit conversion, the NWS
//! regression, and the validity-domain check. The remaining modules build on it
//! for the presentation layer: input policy, assessments, chart curves,
//! formatting, configuration, and the headless JSON protocol. Nothing here
//! depends on a UI framework.

pub mod assessment;
pub mod calculator;
pub mod config;
pub mod curves;
pub mod format;
pub mod policy;
pub mod protocol;
pub mod risk;
pub mod units;

pub use assessment::{assess, HeatIndexAssessment, DOMAIN_WARNING};
pub use calculator::{
    heat_index, heat_index_celsius, heat_index_fahrenheit, is_within_valid_domain,
    MIN_VALID_HUMIDITY_PCT, MIN_VALID_TEMPERATURE_C,
};
pub use config::{CalculatorConfig, ConfigError};
pub use curves::{humidity_curves, CurvePoint, CurveSweep, HumidityCurve, HumidityCurveSet};
pub use format::format_temperature;
pub use policy::{InputBounds, InputError, InputField, InputPolicy, RangePolicy, SanitizedInputs};
pub use risk::HeatRisk;
pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius, Temperature, TemperatureUnit};
