//! Pure heat index functions.

use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, Temperature, TemperatureUnit};

use super::constants::*;

/// Heat index in Fahrenheit for temperature `t` (Fahrenheit) and relative
/// humidity `r` (percent, e.g. `70.0` rather than `0.7`).
///
/// ```text
/// HI = -42.379 + 2.04901523*T + 10.14333127*R - 0.22475541*T*R
///      - 0.00683783*T^2 - 0.05481717*R^2 + 0.00122874*T^2*R
///      + 0.00085282*T*R^2 - 0.00000199*T^2*R^2
/// ```
///
/// NaN and infinite inputs propagate through the arithmetic.
pub fn heat_index_fahrenheit(t: f64, r: f64) -> f64 {
    let t2 = t * t;
    let r2 = r * r;
    C1 + C2 * t
        + C3 * r
        + C4 * t * r
        + C5 * t2
        + C6 * r2
        + C7 * t2 * r
        + C8 * t * r2
        + C9 * t2 * r2
}

/// Heat index in Celsius for a temperature in Celsius.
///
/// Converts to Fahrenheit, evaluates the regression, and converts back.
pub fn heat_index_celsius(temperature_c: f64, humidity_pct: f64) -> f64 {
    fahrenheit_to_celsius(heat_index_fahrenheit(
        celsius_to_fahrenheit(temperature_c),
        humidity_pct,
    ))
}

/// Heat index for a tagged temperature, expressed in `output`.
pub fn heat_index(
    temperature: Temperature,
    humidity_pct: f64,
    output: TemperatureUnit,
) -> Temperature {
    let hi_f = heat_index_fahrenheit(temperature.to_fahrenheit(), humidity_pct);
    Temperature::fahrenheit(hi_f).in_unit(output)
}

/// Whether the inputs fall inside the region where the regression is accurate.
///
/// Advisory only: the heat index can still be computed outside it.
pub fn is_within_valid_domain(temperature_c: f64, humidity_pct: f64) -> bool {
    temperature_c >= MIN_VALID_TEMPERATURE_C && humidity_pct >= MIN_VALID_HUMIDITY_PCT
}
