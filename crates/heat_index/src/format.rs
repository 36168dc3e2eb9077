use crate::units::TemperatureUnit;

/// Decimal places used for displayed heat index values.
pub const DEFAULT_DECIMALS: usize = 1;

/// Render a temperature for display, e.g. `38.3°C`.
pub fn format_temperature(value: f64, unit: TemperatureUnit, decimals: usize) -> String {
    format!("{value:.decimals$}{}", unit.symbol())
}
