//! Temperature units and the affine Celsius/Fahrenheit conversions.

use serde::{Deserialize, Serialize};

/// Convert degrees Celsius to degrees Fahrenheit.
///
/// Defined for every real input, including values outside any physical range.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius.
///
/// Algebraic inverse of [`celsius_to_fahrenheit`]; a round trip only differs
/// from the input by floating-point rounding.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    /// Suffix used when printing a value, e.g. `°C`.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Human-readable name for display in the UI.
    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }
}

/// A temperature value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub const fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Celsius,
        }
    }

    pub const fn fahrenheit(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Fahrenheit,
        }
    }

    pub fn to_celsius(self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(self.value),
        }
    }

    pub fn to_fahrenheit(self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => celsius_to_fahrenheit(self.value),
            TemperatureUnit::Fahrenheit => self.value,
        }
    }

    /// Re-express this temperature in `unit`. Same-unit requests return `self`
    /// untouched, so no rounding is introduced.
    pub fn in_unit(self, unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Celsius => Self::celsius(self.to_celsius()),
            TemperatureUnit::Fahrenheit => Self::fahrenheit(self.to_fahrenheit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        // -40 is the crossover point of the two scales
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let mut c = -273.15;
        while c <= 1000.0 {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!(
                (back - c).abs() < 1e-9,
                "round trip of {c} drifted to {back}"
            );
            c += 0.37;
        }
    }

    #[test]
    fn test_round_trip_large_magnitudes() {
        for c in [-1.0e6, -12345.678, 1.0e-9, 98765.4321, 1.0e6] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            let tolerance = 1e-9 * c.abs().max(1.0);
            assert!((back - c).abs() <= tolerance, "{c} -> {back}");
        }
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(celsius_to_fahrenheit(f64::NAN).is_nan());
        assert_eq!(celsius_to_fahrenheit(f64::INFINITY), f64::INFINITY);
        assert_eq!(fahrenheit_to_celsius(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_temperature_in_unit() {
        let body = Temperature::celsius(37.0);
        let f = body.in_unit(TemperatureUnit::Fahrenheit);
        assert_eq!(f.unit, TemperatureUnit::Fahrenheit);
        assert!((f.value - 98.6).abs() < 1e-9);

        let same = body.in_unit(TemperatureUnit::Celsius);
        assert_eq!(same, body);

        assert!((Temperature::fahrenheit(50.0).to_celsius() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_symbols() {
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unit_serde_names() {
        let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(json, "\"fahrenheit\"");
        let unit: TemperatureUnit = serde_json::from_str("\"celsius\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Celsius);
    }
}
