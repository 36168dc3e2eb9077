//! Regression coefficients and validity thresholds.
//!
//! The coefficients must stay exactly as published; rounding any of them
//! shifts the output by whole degrees at high humidity.

pub(super) const C1: f64 = -42.379;
pub(super) const C2: f64 = 2.049_015_23;
pub(super) const C3: f64 = 10.143_331_27;
pub(super) const C4: f64 = -0.224_755_41;
pub(super) const C5: f64 = -6.837_83e-3;
pub(super) const C6: f64 = -5.481_717e-2;
pub(super) const C7: f64 = 1.228_74e-3;
pub(super) const C8: f64 = 8.528_2e-4;
pub(super) const C9: f64 = -1.99e-6;

/// Lowest temperature (Celsius) at which the regression is considered accurate.
pub const MIN_VALID_TEMPERATURE_C: f64 = 26.7;

/// Lowest relative humidity (percent) at which the regression is considered accurate.
pub const MIN_VALID_HUMIDITY_PCT: f64 = 40.0;
