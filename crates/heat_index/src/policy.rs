//! Input range policy.
//!
//! The regression itself accepts any real number. Whether a temperature
//! outside [0, 60] C or a humidity outside [0, 100] % should be passed
//! through, clamped, or rejected is decided here, per field, by configuration.
//! Non-finite inputs are always rejected at this layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What to do with a finite value that falls outside its configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Use the value as entered.
    #[default]
    PassThrough,
    /// Snap the value to the nearest bound.
    Clamp,
    /// Refuse to assess.
    Reject,
}

impl RangePolicy {
    pub const ALL: [RangePolicy; 3] = [
        RangePolicy::PassThrough,
        RangePolicy::Clamp,
        RangePolicy::Reject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RangePolicy::PassThrough => "Pass through",
            RangePolicy::Clamp => "Clamp",
            RangePolicy::Reject => "Reject",
        }
    }
}

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
}

impl InputBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Both ends finite and `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Which input a policy decision or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Temperature,
    Humidity,
}

impl InputField {
    pub fn name(self) -> &'static str {
        match self {
            InputField::Temperature => "temperature",
            InputField::Humidity => "relative humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            InputField::Temperature => "°C",
            InputField::Humidity => "%",
        }
    }
}

/// Bounds and per-field policies applied before assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPolicy {
    /// Temperature range in Celsius (default 0-60).
    pub temperature_bounds: InputBounds,
    /// Relative humidity range in percent (default 0-100).
    pub humidity_bounds: InputBounds,
    pub temperature: RangePolicy,
    pub humidity: RangePolicy,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            temperature_bounds: InputBounds::new(0.0, 60.0),
            humidity_bounds: InputBounds::new(0.0, 100.0),
            temperature: RangePolicy::PassThrough,
            humidity: RangePolicy::PassThrough,
        }
    }
}

/// Inputs after the policy has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanitizedInputs {
    pub temperature_c: f64,
    pub humidity: f64,
    pub temperature_clamped: bool,
    pub humidity_clamped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// NaN or infinite input.
    NonFinite { field: InputField, value: f64 },
    /// Finite input outside its bounds under `RangePolicy::Reject`.
    OutOfRange {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl InputError {
    pub fn field(&self) -> InputField {
        match self {
            InputError::NonFinite { field, .. } | InputError::OutOfRange { field, .. } => *field,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonFinite { field, value } => {
                write!(f, "{} must be a finite number, got {value}", field.name())
            }
            InputError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                let unit = field.unit();
                write!(
                    f,
                    "{} {value}{unit} is outside the accepted range {min}{unit} to {max}{unit}",
                    field.name()
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

impl InputPolicy {
    /// Apply the bounds and policies to a raw pair of inputs.
    pub fn sanitize(
        &self,
        temperature_c: f64,
        humidity: f64,
    ) -> Result<SanitizedInputs, InputError> {
        let (temperature_c, temperature_clamped) = apply(
            InputField::Temperature,
            temperature_c,
            &self.temperature_bounds,
            self.temperature,
        )?;
        let (humidity, humidity_clamped) =
            apply(InputField::Humidity, humidity, &self.humidity_bounds, self.humidity)?;

        Ok(SanitizedInputs {
            temperature_c,
            humidity,
            temperature_clamped,
            humidity_clamped,
        })
    }
}

fn apply(
    field: InputField,
    value: f64,
    bounds: &InputBounds,
    policy: RangePolicy,
) -> Result<(f64, bool), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field, value });
    }
    if bounds.contains(value) {
        return Ok((value, false));
    }
    match policy {
        RangePolicy::PassThrough => Ok((value, false)),
        RangePolicy::Clamp => Ok((bounds.clamp(value), true)),
        RangePolicy::Reject => Err(InputError::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(temperature: RangePolicy, humidity: RangePolicy) -> InputPolicy {
        InputPolicy {
            temperature,
            humidity,
            ..Default::default()
        }
    }

    #[test]
    fn test_in_range_values_untouched() {
        for p in RangePolicy::ALL {
            let s = policy(p, p).sanitize(32.0, 70.0).unwrap();
            assert_eq!(s.temperature_c, 32.0);
            assert_eq!(s.humidity, 70.0);
            assert!(!s.temperature_clamped && !s.humidity_clamped);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let strict = policy(RangePolicy::Reject, RangePolicy::Reject);
        assert!(strict.sanitize(0.0, 0.0).is_ok());
        assert!(strict.sanitize(60.0, 100.0).is_ok());
    }

    #[test]
    fn test_pass_through_keeps_out_of_range() {
        let s = InputPolicy::default().sanitize(75.0, 120.0).unwrap();
        assert_eq!(s.temperature_c, 75.0);
        assert_eq!(s.humidity, 120.0);
        assert!(!s.humidity_clamped);
    }

    #[test]
    fn test_clamp_snaps_to_bounds() {
        let p = policy(RangePolicy::Clamp, RangePolicy::Clamp);
        let s = p.sanitize(-5.0, 130.0).unwrap();
        assert_eq!(s.temperature_c, 0.0);
        assert_eq!(s.humidity, 100.0);
        assert!(s.temperature_clamped);
        assert!(s.humidity_clamped);

        let s = p.sanitize(61.5, -3.0).unwrap();
        assert_eq!(s.temperature_c, 60.0);
        assert_eq!(s.humidity, 0.0);
    }

    #[test]
    fn test_reject_reports_field_and_bounds() {
        let p = policy(RangePolicy::PassThrough, RangePolicy::Reject);
        let err = p.sanitize(30.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: InputField::Humidity,
                value: -1.0,
                min: 0.0,
                max: 100.0,
            }
        );
        let msg = format!("{err}");
        assert!(msg.contains("relative humidity"), "got: {msg}");
        assert!(msg.contains("100%"), "got: {msg}");
    }

    #[test]
    fn test_policies_are_independent() {
        let p = policy(RangePolicy::Reject, RangePolicy::Clamp);
        assert!(p.sanitize(30.0, 150.0).is_ok());
        assert_eq!(
            p.sanitize(65.0, 50.0).unwrap_err().field(),
            InputField::Temperature
        );
    }

    #[test]
    fn test_non_finite_rejected_under_every_policy() {
        for rp in RangePolicy::ALL {
            let p = policy(rp, rp);
            assert!(matches!(
                p.sanitize(f64::NAN, 50.0),
                Err(InputError::NonFinite {
                    field: InputField::Temperature,
                    ..
                })
            ));
            assert!(matches!(
                p.sanitize(30.0, f64::INFINITY),
                Err(InputError::NonFinite {
                    field: InputField::Humidity,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_non_finite_message() {
        let err = InputPolicy::default()
            .sanitize(f64::NEG_INFINITY, 50.0)
            .unwrap_err();
        assert!(format!("{err}").contains("finite"));
    }

    #[test]
    fn test_bounds_well_formed() {
        assert!(InputBounds::new(0.0, 60.0).is_well_formed());
        assert!(InputBounds::new(5.0, 5.0).is_well_formed());
        assert!(!InputBounds::new(10.0, 0.0).is_well_formed());
        assert!(!InputBounds::new(f64::NAN, 1.0).is_well_formed());
    }
}
