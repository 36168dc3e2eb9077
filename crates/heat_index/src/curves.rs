//! Heat index curves for the comparison chart.
//!
//! One curve per humidity level, each sampled over the same temperature sweep.
//! Curves are cheap to build and are regenerated on every render.

use serde::{Deserialize, Serialize};

use crate::calculator::heat_index;
use crate::units::{Temperature, TemperatureUnit};

/// Upper bound on samples per curve so a bad config can't allocate forever.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Temperature sweep (Celsius, end inclusive) crossed with humidity levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSweep {
    pub start_c: f64,
    pub end_c: f64,
    pub step_c: f64,
    pub humidity_levels: Vec<f64>,
}

impl Default for CurveSweep {
    fn default() -> Self {
        Self {
            start_c: 25.0,
            end_c: 44.0,
            step_c: 1.0,
            humidity_levels: vec![40.0, 50.0, 60.0, 70.0, 80.0, 90.0],
        }
    }
}

impl CurveSweep {
    /// Sample temperatures from `start_c` to `end_c` inclusive.
    ///
    /// A non-positive or non-finite step yields only the start point.
    pub fn temperatures(&self) -> Vec<f64> {
        if !(self.step_c.is_finite() && self.step_c > 0.0) || !self.end_c.is_finite() {
            return vec![self.start_c];
        }
        // Tolerate accumulated error so an end point like 44.0 is not dropped.
        let limit = self.end_c + self.step_c * 1e-9;
        (0..MAX_SWEEP_POINTS)
            .map(|i| self.start_c + i as f64 * self.step_c)
            .take_while(|&t| t <= limit)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub temperature_c: f64,
    pub heat_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityCurve {
    pub humidity: f64,
    pub points: Vec<CurvePoint>,
}

impl HumidityCurve {
    /// Legend text, e.g. `70% RH`.
    pub fn label(&self) -> String {
        format!("{}% RH", self.humidity)
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[1].heat_index >= w[0].heat_index)
    }
}

/// All curves of one chart, with heat index values in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityCurveSet {
    pub unit: TemperatureUnit,
    pub curves: Vec<HumidityCurve>,
}

impl HumidityCurveSet {
    /// `(temperature_c, humidity, heat_index)` triples, curve by curve.
    pub fn triples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.curves.iter().flat_map(|curve| {
            curve
                .points
                .iter()
                .map(move |p| (p.temperature_c, curve.humidity, p.heat_index))
        })
    }

    /// Smallest and largest heat index across every curve, ignoring non-finite values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.triples()
            .map(|(_, _, hi)| hi)
            .filter(|hi| hi.is_finite())
            .fold(None, |acc, hi| match acc {
                None => Some((hi, hi)),
                Some((lo, up)) => Some((lo.min(hi), up.max(hi))),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(|c| c.points.is_empty())
    }
}

/// Evaluate the heat index for every (temperature, humidity) pair of the sweep.
pub fn humidity_curves(sweep: &CurveSweep, unit: TemperatureUnit) -> HumidityCurveSet {
    let temperatures = sweep.temperatures();
    let curves = sweep
        .humidity_levels
        .iter()
        .map(|&humidity| HumidityCurve {
            humidity,
            points: temperatures
                .iter()
                .map(|&temperature_c| CurvePoint {
                    temperature_c,
                    heat_index: heat_index(Temperature::celsius(temperature_c), humidity, unit)
                        .value,
                })
                .collect(),
        })
        .collect();

    HumidityCurveSet { unit, curves }
}
