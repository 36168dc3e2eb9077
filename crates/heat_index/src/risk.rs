use serde::{Deserialize, Serialize};

/// NWS advisory band for a heat index value.
///
/// Thresholds are in Fahrenheit because that is how the bands are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatRisk {
    /// Below 80F: no heat advisory.
    #[default]
    Normal,
    /// 80-90F: fatigue possible with prolonged exposure.
    Caution,
    /// 90-103F: heat cramps and exhaustion possible.
    ExtremeCaution,
    /// 103-125F: heat exhaustion likely, heat stroke possible.
    Danger,
    /// 125F and above: heat stroke highly likely.
    ExtremeDanger,
}

const CAUTION_F: f64 = 80.0;
const EXTREME_CAUTION_F: f64 = 90.0;
const DANGER_F: f64 = 103.0;
const EXTREME_DANGER_F: f64 = 125.0;

impl HeatRisk {
    /// Classify a heat index in Fahrenheit. NaN falls through to `Normal`.
    pub fn from_fahrenheit(heat_index_f: f64) -> Self {
        if heat_index_f >= EXTREME_DANGER_F {
            HeatRisk::ExtremeDanger
        } else if heat_index_f >= DANGER_F {
            HeatRisk::Danger
        } else if heat_index_f >= EXTREME_CAUTION_F {
            HeatRisk::ExtremeCaution
        } else if heat_index_f >= CAUTION_F {
            HeatRisk::Caution
        } else {
            HeatRisk::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeatRisk::Normal => "Normal",
            HeatRisk::Caution => "Caution",
            HeatRisk::ExtremeCaution => "Extreme Caution",
            HeatRisk::Danger => "Danger",
            HeatRisk::ExtremeDanger => "Extreme Danger",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HeatRisk::Normal => "No heat-related risk expected.",
            HeatRisk::Caution => "Fatigue possible with prolonged exposure and activity.",
            HeatRisk::ExtremeCaution => {
                "Heat cramps and heat exhaustion possible with prolonged exposure."
            }
            HeatRisk::Danger => {
                "Heat cramps or exhaustion likely; heat stroke possible with prolonged exposure."
            }
            HeatRisk::ExtremeDanger => "Heat stroke highly likely.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band_edges() {
        assert_eq!(HeatRisk::from_fahrenheit(79.99), HeatRisk::Normal);
        assert_eq!(HeatRisk::from_fahrenheit(80.0), HeatRisk::Caution);
        assert_eq!(HeatRisk::from_fahrenheit(89.99), HeatRisk::Caution);
        assert_eq!(HeatRisk::from_fahrenheit(90.0), HeatRisk::ExtremeCaution);
        assert_eq!(HeatRisk::from_fahrenheit(102.9), HeatRisk::ExtremeCaution);
        assert_eq!(HeatRisk::from_fahrenheit(103.0), HeatRisk::Danger);
        assert_eq!(HeatRisk::from_fahrenheit(124.9), HeatRisk::Danger);
        assert_eq!(HeatRisk::from_fahrenheit(125.0), HeatRisk::ExtremeDanger);
        assert_eq!(HeatRisk::from_fahrenheit(200.0), HeatRisk::ExtremeDanger);
    }

    #[test]
    fn test_risk_nan_is_normal() {
        assert_eq!(HeatRisk::from_fahrenheit(f64::NAN), HeatRisk::Normal);
    }

    #[test]
    fn test_risk_labels_distinct() {
        let all = [
            HeatRisk::Normal,
            HeatRisk::Caution,
            HeatRisk::ExtremeCaution,
            HeatRisk::Danger,
            HeatRisk::ExtremeDanger,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.description().is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
