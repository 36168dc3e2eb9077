//! Derives the displayed assessment from the form inputs.
//!
//! `refresh_assessment` recomputes only when the inputs or the settings
//! changed, so the egui panels read a ready-made result every frame.

use bevy::prelude::*;
use heat_index::{assess, HeatIndexAssessment, InputError};

use crate::settings::{CalculatorInputs, CalculatorSettings};

/// Latest assessment of `CalculatorInputs`. `None` until the first refresh.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentAssessment(pub Option<Result<HeatIndexAssessment, InputError>>);

impl CurrentAssessment {
    pub fn assessment(&self) -> Option<&HeatIndexAssessment> {
        self.0.as_ref().and_then(|r| r.as_ref().ok())
    }
}

pub fn refresh_assessment(
    inputs: Res<CalculatorInputs>,
    settings: Res<CalculatorSettings>,
    mut current: ResMut<CurrentAssessment>,
) {
    if current.0.is_some() && !inputs.is_changed() && !settings.is_changed() {
        return;
    }

    let result = assess(inputs.temperature_c, inputs.humidity, &settings.0);
    match &result {
        Ok(a) if a.within_valid_domain => debug!(
            "heat index {:.2}C ({:.2}F) for {}C / {}% RH",
            a.heat_index_c, a.heat_index_f, a.inputs.temperature_c, a.inputs.humidity
        ),
        Ok(a) => debug!(
            "inputs {}C / {}% RH outside validity domain",
            a.inputs.temperature_c, a.inputs.humidity
        ),
        Err(e) => warn!("inputs rejected: {e}"),
    }
    current.0 = Some(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use heat_index::{InputField, RangePolicy};

    fn test_app(inputs: CalculatorInputs, settings: CalculatorSettings) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(inputs)
            .insert_resource(settings)
            .init_resource::<CurrentAssessment>()
            .add_systems(Update, refresh_assessment);
        app.update();
        app
    }

    #[test]
    fn test_first_update_computes_assessment() {
        let app = test_app(CalculatorInputs::new(32.0, 70.0), CalculatorSettings::default());
        let current = app.world().resource::<CurrentAssessment>();
        let a = current.assessment().expect("assessment after first update");
        assert!(a.within_valid_domain);
        assert!((a.heat_index_c - 40.4).abs() < 0.05, "got {}", a.heat_index_c);
    }

    #[test]
    fn test_input_change_triggers_refresh() {
        let mut app = test_app(CalculatorInputs::new(32.0, 70.0), CalculatorSettings::default());

        app.world_mut().resource_mut::<CalculatorInputs>().temperature_c = 20.0;
        app.update();

        let current = app.world().resource::<CurrentAssessment>();
        let a = current.assessment().unwrap();
        assert_eq!(a.inputs.temperature_c, 20.0);
        assert!(!a.within_valid_domain);
    }

    #[test]
    fn test_settings_change_triggers_refresh() {
        let mut app = test_app(CalculatorInputs::new(30.0, 120.0), CalculatorSettings::default());
        assert!(app
            .world()
            .resource::<CurrentAssessment>()
            .assessment()
            .is_some());

        app.world_mut()
            .resource_mut::<CalculatorSettings>()
            .0
            .input
            .humidity = RangePolicy::Reject;
        app.update();

        let current = app.world().resource::<CurrentAssessment>();
        match &current.0 {
            Some(Err(e)) => assert_eq!(e.field(), InputField::Humidity),
            other => panic!("expected a humidity rejection, got {other:?}"),
        }
        assert!(current.assessment().is_none());
    }

    #[test]
    fn test_unchanged_inputs_keep_result() {
        let mut app = test_app(CalculatorInputs::new(35.0, 50.0), CalculatorSettings::default());
        let before = app.world().resource::<CurrentAssessment>().0;
        app.update();
        app.update();
        let after = app.world().resource::<CurrentAssessment>().0;
        assert_eq!(before, after);
    }
}
