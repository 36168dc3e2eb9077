//! Input form: temperature and humidity fields plus the result line.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use heat_index::{HeatIndexAssessment, InputError, InputPolicy, DOMAIN_WARNING};

use crate::assessment::CurrentAssessment;
use crate::settings::{CalculatorInputs, CalculatorSettings};
use crate::settings_panel::SettingsPanelVisible;
use crate::theme::{risk_color, ERROR_COLOR, MUTED_TEXT, RESULT_COLOR, WARNING_COLOR};

const OUTSIDE_DOMAIN_CAVEAT: &str =
    "Outside the accurate range (T ≥ 26.7°C, RH ≥ 40%): value is approximate.";

pub fn form_panel_ui(
    mut contexts: EguiContexts,
    mut inputs: ResMut<CalculatorInputs>,
    settings: Res<CalculatorSettings>,
    current: Res<CurrentAssessment>,
    mut settings_visible: ResMut<SettingsPanelVisible>,
) {
    // Edit a copy so change detection only fires on real edits.
    let mut edited = *inputs;

    egui::Window::new("Heat Index Calculator (Feels Like Temperature)")
        .default_pos([16.0, 16.0])
        .default_width(360.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Enter the temperature in °C and relative humidity in % below.");
            ui.add_space(6.0);

            input_fields(ui, &mut edited, &settings.0.input);

            ui.separator();

            match &current.0 {
                None => {
                    ui.label(egui::RichText::new("Calculating...").color(MUTED_TEXT));
                }
                Some(Err(e)) => show_error(ui, e),
                Some(Ok(a)) => show_result(ui, a, &settings),
            }

            ui.add_space(6.0);
            if ui.small_button("Settings [F9]").clicked() {
                settings_visible.0 = !settings_visible.0;
            }
        });

    if edited != *inputs {
        *inputs = edited;
    }
}

/// Temperature and humidity fields. Dragging stays within the configured
/// bounds, but values already outside them are left for the input policy.
fn input_fields(ui: &mut egui::Ui, inputs: &mut CalculatorInputs, policy: &InputPolicy) {
    let t = policy.temperature_bounds;
    let h = policy.humidity_bounds;

    egui::Grid::new("heat_index_inputs")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Temperature (°C)");
            ui.add(
                egui::DragValue::new(&mut inputs.temperature_c)
                    .range(t.min..=t.max)
                    .clamp_existing_to_range(false)
                    .speed(0.1)
                    .fixed_decimals(1),
            );
            ui.end_row();

            ui.label("Relative Humidity (%)");
            ui.add(
                egui::DragValue::new(&mut inputs.humidity)
                    .range(h.min..=h.max)
                    .clamp_existing_to_range(false)
                    .speed(0.5)
                    .fixed_decimals(1),
            );
            ui.end_row();
        });
}

fn show_error(ui: &mut egui::Ui, error: &InputError) {
    ui.label(egui::RichText::new(format!("⚠ {error}")).color(ERROR_COLOR));
}

fn show_result(ui: &mut egui::Ui, a: &HeatIndexAssessment, settings: &CalculatorSettings) {
    let Some(value) = a.display_value(&settings.0) else {
        ui.label(egui::RichText::new(format!("⚠ {DOMAIN_WARNING}")).color(WARNING_COLOR));
        return;
    };

    ui.label(
        egui::RichText::new(format!("Heat Index (Feels Like): {value}"))
            .strong()
            .size(18.0)
            .color(RESULT_COLOR),
    );

    if !a.within_valid_domain {
        ui.label(
            egui::RichText::new(OUTSIDE_DOMAIN_CAVEAT)
                .small()
                .color(WARNING_COLOR),
        );
    }

    ui.horizontal(|ui| {
        ui.label("Risk:");
        ui.label(
            egui::RichText::new(a.risk.label())
                .strong()
                .color(risk_color(a.risk)),
        );
    });
    ui.label(
        egui::RichText::new(a.risk.description())
            .small()
            .color(MUTED_TEXT),
    );

    if a.inputs.temperature_clamped || a.inputs.humidity_clamped {
        ui.label(
            egui::RichText::new(format!(
                "Inputs clamped to {:.1}°C / {:.1}%",
                a.inputs.temperature_c, a.inputs.humidity
            ))
            .small()
            .color(MUTED_TEXT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one frame of `input_fields` over `inputs` and return the result.
    fn one_frame(inputs: CalculatorInputs, policy: &InputPolicy) -> CalculatorInputs {
        let ctx = egui::Context::default();
        let mut edited = inputs;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                input_fields(ui, &mut edited, policy);
            });
        });
        edited
    }

    #[test]
    fn test_fields_keep_out_of_range_values() {
        let policy = InputPolicy::default();
        let inputs = CalculatorInputs::new(75.0, 120.0);
        assert_eq!(one_frame(inputs, &policy), inputs);

        let inputs = CalculatorInputs::new(-10.0, -5.0);
        assert_eq!(one_frame(inputs, &policy), inputs);
    }

    #[test]
    fn test_fields_keep_in_range_values() {
        let inputs = CalculatorInputs::new(32.0, 70.0);
        assert_eq!(one_frame(inputs, &InputPolicy::default()), inputs);
    }
}
