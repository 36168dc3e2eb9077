//! Comparison chart: heat index against temperature, one line per humidity level.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use heat_index::humidity_curves;

use crate::drawing::{draw_line_chart, legend_item, ChartAxes, LineSeries};
use crate::settings::{CalculatorInputs, CalculatorSettings};
use crate::theme::curve_color;

const CHART_TITLE: &str = "Heat Index vs Temperature";
const CHART_WIDTH: f32 = 480.0;
const CHART_HEIGHT: f32 = 320.0;

pub fn chart_panel_ui(
    mut contexts: EguiContexts,
    settings: Res<CalculatorSettings>,
    inputs: Res<CalculatorInputs>,
) {
    let config = &settings.0;
    let set = humidity_curves(&config.sweep, config.display_unit);

    let count = set.curves.len();
    let series: Vec<LineSeries> = set
        .curves
        .iter()
        .enumerate()
        .map(|(i, curve)| LineSeries {
            points: curve
                .points
                .iter()
                .map(|p| [p.temperature_c, p.heat_index])
                .collect(),
            color: curve_color(i, count),
            label: curve.label(),
        })
        .collect();

    let y_label = format!("Heat Index ({})", set.unit.symbol());

    egui::Window::new("Heat Index Curve by Humidity")
        .default_pos([400.0, 16.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            if set.is_empty() {
                ui.label("No curves to draw.");
                return;
            }

            draw_line_chart(
                ui,
                &series,
                &ChartAxes {
                    title: CHART_TITLE,
                    x_label: "Temperature (°C)",
                    y_label: &y_label,
                    marker_x: Some(inputs.temperature_c),
                },
                CHART_WIDTH,
                CHART_HEIGHT,
            );

            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label("Relative Humidity:");
                for s in &series {
                    legend_item(ui, s.color, &s.label);
                }
            });
        });
}
