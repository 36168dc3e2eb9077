use bevy_egui::{egui, EguiContexts};
use heat_index::HeatRisk;

pub(crate) const RESULT_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 210, 140);
pub(crate) const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(240, 190, 70);
pub(crate) const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(235, 90, 80);
pub(crate) const MUTED_TEXT: egui::Color32 = egui::Color32::from_gray(160);

// Warm dark palette: charcoal surfaces, ember accent.
const SURFACE: egui::Color32 = egui::Color32::from_rgb(36, 34, 40);
const SURFACE_RAISED: egui::Color32 = egui::Color32::from_rgb(56, 52, 60);
const SURFACE_HOT: egui::Color32 = egui::Color32::from_rgb(88, 72, 70);
const EMBER: egui::Color32 = egui::Color32::from_rgb(220, 120, 60);

pub fn apply_heat_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let style = heat_style(&ctx.style());
    ctx.set_style(style);
}

/// `base` with the heat palette applied to windows, buttons and drag values.
fn heat_style(base: &egui::Style) -> egui::Style {
    let mut style = base.clone();
    let visuals = &mut style.visuals;

    visuals.window_fill = SURFACE;
    visuals.panel_fill = SURFACE;
    visuals.window_corner_radius = egui::CornerRadius::same(8);

    let widgets = &mut visuals.widgets;
    for (state, fill) in [
        (&mut widgets.inactive, SURFACE_RAISED),
        (&mut widgets.hovered, SURFACE_HOT),
        (&mut widgets.active, EMBER),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
    }

    visuals.selection.bg_fill = EMBER;
    visuals.selection.stroke = egui::Stroke::new(1.0, EMBER);
    style
}

pub(crate) fn risk_color(risk: HeatRisk) -> egui::Color32 {
    match risk {
        HeatRisk::Normal => egui::Color32::from_rgb(140, 200, 230),
        HeatRisk::Caution => egui::Color32::from_rgb(250, 230, 120),
        HeatRisk::ExtremeCaution => egui::Color32::from_rgb(250, 180, 70),
        HeatRisk::Danger => egui::Color32::from_rgb(240, 110, 50),
        HeatRisk::ExtremeDanger => egui::Color32::from_rgb(200, 40, 40),
    }
}

/// Colour for curve `index` of `count`, from pale yellow (driest) to deep red.
pub(crate) fn curve_color(index: usize, count: usize) -> egui::Color32 {
    let t = if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    };
    let lerp = |a: f32, b: f32| (a + (b - a) * t).round() as u8;
    egui::Color32::from_rgb(lerp(250.0, 180.0), lerp(220.0, 30.0), lerp(90.0, 60.0))
}
