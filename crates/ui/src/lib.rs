use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod assessment;
pub mod chart_panel;
mod drawing;
pub mod form_panel;
pub mod settings;
pub mod settings_panel;
pub mod theme;

pub use assessment::CurrentAssessment;
pub use settings::{CalculatorInputs, CalculatorSettings, SettingsPath};

/// Heat index form, comparison chart and settings window.
///
/// Expects `CalculatorSettings`, `CalculatorInputs` and `SettingsPath` to be
/// inserted by the caller; defaults are used for any that are missing.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<CalculatorSettings>()
            .init_resource::<CalculatorInputs>()
            .init_resource::<SettingsPath>()
            .init_resource::<CurrentAssessment>()
            .add_systems(Startup, theme::apply_heat_theme)
            .add_systems(
                Update,
                (
                    assessment::refresh_assessment,
                    form_panel::form_panel_ui,
                    chart_panel::chart_panel_ui,
                )
                    .chain(),
            )
            .add_plugins(settings_panel::SettingsPanelPlugin);
    }
}
