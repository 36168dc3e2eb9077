//! Settings panel: display unit, out-of-range handling and precision.
//!
//! Toggled via the F9 key or the form's settings button. Changes apply
//! immediately; "Save" writes them to the configured settings file.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use heat_index::config::MAX_DECIMALS;
use heat_index::{CalculatorConfig, RangePolicy, TemperatureUnit};

use crate::settings::{CalculatorSettings, SettingsPath};
use crate::theme::{ERROR_COLOR, MUTED_TEXT};

// =============================================================================
// Resources
// =============================================================================

/// Whether the settings panel is visible.
#[derive(Resource, Default)]
pub struct SettingsPanelVisible(pub bool);

/// Outcome of the last save, shown under the buttons.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saved(String),
    Failed(String),
}

// =============================================================================
// Systems
// =============================================================================

/// Toggles the settings panel with F9.
pub fn settings_panel_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<SettingsPanelVisible>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::F9) {
        visible.0 = !visible.0;
    }
}

/// Renders the settings panel window.
pub fn settings_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<SettingsPanelVisible>,
    mut settings: ResMut<CalculatorSettings>,
    path: Res<SettingsPath>,
    mut status: ResMut<SaveStatus>,
) {
    if !visible.0 {
        return;
    }

    // Work on a copy so unchanged frames don't mark the resource as changed.
    let mut config = settings.0.clone();
    let mut save_clicked = false;

    let mut open = true;
    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            // --- Display section ---
            ui.heading("Display");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Heat index unit:");
                for unit in TemperatureUnit::ALL {
                    ui.radio_value(
                        &mut config.display_unit,
                        unit,
                        format!("{} ({})", unit.name(), unit.symbol()),
                    );
                }
            });

            ui.horizontal(|ui| {
                ui.label("Decimal places:");
                ui.add(egui::DragValue::new(&mut config.decimals).range(0..=MAX_DECIMALS));
            });

            ui.checkbox(
                &mut config.show_value_outside_domain,
                "Show value outside the accurate range",
            );

            ui.add_space(8.0);

            // --- Input section ---
            ui.heading("Out-of-range inputs");
            ui.separator();

            policy_combo(ui, "temperature_policy", "Temperature:", &mut config.input.temperature);
            policy_combo(ui, "humidity_policy", "Humidity:", &mut config.input.humidity);

            let t = config.input.temperature_bounds;
            let h = config.input.humidity_bounds;
            ui.label(
                egui::RichText::new(format!(
                    "Accepted: {}..{} °C, {}..{} %",
                    t.min, t.max, h.min, h.max
                ))
                .small()
                .color(MUTED_TEXT),
            );

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Reset to defaults").clicked() {
                    config = CalculatorConfig::default();
                }
                let save = ui.add_enabled(path.0.is_some(), egui::Button::new("Save"));
                let save = if path.0.is_none() {
                    save.on_disabled_hover_text("Start with --config <path> to enable saving")
                } else {
                    save
                };
                save_clicked = save.clicked();
            });

            match &*status {
                SaveStatus::Idle => {}
                SaveStatus::Saved(msg) => {
                    ui.label(egui::RichText::new(msg).small().color(MUTED_TEXT));
                }
                SaveStatus::Failed(msg) => {
                    ui.label(egui::RichText::new(msg).small().color(ERROR_COLOR));
                }
            }
        });

    if config != settings.0 {
        settings.0 = config;
    }

    if save_clicked {
        *status = save_settings(&settings.0, &path);
    }

    if !open {
        visible.0 = false;
    }
}

fn policy_combo(ui: &mut egui::Ui, id: &str, label: &str, policy: &mut RangePolicy) {
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(policy.label())
            .show_ui(ui, |ui| {
                for option in RangePolicy::ALL {
                    ui.selectable_value(policy, option, option.label());
                }
            });
    });
}

/// Write `config` to the settings path, logging the outcome.
pub fn save_settings(config: &CalculatorConfig, path: &SettingsPath) -> SaveStatus {
    let Some(path) = &path.0 else {
        return SaveStatus::Failed("No settings file configured".to_string());
    };
    match config.save(path) {
        Ok(()) => {
            info!("Settings saved to {}", path.display());
            SaveStatus::Saved(format!("Saved to {}", path.display()))
        }
        Err(e) => {
            warn!("Failed to save settings to {}: {e}", path.display());
            SaveStatus::Failed(format!("Save failed: {e}"))
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct SettingsPanelPlugin;

impl Plugin for SettingsPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SettingsPanelVisible>()
            .init_resource::<SaveStatus>()
            .add_systems(Update, (settings_panel_keybind, settings_panel_ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_without_path_fails() {
        let status = save_settings(&CalculatorConfig::default(), &SettingsPath(None));
        assert!(matches!(status, SaveStatus::Failed(_)));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = std::env::temp_dir().join("feels_like_settings_panel_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("settings.json");

        let mut config = CalculatorConfig::default();
        config.display_unit = TemperatureUnit::Fahrenheit;
        let status = save_settings(&config, &SettingsPath(Some(path.clone())));

        assert!(matches!(status, SaveStatus::Saved(_)));
        assert_eq!(CalculatorConfig::load(&path).unwrap(), config);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_invalid_config_reports_failure() {
        let dir = std::env::temp_dir().join("feels_like_settings_panel_invalid");
        let path = dir.join("settings.json");

        let mut config = CalculatorConfig::default();
        config.decimals = MAX_DECIMALS + 1;
        let status = save_settings(&config, &SettingsPath(Some(path.clone())));

        assert!(matches!(status, SaveStatus::Failed(_)));
        assert!(!path.exists());
    }
}
