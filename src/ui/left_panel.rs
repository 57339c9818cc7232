use eframe::egui;

use crate::engine::driver::NodeDriver;
use crate::engine::llm_client::LlmClient;
use crate::engine::registry::available_nodes;
use crate::ui::app::{LeftTab, UiState};
use crate::ui::settings_io::save_settings;

pub fn draw_left_panel(ctx: &egui::Context, ui_state: &mut UiState, driver: &mut NodeDriver) {
    egui::SidePanel::left("left")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut ui_state.left_tab, LeftTab::Settings, "Settings");
                ui.selectable_value(&mut ui_state.left_tab, LeftTab::Context, "Context");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match ui_state.left_tab {
                LeftTab::Settings => draw_settings(ui, ui_state),
                LeftTab::Context => draw_context(ui, driver),
            });
        });
}

/* =========================
   Settings UI
   ========================= */

fn draw_settings(ui: &mut egui::Ui, state: &mut UiState) {
    let s = &mut state.settings;

    ui.label("UI Scale");
    ui.add(egui::Slider::new(&mut s.ui_scale, 0.75..=2.0));

    ui.separator();
    ui.collapsing("Services", |ui| {
        ui.label("Translation endpoint");
        ui.text_edit_singleline(&mut s.translation_endpoint);

        ui.label("LLM endpoint");
        ui.text_edit_singleline(&mut s.llm_endpoint);
        ui.label("LLM model");
        ui.text_edit_singleline(&mut s.llm_model);

        ui.label("Speech endpoint");
        ui.text_edit_singleline(&mut s.speech_endpoint);
        ui.horizontal(|ui| {
            ui.label("Model");
            ui.text_edit_singleline(&mut s.speech_model);
        });
        ui.horizontal(|ui| {
            ui.label("Voice");
            ui.text_edit_singleline(&mut s.speech_voice);
        });

        ui.label("Request timeout (s)");
        ui.add(egui::DragValue::new(&mut s.request_timeout_secs).range(1..=600));

        ui.label("Audio output directory");
        let mut dir = s.audio_output_dir.display().to_string();
        if ui.text_edit_singleline(&mut dir).changed() {
            s.audio_output_dir = dir.into();
        }
    });

    ui.collapsing("Enabled nodes", |ui| {
        for id in available_nodes() {
            let mut enabled = s.is_enabled(id);
            if ui.checkbox(&mut enabled, id).changed() {
                s.set_enabled(id, enabled);
            }
        }
    });

    ui.separator();
    ui.weak("Service and node changes apply after restart.");

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            state.status_line = Some(match save_settings(&state.settings) {
                Ok(()) => "Settings saved".to_string(),
                Err(e) => format!("Save failed: {e:#}"),
            });
        }

        if ui.button("Test LLM connection").clicked() {
            state.status_line = Some(test_llm_connection(&state.settings));
        }
    });

    if let Some(line) = &state.status_line {
        ui.label(line);
    }
}

fn test_llm_connection(settings: &crate::ui::settings::AppSettings) -> String {
    let http = match reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
    {
        Ok(http) => http,
        Err(e) => return format!("Connection failed: {e}"),
    };

    match LlmClient::new(http, &settings.llm_endpoint, &settings.llm_model).test_connection() {
        Ok(msg) => msg,
        Err(e) => format!("Connection failed: {e:#}"),
    }
}

/* =========================
   Context UI
   ========================= */

fn draw_context(ui: &mut egui::Ui, driver: &mut NodeDriver) {
    ui.heading("Shared Context");

    let context = driver.context();
    if context.is_empty() {
        ui.label("Empty");
    } else {
        let json = serde_json::to_string_pretty(&context.to_json()).unwrap_or_default();
        ui.add(
            egui::TextEdit::multiline(&mut json.as_str())
                .code_editor()
                .desired_width(f32::INFINITY),
        );
    }

    ui.separator();

    let busy = driver.is_busy();
    if ui.add_enabled(!busy, egui::Button::new("Clear context")).clicked() {
        driver.reset_context();
    }
}
