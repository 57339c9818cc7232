use eframe::egui;
use egui::RichText;

use crate::model::result_view::ResultView;
use crate::ui::audio::play_in_background;

pub fn draw_result_view(ui: &mut egui::Ui, view: &ResultView) {
    match view {
        ResultView::Placeholder(msg) => {
            let color = ui.visuals().warn_fg_color;
            ui.label(RichText::new(format!("⚠ {msg}")).color(color));
        }

        ResultView::Text { label, value } => {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(format!("{label}:")).strong());
                ui.label(value);
            });
        }

        ResultView::User(info) => {
            let or_na = |s: &str| if s.is_empty() { "N/A".to_string() } else { s.to_string() };
            ui.horizontal(|ui| {
                ui.label(RichText::new("Name:").strong());
                ui.label(or_na(&info.name));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Email:").strong());
                ui.label(or_na(&info.email));
            });
        }

        ResultView::Scores(scores) => {
            ui.label(RichText::new("Sentiment Scores:").strong());
            egui::Grid::new("sentiment_scores").striped(true).show(ui, |ui| {
                for (axis, value) in [
                    ("neg", scores.neg),
                    ("neu", scores.neu),
                    ("pos", scores.pos),
                    ("compound", scores.compound),
                ] {
                    ui.monospace(axis);
                    ui.monospace(format!("{value:.4}"));
                    ui.end_row();
                }
            });
        }

        ResultView::Entities(entities) => {
            ui.heading("Extracted Entities:");
            for entity in entities {
                ui.horizontal(|ui| {
                    ui.label("•");
                    ui.label(RichText::new(&entity.text).strong());
                    ui.label(format!("({})", entity.label));
                });
            }
        }

        ResultView::Audio(path) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Audio:").strong());
                ui.monospace(path.display().to_string());
                if ui.button("▶ Play").clicked() {
                    play_in_background(path.clone());
                }
            });
        }

        ResultView::Caption(caption) => {
            ui.label(RichText::new(caption).italics());
        }
    }
}
