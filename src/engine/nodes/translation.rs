use std::sync::Arc;

use tracing::debug;

use crate::engine::capability::Translator;
use crate::engine::error::NodeError;
use crate::engine::node::{required_text, Node};
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

pub const TARGET_LANGUAGES: [&str; 6] = ["fr", "es", "de", "nl", "it", "ru"];

pub struct TranslationNode {
    translator: Arc<dyn Translator>,
    pub text: String,
    pub language: &'static str,
}

impl TranslationNode {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            text: String::new(),
            language: TARGET_LANGUAGES[0],
        }
    }
}

impl Node for TranslationNode {
    fn title(&self) -> &str {
        "Translation Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Translation
    }

    fn trigger_label(&self) -> &str {
        "Translate"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter text to translate");
        ui.text_edit_multiline(&mut self.text);

        ui.horizontal(|ui| {
            ui.label("Select target language");
            egui::ComboBox::from_id_salt("translation_target")
                .selected_text(self.language)
                .show_ui(ui, |ui| {
                    for code in TARGET_LANGUAGES {
                        ui.selectable_value(&mut self.language, code, code);
                    }
                });
        });
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(text) = required_text(&self.text) else {
            return Ok(ProcessOutcome::Skipped);
        };

        debug!(language = self.language, chars = text.len(), "translating");
        let translated = self
            .translator
            .translate(text, self.language)
            .map_err(|e| NodeError::from_capability("translation service", e))?;

        ctx.publish(NodeOutput::TranslatedText(translated))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::Translation) {
            Some(NodeOutput::TranslatedText(t)) => ResultView::Text {
                label: "Translated Text",
                value: t.clone(),
            },
            _ => ResultView::Placeholder("No text has been translated."),
        }
    }
}
