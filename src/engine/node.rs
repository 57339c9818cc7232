use crate::engine::error::NodeError;
use crate::model::node_kind::NodeKind;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};
use crate::ui::result_view::draw_result_view;

/// A self-contained unit: collects input, delegates to one capability, shows the result.
///
/// Implementations keep their inputs in their own fields, so `set_inputs` can be
/// called every frame without losing what the user typed.
pub trait Node: Send {
    fn title(&self) -> &str;

    fn kind(&self) -> NodeKind;

    fn trigger_label(&self) -> &str {
        "Run"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui);

    /// Run the capability. Missing input is `Ok(Skipped)` with no write; on
    /// error nothing is written either.
    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError>;

    fn result_view(&self, ctx: &SharedContext) -> ResultView;

    fn display_result(&mut self, ui: &mut egui::Ui, ctx: &SharedContext) {
        draw_result_view(ui, &self.result_view(ctx));
    }
}

/// Trimmed text, or `None` when the field is effectively empty.
pub fn required_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
pub mod harness {
    //! Headless egui frame for exercising widgets in tests.

    use super::*;

    pub fn with_ui(mut f: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| f(ui));
        });
    }

    /// Checks the behaviour every node shares: placeholder before any run,
    /// no write on empty input, inputs surviving repeated rendering.
    pub fn assert_node_contract(node: &mut dyn Node) {
        let mut ctx = SharedContext::new();

        let view = node.result_view(&ctx);
        assert!(view.is_placeholder(), "{} should start with a placeholder", node.title());
        with_ui(|ui| node.display_result(ui, &ctx));

        let kind = node.kind();
        let outcome = node.process(&mut ctx.scope(kind)).unwrap();
        assert_eq!(outcome, ProcessOutcome::Skipped);
        assert!(ctx.is_empty(), "{} wrote to the context without input", node.title());

        with_ui(|ui| node.set_inputs(ui));
        with_ui(|ui| node.set_inputs(ui));
    }
}
