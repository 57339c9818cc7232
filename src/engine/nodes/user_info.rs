use crate::engine::error::NodeError;
use crate::engine::node::Node;
use crate::model::node_kind::NodeKind;
use crate::model::node_output::{NodeOutput, UserInfo};
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

/// Pass-through of the user's name and email.
#[derive(Default)]
pub struct UserInfoNode {
    pub name: String,
    pub email: String,
}

impl UserInfoNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for UserInfoNode {
    fn title(&self) -> &str {
        "User Info Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::UserInfo
    }

    fn trigger_label(&self) -> &str {
        "Store User Info"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter your name");
        ui.text_edit_singleline(&mut self.name);
        ui.label("Enter your email");
        ui.text_edit_singleline(&mut self.email);
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() && email.is_empty() {
            return Ok(ProcessOutcome::Skipped);
        }

        ctx.publish(NodeOutput::UserInfo(UserInfo {
            name: name.to_string(),
            email: email.to_string(),
        }))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::UserInfo) {
            Some(NodeOutput::UserInfo(info)) => ResultView::User(info.clone()),
            _ => ResultView::Placeholder("No user info has been provided."),
        }
    }
}
