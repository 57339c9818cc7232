use std::path::PathBuf;

use crate::model::node_output::{Entity, SentimentScores, UserInfo};

/// What `display_result` should draw, computed without touching the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Nothing produced yet.
    Placeholder(&'static str),
    Text { label: &'static str, value: String },
    User(UserInfo),
    Scores(SentimentScores),
    Entities(Vec<Entity>),
    Audio(PathBuf),
    Caption(String),
}

impl ResultView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ResultView::Placeholder(_))
    }
}
