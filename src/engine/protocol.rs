use crate::engine::driver::CheckedOut;
use crate::engine::error::NodeError;
use crate::model::node_status::ProcessOutcome;

pub enum EngineCommand {
    Process(CheckedOut),
}

pub enum EngineResponse {
    Processed {
        job: CheckedOut,
        result: Result<ProcessOutcome, NodeError>,
    },
}
