use std::sync::mpsc::{Receiver, Sender};

use crate::engine::driver::run_node;
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Background worker that runs checked-out nodes so the UI keeps painting
/// while a capability call blocks.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
}

impl Engine {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>) -> Self {
        Self { rx, tx }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Process(mut job) => {
                    let result = run_node(&mut *job.node, &mut job.context);
                    if self.tx.send(EngineResponse::Processed { job, result }).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::driver::NodeDriver;
    use crate::engine::node::Node;
    use crate::engine::nodes::SystemPromptNode;
    use crate::model::node_kind::NodeKind;
    use crate::model::node_status::NodeStatus;
    use std::sync::mpsc;

    #[test]
    fn processes_checked_out_node_on_worker_thread() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let worker = std::thread::spawn(move || Engine::new(cmd_rx, resp_tx).run());

        let mut prompt = SystemPromptNode::new();
        prompt.prompt = "Be brief.".into();
        let mut driver = NodeDriver::new(vec![Box::new(prompt) as Box<dyn Node>]);

        let job = driver.check_out(0).unwrap();
        cmd_tx.send(EngineCommand::Process(job)).unwrap();

        let EngineResponse::Processed { job, result } = resp_rx.recv().unwrap();
        driver.check_in(job, result);

        assert_eq!(driver.slot(0).unwrap().status, NodeStatus::Produced);
        assert!(driver.context().contains(NodeKind::SystemPrompt));

        drop(cmd_tx);
        worker.join().unwrap();
    }
}
