use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use tracing::{error, warn};

use crate::engine::capability::Capabilities;
use crate::engine::driver::{run_node, NodeDriver};
use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::registry::build_nodes;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::node_panel::draw_node_panel;
use crate::ui::settings::AppSettings;

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftTab {
    #[default]
    Settings,
    Context,
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub left_tab: LeftTab,

    /// Settings as edited in the panel; applied to scale immediately, to
    /// endpoints on the next start.
    pub settings: AppSettings,

    /// One-line feedback from Save / Test connection.
    pub status_line: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct NodeStudioApp {
    pub ui: UiState,
    pub driver: NodeDriver,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl NodeStudioApp {
    pub fn new(settings: AppSettings, caps: &Capabilities) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx);
            engine.run();
        });

        let driver = NodeDriver::new(build_nodes(&settings.enabled_nodes, caps));
        if driver.is_empty() {
            warn!("no nodes enabled; check enabled_nodes in settings");
        }

        Self {
            ui: UiState {
                settings,
                ..Default::default()
            },
            driver,
            cmd_tx,
            resp_rx,
        }
    }

    /// Hand the node at `index` to the engine thread.
    pub fn trigger(&mut self, index: usize) {
        let Some(job) = self.driver.check_out(index) else {
            return;
        };
        if let Err(mpsc::SendError(cmd)) = self.cmd_tx.send(EngineCommand::Process(job)) {
            error!("engine thread is gone; running node on the UI thread");
            let EngineCommand::Process(mut job) = cmd;
            let result = run_node(&mut *job.node, &mut job.context);
            self.driver.check_in(job, result);
        }
    }

    fn drain_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::Processed { job, result } => {
                    self.driver.check_in(job, result);
                }
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for NodeStudioApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        self.drain_responses();

        draw_left_panel(ctx, &mut self.ui, &mut self.driver);

        if let Some(index) = draw_node_panel(ctx, &mut self.driver) {
            self.trigger(index);
        }

        if self.driver.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
