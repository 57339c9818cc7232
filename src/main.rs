mod engine;
mod model;
mod observability;
mod ui;

use anyhow::Context;
use eframe::egui;

use engine::capability::Capabilities;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = ui::settings_io::load_settings();
    let caps = Capabilities::from_settings(&settings).context("building capability backends")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Node Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::NodeStudioApp::new(settings, &caps)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}
