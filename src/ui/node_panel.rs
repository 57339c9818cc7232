use eframe::egui;

use crate::engine::driver::NodeDriver;
use crate::model::node_status::NodeStatus;

/// Draw one collapsible card per node. Returns the index whose trigger was
/// clicked this frame, if any.
pub fn draw_node_panel(ctx: &egui::Context, driver: &mut NodeDriver) -> Option<usize> {
    let mut clicked = None;
    let busy = driver.is_busy();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Node-Based Modular Components");
        ui.separator();

        if driver.is_empty() {
            ui.label("No nodes are enabled. Pick some in Settings and restart.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            let (slots, context) = driver.slots_and_context();

            for (index, slot) in slots.iter_mut().enumerate() {
                egui::CollapsingHeader::new(slot.title.as_str())
                    .id_salt(("node", index))
                    .default_open(index == 0)
                    .show(ui, |ui| {
                        let running = slot.status.is_running();

                        match slot.node_mut() {
                            Some(node) => node.set_inputs(ui),
                            None => {
                                ui.weak("Processing…");
                            }
                        }

                        ui.horizontal(|ui| {
                            let button = egui::Button::new(slot.trigger_label.as_str());
                            if ui.add_enabled(!busy, button).clicked() {
                                clicked = Some(index);
                            }
                            if running {
                                ui.spinner();
                            }
                        });

                        if let NodeStatus::Failed { reason } = &slot.status {
                            let color = ui.visuals().error_fg_color;
                            ui.colored_label(color, format!("❌ {reason}"));
                        }

                        if let Some(node) = slot.node_mut() {
                            node.display_result(ui, context);
                        }
                    });
            }
        });
    });

    clicked
}
