use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log_panel(ctx: &egui::Context, logger: &AppLogger) {
    egui::TopBottomPanel::bottom("log_panel")
        .resizable(true)
        .default_height(140.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Log");
                if ui.small_button("Clear").clicked() {
                    logger.clear();
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in logger.get_entries() {
                        let color = match entry.level {
                            Level::Error => egui::Color32::from_rgb(220, 53, 69),
                            Level::Warn => egui::Color32::from_rgb(255, 193, 7),
                            _ => ui.visuals().text_color(),
                        };
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {:<5} [{}] {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.target,
                                entry.message
                            ))
                            .monospace()
                            .color(color),
                        );
                    }
                });
        });
}
