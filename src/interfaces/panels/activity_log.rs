use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

fn line_color(line: &str) -> egui::Color32 {
    if line.contains("ERROR") {
        DesignSystem::DANGER
    } else if line.contains("WARN") {
        DesignSystem::WARNING
    } else {
        DesignSystem::TEXT_SECONDARY
    }
}

/// Collapsible view of the tracing output
pub fn render_activity_log(ui: &mut egui::Ui, lines: &[String]) {
    egui::CollapsingHeader::new(format!("📜 Activity log ({})", lines.len()))
        .id_salt("activity_log")
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("activity_log_scroll")
                .max_height(220.0)
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if lines.is_empty() {
                        ui.label(
                            egui::RichText::new("No activity yet")
                                .color(DesignSystem::TEXT_MUTED)
                                .italics(),
                        );
                    }
                    for line in lines {
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .size(11.0)
                                .color(line_color(line)),
                        );
                    }
                });
        });
}
