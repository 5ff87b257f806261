use crate::domain::notice::Notice;
use crate::domain::prediction::HazardLabel;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Small label/value pair, like the live diameter difference
pub fn render_metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.label(
            egui::RichText::new(value)
                .size(26.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
}

/// A status pill (e.g., NASA's own hazard flag)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}

/// Full-width banner for a notice
pub fn render_notice(ui: &mut egui::Ui, notice: &Notice) {
    let color = DesignSystem::level_color(notice.level);
    egui::Frame::NONE
        .fill(color.linear_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.6)))
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&notice.message).color(color));
        });
}

/// Headline and explanation for a classifier verdict
pub fn render_verdict(ui: &mut egui::Ui, label: HazardLabel, with_explanation: bool) {
    let banner = if label.is_hazardous() {
        Notice::error(label.headline())
    } else {
        Notice::success(label.headline())
    };
    render_notice(ui, &banner);

    if with_explanation {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(label.explanation()).color(DesignSystem::TEXT_SECONDARY),
        );
    }
}
