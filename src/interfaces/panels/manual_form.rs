use crate::application::user_session::{ManualView, UserSession};
use crate::interfaces::components::{Card, render_metric, render_notice, render_verdict};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

fn number_input(ui: &mut egui::Ui, label: &str, value: &mut f64, decimals: usize) {
    ui.label(egui::RichText::new(label).color(DesignSystem::TEXT_SECONDARY));
    ui.add(
        egui::DragValue::new(value)
            .speed(0.01)
            .min_decimals(decimals)
            .max_decimals(decimals),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
}

/// "Enter Near Earth Object Details" form and its last result
pub fn render_manual_section(ui: &mut egui::Ui, session: &mut UserSession) {
    let mut card = Card::new().title("🔭 Enter Near Earth Object Details Below");
    if let Some(ManualView::Predicted(result)) = &session.manual_view {
        card = card.accent(DesignSystem::verdict_color(result.label));
    }

    card.show(ui, |ui| {
        ui.columns(2, |cols| {
            number_input(
                &mut cols[0],
                "Estimated Diameter Min (km)",
                &mut session.manual.diameter_min,
                6,
            );
            number_input(
                &mut cols[0],
                "Estimated Diameter Max (km)",
                &mut session.manual.diameter_max,
                6,
            );
            render_metric(
                &mut cols[0],
                "Diameter Diff",
                &format!("{:.6}", session.manual.diameter_diff()),
            );

            number_input(
                &mut cols[1],
                "Relative Velocity (km/h)",
                &mut session.manual.relative_velocity,
                2,
            );
            number_input(
                &mut cols[1],
                "Miss Distance (km)",
                &mut session.manual.miss_distance,
                2,
            );
            number_input(
                &mut cols[1],
                "Absolute Magnitude",
                &mut session.manual.absolute_magnitude,
                2,
            );
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        if ui.button("Predict Hazard").clicked() {
            session.submit_manual();
        }

        match &session.manual_view {
            Some(ManualView::Predicted(result)) => {
                ui.add_space(DesignSystem::SPACING_SMALL);
                render_verdict(ui, result.label, true);
            }
            Some(ManualView::Failed(notice)) => {
                ui.add_space(DesignSystem::SPACING_SMALL);
                render_notice(ui, notice);
            }
            None => {}
        }
    });
}
