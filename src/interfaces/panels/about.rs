use crate::domain::ml::FEATURE_NAMES;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

const FEATURES: [(&str, &str); 5] = [
    ("Estimated Diameter (Min & Max)", "Size of the asteroid"),
    ("Relative Velocity", "Speed at which it approaches Earth"),
    (
        "Miss Distance",
        "Distance between the asteroid and Earth at its closest approach",
    ),
    ("Absolute Magnitude", "Measure of brightness"),
    (
        "Estimated Diameter Difference",
        "Difference between max and min size",
    ),
];

fn section(ui: &mut egui::Ui, heading: &str) {
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.label(
        egui::RichText::new(heading)
            .size(16.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(4.0);
}

fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(DesignSystem::TEXT_SECONDARY));
}

/// Sidebar explaining NEOs and the classifier
pub fn render_about(ui: &mut egui::Ui, model_description: Option<&str>) {
    ui.heading("📘 About");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("about_scroll")
        .show(ui, |ui| {
            section(ui, "🛰️ What is a Near-Earth Object (NEO)?");
            paragraph(
                ui,
                "A NEO is an asteroid or comet whose orbit brings it into proximity with Earth. \
                 These bodies, if large and fast enough, could cause significant damage upon \
                 impact, which makes early detection and risk analysis crucial for planetary \
                 defense.",
            );

            section(ui, "🤖 What Does This Model Do?");
            paragraph(
                ui,
                "A machine learning model predicts whether an NEO is potentially hazardous based \
                 on real data from NASA. It uses the following features:",
            );
            ui.add_space(4.0);
            for (name, meaning) in FEATURES {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("• {}", name)).strong());
                    ui.label(
                        egui::RichText::new(format!("– {}", meaning))
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            }
            ui.add_space(4.0);
            paragraph(
                ui,
                "These inputs are passed to a trained Random Forest Classifier, which outputs \
                 whether the asteroid is likely to pose a threat.",
            );

            section(ui, "🧪 Goal");
            paragraph(
                ui,
                "A simple, efficient and interpretable system that contributes to understanding \
                 and mitigating asteroid risks, one prediction at a time.",
            );

            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.separator();
            ui.label(
                egui::RichText::new(format!("Model input order: {}", FEATURE_NAMES.join(", ")))
                    .size(10.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
            ui.label(
                egui::RichText::new(match model_description {
                    Some(desc) => format!("Model: {}", desc),
                    None => "Model: not loaded".to_string(),
                })
                .size(10.0)
                .color(DesignSystem::TEXT_MUTED),
            );
            ui.label(
                egui::RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                    .size(10.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
        });
}
