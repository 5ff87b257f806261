use crate::application::user_session::{FeedView, UserSession};
use crate::domain::notice::Notice;
use crate::domain::prediction::FeedPrediction;
use crate::interfaces::components::{Card, render_notice, render_status_pill, render_verdict};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

fn render_prediction(ui: &mut egui::Ui, prediction: &FeedPrediction) {
    let record = &prediction.record;

    ui.horizontal(|ui| {
        ui.label("☄️ NASA Actual Hazard Flag:");
        let (text, color) = if record.is_potentially_hazardous {
            ("HAZARDOUS", DesignSystem::DANGER)
        } else {
            ("NOT HAZARDOUS", DesignSystem::SUCCESS)
        };
        render_status_pill(ui, text, color);
    });
    ui.add_space(4.0);
    render_notice(ui, &Notice::success(format!("Fetched asteroid: {}", record.name)));
    ui.add_space(4.0);

    for line in prediction.detail_lines() {
        ui.label(line);
    }
    if let Some(url) = &record.nasa_jpl_url {
        ui.hyperlink_to("JPL Small-Body Database", url);
    }

    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(
        egui::RichText::new("⚠️ NASA-based Prediction Result")
            .size(15.0)
            .strong(),
    );
    render_verdict(ui, prediction.result.label, false);
    if !prediction.agrees_with_feed() {
        ui.label(
            egui::RichText::new("The model disagrees with NASA's own flag for this object.")
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );
    }
}

/// "Predict using Real NEO Data" section
pub fn render_feed_section(ui: &mut egui::Ui, session: &mut UserSession) {
    let mut card = Card::new().title("🪐 Predict using Real NEO Data (NASA)");
    if let Some(FeedView::Predicted(prediction)) = &session.feed_view {
        card = card.accent(DesignSystem::verdict_color(prediction.result.label));
    }

    card.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label("📅 Select a date");
            ui.add(
                egui::TextEdit::singleline(&mut session.feed_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(110.0),
            );
            if ui.small_button("◀").on_hover_text("Previous day").clicked() {
                session.shift_date(-1);
            }
            if ui.small_button("Today").clicked() {
                session.reset_date();
            }
            if ui.small_button("▶").on_hover_text("Next day").clicked() {
                session.shift_date(1);
            }
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        if ui.button("🚀 Fetch NEO from NASA").clicked() {
            session.submit_feed();
        }

        if let Some(view) = &session.feed_view {
            ui.add_space(DesignSystem::SPACING_SMALL);
            match view {
                FeedView::Predicted(prediction) => render_prediction(ui, prediction),
                FeedView::NoRecords(notice) | FeedView::Failed(notice) => {
                    render_notice(ui, notice)
                }
            }
        }
    });
}
