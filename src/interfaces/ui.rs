use crate::application::user_session::UserSession;
use crate::interfaces::components::render_notice;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::panels::{
    render_about, render_activity_log, render_feed_section, render_manual_section,
};
use eframe::egui;

impl eframe::App for UserSession {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Drain tracing output ---
        self.update();

        // --- 2. Sidebar: About ---
        let model_description = self.model_description();
        egui::SidePanel::left("about_panel")
            .default_width(DesignSystem::SIDEBAR_WIDTH)
            .min_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                render_about(ui, model_description.as_deref());
            });

        // --- 3. Bottom: Activity log ---
        egui::TopBottomPanel::bottom("activity_panel")
            .resizable(false)
            .show(ctx, |ui| {
                render_activity_log(ui, &self.activity_log);
            });

        // --- 4. Central Panel: forms and results ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .show(ui, |ui| {
                        ui.heading(egui::RichText::new("NEO Hazard Prediction").size(28.0));
                        ui.separator();

                        for notice in &self.startup_notices {
                            render_notice(ui, notice);
                            ui.add_space(4.0);
                        }

                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        render_manual_section(ui, self);

                        ui.add_space(DesignSystem::SPACING_LARGE);
                        render_feed_section(ui, self);
                    });
            });

        // Keep the log view fresh without user input
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}
