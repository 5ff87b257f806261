use crate::domain::notice::NoticeLevel;
use crate::domain::prediction::HazardLabel;
use eframe::egui;

/// Dark "deep space" palette shared by every panel
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(8, 10, 18); // #080A12
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(13, 16, 28);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(20, 25, 40);
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(28, 34, 52);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(12, 14, 24);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(124, 92, 255); // #7C5CFF
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(160, 140, 255);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 230, 118); // #00E676
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68); // #FF1744
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 145, 0); // #FF9100
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(66, 165, 245);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(236, 240, 250);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(165);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(105);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(44, 50, 72);

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 4.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const SIDEBAR_WIDTH: f32 = 450.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;
        visuals.hyperlink_color = Self::ACCENT_SECONDARY;
        visuals.warn_fg_color = Self::WARNING;
        visuals.error_fg_color = Self::DANGER;

        let radius = egui::CornerRadius::same(Self::ROUNDING_SMALL as u8);
        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            widget.corner_radius = radius;
        }

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        // Buttons stand out against the cards they sit on
        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.weak_bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.35);
        visuals.widgets.inactive.bg_fill = Self::BG_INPUT;

        visuals.widgets.hovered.weak_bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.6);
        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.weak_bg_fill = Self::ACCENT_PRIMARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Colour used for notices and banners of the given level
    pub fn level_color(level: NoticeLevel) -> egui::Color32 {
        match level {
            NoticeLevel::Info => Self::INFO,
            NoticeLevel::Success => Self::SUCCESS,
            NoticeLevel::Warning => Self::WARNING,
            NoticeLevel::Error => Self::DANGER,
        }
    }

    pub fn verdict_color(label: HazardLabel) -> egui::Color32 {
        if label.is_hazardous() {
            Self::DANGER
        } else {
            Self::SUCCESS
        }
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
