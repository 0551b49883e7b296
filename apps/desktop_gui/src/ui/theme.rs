use board_core::Rgb;
use eframe::egui;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const CONTACTED: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
pub const CONTACTED_BG: egui::Color32 = egui::Color32::from_rgb(236, 253, 245);
pub const CARD_BG: egui::Color32 = egui::Color32::WHITE;
pub const APP_BG: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const MAP_WATER: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
pub const MAP_LAND_STROKE: egui::Color32 = egui::Color32::from_rgb(120, 144, 120);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn board_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(TEXT);
    visuals.window_fill = CARD_BG;
    visuals.panel_fill = APP_BG;
    visuals.faint_bg_color = lighten_color(BORDER, 0.5);
    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = PRIMARY;
    visuals.widgets.hovered.bg_fill = lighten_color(PRIMARY, 0.85);

    let radius = egui::CornerRadius::same(10);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;
    visuals.window_corner_radius = egui::CornerRadius::same(14);
    visuals
}
