use board_core::BoardStore;
use eframe::egui;

use crate::ui::theme;

const TAGLINE: &str = "Connect directly with employers hiring now";

fn badge(ui: &mut egui::Ui, text: egui::RichText, fill: egui::Color32, stroke: egui::Color32) {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(text);
        });
}

pub fn show_header(ui: &mut egui::Ui, store: &BoardStore, title: &str) {
    let total = store.dataset().len();
    let contacted = store.contacted().contacted_count();

    ui.horizontal(|ui| {
        let (logo, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
        ui.painter().rect_filled(logo, 10.0, theme::PRIMARY);
        ui.painter().text(
            logo.center(),
            egui::Align2::CENTER_CENTER,
            "W",
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).size(20.0).strong().color(theme::TEXT));
            ui.label(egui::RichText::new(TAGLINE).color(theme::MUTED_TEXT));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new("Opportunities").color(theme::MUTED_TEXT));
            ui.label(egui::RichText::new(total.to_string()).strong().color(theme::TEXT));
            ui.add_space(12.0);
            badge(
                ui,
                egui::RichText::new("● Australia Wide").color(theme::PRIMARY),
                theme::lighten_color(theme::PRIMARY, 0.9),
                theme::lighten_color(theme::PRIMARY, 0.6),
            );
            if contacted > 0 {
                ui.add_space(12.0);
                badge(
                    ui,
                    egui::RichText::new(format!("✔ {contacted} contacted"))
                        .color(theme::CONTACTED)
                        .strong(),
                    theme::CONTACTED_BG,
                    theme::CONTACTED,
                );
            }
        });
    });
}
