use board_core::{
    projection::employer_count_label, BoardObserver, BoardStore, CardEmphasis, ListCard,
    StatusDot,
};
use eframe::egui;
use shared::domain::EmployerId;

use crate::{
    controller::events::{MailTemplate, UiEvent},
    ui::theme,
};

pub const EMPTY_TITLE: &str = "No opportunities found";
pub const EMPTY_HINT: &str =
    "Try adjusting your filters to discover more job opportunities across Australia";

/// Scroll bookkeeping for the employer list.
#[derive(Debug, Default)]
pub struct ListViewState {
    last_focus_serial: u64,
    scroll_target: Option<EmployerId>,
}

impl ListViewState {
    pub fn scroll_target(&self) -> Option<&EmployerId> {
        self.scroll_target.as_ref()
    }
}

impl BoardObserver for ListViewState {
    fn observe(&mut self, store: &BoardStore) {
        if store.focus_serial() == self.last_focus_serial {
            return;
        }
        self.last_focus_serial = store.focus_serial();
        self.scroll_target = store.selected_visible().map(|record| record.id.clone());
    }
}

fn card_colors(card: &ListCard<'_>) -> (egui::Color32, egui::Stroke) {
    match card.emphasis() {
        CardEmphasis::Selected => (
            theme::lighten_color(theme::PRIMARY, 0.9),
            egui::Stroke::new(2.0, theme::PRIMARY),
        ),
        CardEmphasis::Contacted => (
            theme::CONTACTED_BG,
            egui::Stroke::new(1.0, theme::CONTACTED),
        ),
        CardEmphasis::Default => (theme::CARD_BG, egui::Stroke::new(1.0, theme::BORDER)),
    }
}

fn paint_status_dot(ui: &egui::Ui, rect: egui::Rect, dot: StatusDot) {
    let center = egui::pos2(rect.right() - 10.0, rect.top() + 10.0);
    match dot {
        StatusDot::Contacted => {
            ui.painter().circle_filled(center, 5.0, theme::CONTACTED);
        }
        StatusDot::SelectedPulse => {
            let t = ui.input(|i| i.time) as f32;
            let pulse = 0.5 + 0.5 * (t * 4.0).sin();
            ui.painter().circle_filled(
                center,
                8.0 * pulse + 4.0,
                theme::PRIMARY.gamma_multiply(0.25 * (1.0 - pulse)),
            );
            ui.painter().circle_filled(center, 5.0, theme::PRIMARY);
            ui.ctx().request_repaint();
        }
    }
}

fn show_card(ui: &mut egui::Ui, card: &ListCard<'_>, events: &mut Vec<UiEvent>) -> egui::Response {
    let record = card.record;
    let accent = theme::color(card.style.accent);
    let (fill, stroke) = card_colors(card);

    let card_response = ui
        .scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
            egui::Frame::new()
                .fill(fill)
                .stroke(stroke)
                .corner_radius(12)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        egui::Frame::new()
                            .fill(theme::color(card.style.background))
                            .corner_radius(8)
                            .inner_margin(egui::Margin::same(6))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(card.style.icon).size(20.0));
                            });
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(&record.name)
                                    .strong()
                                    .size(16.0)
                                    .color(theme::TEXT),
                            );
                            ui.label(egui::RichText::new(&record.industry).color(accent));
                        });
                    });
                    ui.add_space(6.0);
                    ui.label(format!("👤 {}", record.contact_name()));
                    ui.label(
                        egui::RichText::new(format!("📍 {}", record.address))
                            .color(theme::MUTED_TEXT),
                    );
                    ui.label(
                        egui::RichText::new(format!("📞 {}", record.phone))
                            .color(theme::MUTED_TEXT),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let email = egui::Button::new(
                            egui::RichText::new("✉ Send Email").color(egui::Color32::WHITE),
                        )
                        .fill(theme::PRIMARY);
                        if ui.add(email).clicked() {
                            events.push(UiEvent::SendEmail {
                                id: record.id.clone(),
                                template: MailTemplate::Inquiry,
                            });
                        }
                        if ui.button("📞 Call Now").clicked() {
                            events.push(UiEvent::Call {
                                id: record.id.clone(),
                                copy_to_clipboard: true,
                            });
                        }
                        let contact = if card.contacted {
                            egui::Button::new(
                                egui::RichText::new(format!("✔ {}", card.contact_button_label()))
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(theme::CONTACTED)
                        } else {
                            egui::Button::new(card.contact_button_label())
                        };
                        if ui.add(contact).clicked() {
                            events.push(UiEvent::ToggleContacted(record.id.clone()));
                        }
                    });
                })
        })
        .response;

    if let Some(dot) = card.status_dot() {
        paint_status_dot(ui, card_response.rect, dot);
    }
    if card_response.clicked() {
        events.push(UiEvent::CardClicked(record.id.clone()));
    }
    card_response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Renders the filtered employers; card clicks and actions come back as events.
pub fn show_list_view(
    ui: &mut egui::Ui,
    store: &BoardStore,
    state: &mut ListViewState,
) -> Vec<UiEvent> {
    let mut events = Vec::new();
    let cards = store.list_cards();

    ui.label(
        egui::RichText::new(employer_count_label(cards.len()))
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(8.0);

    if cards.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(EMPTY_TITLE)
                    .strong()
                    .size(18.0)
                    .color(theme::TEXT),
            );
            ui.add_space(6.0);
            ui.label(egui::RichText::new(EMPTY_HINT).color(theme::MUTED_TEXT));
        });
        return events;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in &cards {
                let response = show_card(ui, card, &mut events);
                if state.scroll_target.as_ref() == Some(&card.record.id) {
                    response.scroll_to_me(Some(egui::Align::Center));
                    state.scroll_target = None;
                }
                ui.add_space(10.0);
            }
        });
    events
}
