use std::sync::Arc;

use board_core::{
    contact::{place_call, send_mail},
    BoardObserver, BoardStore, ChoiceOption, ClipboardSink, Dataset, MailIntent,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::EmployerId;

use crate::config::Settings;
use crate::controller::events::{
    MailTemplate, StatusBanner, StatusBannerSeverity, UiEvent,
};
use crate::controller::orchestration::dispatch_ui_event;
use crate::platform::{EguiUriLauncher, SystemClipboard};
use crate::ui::panels::{
    filter_panel::show_filter_panel,
    header::show_header,
    list_view::{show_list_view, ListViewState},
    map_view::{show_map_view, MapPanelState},
};
use crate::ui::theme;

pub struct JobBoardApp {
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    title: String,
    store: BoardStore,
    map: MapPanelState,
    list: ListViewState,
    clipboard: SystemClipboard,
    region_options: Vec<ChoiceOption>,
    industry_options: Vec<ChoiceOption>,
    status: String,
    status_banner: Option<StatusBanner>,
    observed_revision: u64,
    theme_applied: bool,
}

impl JobBoardApp {
    pub fn new(
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
        dataset: Arc<Dataset>,
        settings: &Settings,
    ) -> Self {
        let industry_options = dataset.industry_options();
        let status = format!("{} employers loaded", dataset.len());
        Self {
            ui_tx,
            ui_rx,
            title: settings.window_title.clone(),
            store: BoardStore::new(dataset),
            map: MapPanelState::new(settings.initial_camera(), settings.focus_zoom()),
            list: ListViewState::default(),
            clipboard: SystemClipboard::default(),
            region_options: Dataset::region_options(),
            industry_options,
            status,
            status_banner: None,
            observed_revision: 0,
            theme_applied: false,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        ctx.set_visuals(theme::board_visuals());
        self.theme_applied = true;
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SendEmail { id, template } => self.send_email(ctx, &id, template),
                UiEvent::Call {
                    id,
                    copy_to_clipboard,
                } => self.call(ctx, &id, copy_to_clipboard),
                other => {
                    if let Some(action) = other.into_board_action() {
                        self.store.dispatch(action);
                    }
                }
            }
        }

        if self.store.revision() != self.observed_revision {
            self.observed_revision = self.store.revision();
            let observers: &mut [&mut dyn BoardObserver] =
                &mut [&mut self.map.reconciler, &mut self.list];
            self.store.notify(observers);
            self.map.apply_pending();
        }
    }

    fn send_email(&mut self, ctx: &egui::Context, id: &EmployerId, template: MailTemplate) {
        let Some(record) = self.store.dataset().get(id) else {
            tracing::warn!(employer = %id, "email requested for unknown employer");
            return;
        };
        let intent = match template {
            MailTemplate::Inquiry => MailIntent::inquiry(record),
            MailTemplate::Plain => MailIntent::plain(record),
        };
        send_mail(&EguiUriLauncher::new(ctx), &intent);
        self.status = format!("Opening mail client for {}", record.name);
    }

    fn call(&mut self, ctx: &egui::Context, id: &EmployerId, copy_to_clipboard: bool) {
        let Some(record) = self.store.dataset().get(id) else {
            tracing::warn!(employer = %id, "call requested for unknown employer");
            return;
        };
        let launcher = EguiUriLauncher::new(ctx);
        let clipboard: Option<&mut dyn ClipboardSink> = if copy_to_clipboard {
            Some(&mut self.clipboard)
        } else {
            None
        };
        let copied = place_call(record, clipboard, &launcher);
        self.status = format!("Calling {}", record.name);
        if copy_to_clipboard {
            self.status_banner = Some(if copied {
                StatusBanner::info(format!("Phone number copied: {}", record.phone))
            } else {
                StatusBanner::warning(format!(
                    "Could not copy the phone number. Dial {} manually.",
                    record.phone
                ))
            });
        }
    }

    fn emit(&mut self, events: Vec<UiEvent>) {
        for event in events {
            dispatch_ui_event(&self.ui_tx, event, &mut self.status);
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let accent = match banner.severity {
                StatusBannerSeverity::Info => theme::CONTACTED,
                StatusBannerSeverity::Warning => theme::WARNING,
            };

            egui::Frame::new()
                .fill(theme::lighten_color(accent, 0.85))
                .stroke(egui::Stroke::new(1.0, accent))
                .corner_radius(8)
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(theme::TEXT));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn show_board(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("board_header")
            .frame(
                egui::Frame::new()
                    .fill(theme::CARD_BG)
                    .inner_margin(egui::Margin::symmetric(20, 14)),
            )
            .show(ctx, |ui| {
                show_header(ui, &self.store, &self.title);
            });

        let mut filter_event = None;
        egui::TopBottomPanel::top("board_filters")
            .frame(
                egui::Frame::new()
                    .fill(theme::APP_BG)
                    .inner_margin(egui::Margin::symmetric(20, 10)),
            )
            .show(ctx, |ui| {
                filter_event = show_filter_panel(
                    ui,
                    self.store.filter(),
                    &self.region_options,
                    &self.industry_options,
                );
            });
        self.emit(filter_event.into_iter().collect());

        egui::TopBottomPanel::bottom("board_status")
            .frame(
                egui::Frame::new()
                    .fill(theme::CARD_BG)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                self.show_status_banner(ui);
                ui.label(egui::RichText::new(&self.status).color(theme::MUTED_TEXT).small());
            });

        let mut list_events = Vec::new();
        egui::SidePanel::left("employer_list")
            .resizable(true)
            .default_width(420.0)
            .min_width(320.0)
            .frame(
                egui::Frame::new()
                    .fill(theme::APP_BG)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                list_events = show_list_view(ui, &self.store, &mut self.list);
            });
        self.emit(list_events);

        let mut map_events = Vec::new();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::MAP_WATER))
            .show(ctx, |ui| {
                map_events = show_map_view(ui, &self.store, &mut self.map);
            });
        self.emit(map_events);
    }
}

impl eframe::App for JobBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.apply_theme_if_needed(ctx);

        self.show_board(ctx);

        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}
