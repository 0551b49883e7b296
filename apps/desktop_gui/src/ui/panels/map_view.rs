use board_core::{
    projection::legend_entries, BoardStore, MapCamera, MapMarker, MapProjection, MapReconciler,
    MapViewState,
};
use eframe::egui;
use shared::domain::{Coordinates, EmployerId};

use crate::{
    controller::events::{MailTemplate, UiEvent},
    ui::theme,
};

const SCROLL_ZOOM_STEP: f32 = 1.0 / 120.0;
const MAX_FRAME_DT: f32 = 0.1;

// Coarse mainland and Tasmania outlines, (latitude, longitude).
const MAINLAND_OUTLINE: &[(f64, f64)] = &[
    (-10.7, 142.5),
    (-12.0, 143.3),
    (-14.5, 144.5),
    (-16.0, 145.4),
    (-19.0, 146.5),
    (-20.0, 148.7),
    (-22.5, 150.7),
    (-24.5, 152.5),
    (-26.5, 153.1),
    (-28.2, 153.6),
    (-30.5, 153.0),
    (-32.9, 151.8),
    (-34.0, 151.2),
    (-35.5, 150.4),
    (-37.5, 149.9),
    (-37.8, 148.0),
    (-38.4, 146.3),
    (-39.1, 146.4),
    (-38.3, 144.8),
    (-38.8, 143.5),
    (-38.2, 141.0),
    (-37.5, 140.0),
    (-35.7, 139.2),
    (-35.6, 138.1),
    (-34.9, 138.5),
    (-34.2, 137.7),
    (-35.2, 136.8),
    (-33.9, 137.4),
    (-32.5, 137.8),
    (-33.1, 137.0),
    (-34.8, 135.6),
    (-32.5, 133.5),
    (-31.5, 131.0),
    (-31.7, 128.0),
    (-32.2, 125.0),
    (-33.9, 123.5),
    (-33.9, 121.0),
    (-34.4, 119.5),
    (-35.0, 117.8),
    (-34.4, 115.1),
    (-33.5, 115.0),
    (-31.9, 115.7),
    (-29.0, 114.9),
    (-26.5, 113.3),
    (-24.0, 113.4),
    (-21.8, 114.1),
    (-20.4, 116.8),
    (-19.9, 118.8),
    (-18.0, 122.2),
    (-16.4, 123.0),
    (-14.8, 125.5),
    (-14.0, 127.5),
    (-15.0, 129.0),
    (-13.5, 129.9),
    (-12.4, 130.8),
    (-11.3, 132.0),
    (-12.1, 133.0),
    (-11.9, 136.0),
    (-12.3, 136.9),
    (-13.8, 135.9),
    (-15.0, 135.5),
    (-16.5, 137.5),
    (-17.6, 140.0),
    (-17.4, 140.9),
    (-15.0, 141.5),
    (-12.5, 141.7),
];

const TASMANIA_OUTLINE: &[(f64, f64)] = &[
    (-40.8, 144.7),
    (-41.0, 146.5),
    (-40.9, 148.3),
    (-42.2, 148.3),
    (-43.2, 147.5),
    (-43.6, 146.0),
    (-42.2, 145.2),
];

/// Map-side presentation state: camera plus the reconciler feeding it.
#[derive(Debug, Clone)]
pub struct MapPanelState {
    pub view: MapViewState,
    pub reconciler: MapReconciler,
}

impl MapPanelState {
    pub fn new(camera: MapCamera, focus_zoom: f32) -> Self {
        Self {
            view: MapViewState::new(camera),
            reconciler: MapReconciler::new(focus_zoom),
        }
    }

    /// Moves queued reconciler commands onto the camera and popup.
    pub fn apply_pending(&mut self) {
        for command in self.reconciler.take_commands() {
            self.view.apply(command);
        }
    }
}

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

struct ScreenProjection {
    projection: MapProjection,
    origin: egui::Pos2,
}

impl ScreenProjection {
    fn new(camera: MapCamera, rect: egui::Rect) -> Self {
        Self {
            projection: MapProjection::new(camera),
            origin: rect.center(),
        }
    }

    fn to_screen(&self, coordinates: Coordinates) -> egui::Pos2 {
        let (dx, dy) = self.projection.offset_from_center(coordinates);
        self.origin + egui::vec2(dx, dy)
    }
}

fn paint_coastline(painter: &egui::Painter, screen: &ScreenProjection) {
    let stroke = egui::Stroke::new(1.5, theme::MAP_LAND_STROKE);
    for outline in [MAINLAND_OUTLINE, TASMANIA_OUTLINE] {
        let points = outline
            .iter()
            .map(|&(lat, lon)| screen.to_screen(Coordinates::new(lat, lon)))
            .collect::<Vec<_>>();
        painter.add(egui::Shape::closed_line(points, stroke));
    }
}

fn paint_marker(painter: &egui::Painter, marker: &MapMarker<'_>, center: egui::Pos2) {
    let glyph = marker.glyph;
    let radius = glyph.size() / 2.0;
    painter.circle_filled(
        center + egui::vec2(0.0, 2.0),
        radius,
        egui::Color32::from_black_alpha(50),
    );
    painter.circle(
        center,
        radius,
        theme::color(glyph.style.accent),
        egui::Stroke::new(glyph.stroke_width(), egui::Color32::WHITE),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        glyph.initial,
        egui::FontId::proportional(glyph.font_size()),
        egui::Color32::WHITE,
    );
}

fn marker_at<'a>(
    markers: &'a [(MapMarker<'a>, egui::Pos2)],
    pointer: egui::Pos2,
) -> Option<&'a MapMarker<'a>> {
    markers
        .iter()
        .rev()
        .find(|(marker, center)| center.distance(pointer) <= marker.glyph.size() / 2.0)
        .map(|(marker, _)| marker)
}

fn show_zoom_controls(ui: &mut egui::Ui, rect: egui::Rect, view: &mut MapViewState) {
    let controls = egui::Rect::from_min_size(rect.min + egui::vec2(12.0, 12.0), egui::vec2(32.0, 72.0));
    ui_in_rect(ui, controls, |ui| {
        if ui.add_sized([32.0, 32.0], egui::Button::new("+")).clicked() {
            view.zoom_by(1.0);
        }
        if ui.add_sized([32.0, 32.0], egui::Button::new("−")).clicked() {
            view.zoom_by(-1.0);
        }
    });
}

fn show_legend(ui: &mut egui::Ui, rect: egui::Rect, store: &BoardStore) {
    let visible = store.visible();
    let Some(entries) = legend_entries(&visible) else {
        return;
    };
    let height = 34.0 + entries.len() as f32 * 22.0;
    let legend = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 196.0, rect.bottom() - height - 12.0),
        egui::vec2(184.0, height),
    );
    ui_in_rect(ui, legend, |ui| {
        egui::Frame::new()
            .fill(theme::CARD_BG.gamma_multiply(0.95))
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .corner_radius(10)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Industries").strong().size(13.0));
                for (industry, style) in &entries {
                    ui.horizontal(|ui| {
                        let (dot, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(dot.center(), 6.0, theme::color(style.accent));
                        ui.label(egui::RichText::new(industry).size(12.0));
                    });
                }
            });
    });
}

fn show_popup(
    ctx: &egui::Context,
    bounds: egui::Rect,
    anchor: egui::Pos2,
    marker: &MapMarker<'_>,
    events: &mut Vec<UiEvent>,
) -> bool {
    let popup = marker.popup();
    let id = marker.id().clone();
    let mut open = true;
    egui::Window::new(egui::RichText::new(popup.title).strong())
        .id(egui::Id::new(("employer_popup", id.as_str())))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(anchor)
        .constrain_to(bounds)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(popup.industry).color(theme::color(
                marker.glyph.style.accent,
            )));
            ui.label(format!("👤 {}", popup.contact_name));
            ui.label(egui::RichText::new(format!("📍 {}", popup.address)).color(theme::MUTED_TEXT));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .button("✉ Email")
                    .on_hover_text(popup.mail.to.as_str())
                    .clicked()
                {
                    events.push(UiEvent::SendEmail {
                        id: id.clone(),
                        template: MailTemplate::Plain,
                    });
                }
                if ui
                    .button("📞 Call")
                    .on_hover_text(popup.call.phone.as_str())
                    .clicked()
                {
                    events.push(UiEvent::Call {
                        id: id.clone(),
                        copy_to_clipboard: false,
                    });
                }
            });
        });
    open
}

/// Draws the map, handles pan/zoom locally, and reports marker and popup
/// interactions as events.
pub fn show_map_view(
    ui: &mut egui::Ui,
    store: &BoardStore,
    state: &mut MapPanelState,
) -> Vec<UiEvent> {
    let mut events = Vec::new();

    let dt = ui.input(|i| i.stable_dt).min(MAX_FRAME_DT);
    state.view.advance(dt);
    if state.view.is_animating() {
        ui.ctx().request_repaint();
    }

    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;

    if response.dragged() {
        let delta = response.drag_delta();
        state.view.pan_pixels(delta.x, delta.y);
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > f32::EPSILON {
            state.view.zoom_by(scroll * SCROLL_ZOOM_STEP);
        }
    }

    let screen = ScreenProjection::new(state.view.camera(), rect);
    painter.rect_filled(rect, 0.0, theme::MAP_WATER);
    paint_coastline(&painter, &screen);

    // Selected marker last so it draws on top.
    let mut markers = store
        .map_markers()
        .into_iter()
        .map(|marker| {
            let center = screen.to_screen(marker.position());
            (marker, center)
        })
        .collect::<Vec<_>>();
    markers.sort_by_key(|(marker, _)| marker.glyph.selected);
    for (marker, center) in &markers {
        if rect.expand(marker.glyph.size()).contains(*center) {
            paint_marker(&painter, marker, *center);
        }
    }

    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            if let Some(marker) = marker_at(&markers, pointer) {
                events.push(UiEvent::MarkerClicked(marker.id().clone()));
            }
        }
    }
    if let Some(pointer) = response.hover_pos() {
        if marker_at(&markers, pointer).is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    show_zoom_controls(ui, rect, &mut state.view);
    show_legend(ui, rect, store);

    let open_popup: Option<EmployerId> = state.view.open_popup().cloned();
    if let Some(id) = open_popup {
        if let Some((marker, center)) = markers.iter().find(|(marker, _)| *marker.id() == id) {
            let anchor = *center - egui::vec2(0.0, marker.glyph.size() / 2.0 + 6.0);
            if !show_popup(ui.ctx(), rect, anchor, marker, &mut events) {
                if let Some(closed) = state.view.dismiss_popup() {
                    events.push(UiEvent::PopupClosed(closed));
                }
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use board_core::MapCommand;
    use shared::domain::EmployerId;

    use super::MapPanelState;

    #[test]
    fn pending_commands_open_and_close_the_popup() {
        let mut state = MapPanelState::new(Default::default(), 10.0);
        let id = EmployerId::new("emp-004");
        state.view.apply(MapCommand::OpenPopup(id.clone()));
        assert_eq!(state.view.open_popup(), Some(&id));
        state.apply_pending();
        assert_eq!(state.view.open_popup(), Some(&id));
        state.view.apply(MapCommand::ClosePopup(id));
        assert_eq!(state.view.open_popup(), None);
    }
}
