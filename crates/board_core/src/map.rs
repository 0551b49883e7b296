//! Map-side reconciliation: camera state, fly-to transitions, popup ownership and
//! the Web Mercator projection the painter uses.

use std::f64::consts::PI;

use shared::domain::{Coordinates, EmployerId};
use tracing::debug;

use crate::store::{BoardObserver, BoardStore};

pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: -25.2744,
    longitude: 133.7751,
};
pub const DEFAULT_ZOOM: f32 = 5.0;
pub const FOCUS_ZOOM: f32 = 10.0;
pub const FLY_DURATION_SECS: f32 = 1.0;
pub const MIN_ZOOM: f32 = 3.0;
pub const MAX_ZOOM: f32 = 16.0;

const TILE_SIZE: f64 = 256.0;
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub center: Coordinates,
    pub zoom: f32,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    from: MapCamera,
    to: MapCamera,
    elapsed: f32,
    duration: f32,
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl CameraTransition {
    pub fn new(from: MapCamera, to: MapCamera, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    pub fn target(&self) -> MapCamera {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves the transition forward by `dt` seconds and returns the camera to draw.
    pub fn advance(&mut self, dt: f32) -> MapCamera {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.current()
    }

    pub fn current(&self) -> MapCamera {
        if self.duration <= f32::EPSILON || self.is_finished() {
            return self.to;
        }
        let t = f64::from(ease_in_out(self.elapsed / self.duration));
        MapCamera {
            center: Coordinates::new(
                lerp(self.from.center.latitude, self.to.center.latitude, t),
                lerp(self.from.center.longitude, self.to.center.longitude, t),
            ),
            zoom: lerp(f64::from(self.from.zoom), f64::from(self.to.zoom), t) as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    FlyTo { id: EmployerId, target: MapCamera },
    OpenPopup(EmployerId),
    /// Programmatic close; must not be reported back as a user dismissal.
    ClosePopup(EmployerId),
}

/// Turns store changes into map commands. Re-centres and opens the popup when
/// a select lands on a visible employer; closes the popup when the focused
/// employer is deselected or filtered out.
#[derive(Debug, Clone)]
pub struct MapReconciler {
    focus_zoom: f32,
    last_revision: Option<u64>,
    last_focus_serial: u64,
    focused: Option<EmployerId>,
    pending: Vec<MapCommand>,
}

impl Default for MapReconciler {
    fn default() -> Self {
        Self::new(FOCUS_ZOOM)
    }
}

impl MapReconciler {
    pub fn new(focus_zoom: f32) -> Self {
        Self {
            focus_zoom: focus_zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            last_revision: None,
            last_focus_serial: 0,
            focused: None,
            pending: Vec::new(),
        }
    }

    pub fn focused(&self) -> Option<&EmployerId> {
        self.focused.as_ref()
    }

    pub fn reconcile(&mut self, store: &BoardStore) -> Vec<MapCommand> {
        if self.last_revision == Some(store.revision()) {
            return Vec::new();
        }
        self.last_revision = Some(store.revision());

        let focus_requested = store.focus_serial() != self.last_focus_serial;
        self.last_focus_serial = store.focus_serial();

        let mut commands = Vec::new();
        match store.selected_visible() {
            Some(record) => {
                let newly_visible = self.focused.as_ref() != Some(&record.id);
                if focus_requested || newly_visible {
                    commands.push(MapCommand::FlyTo {
                        id: record.id.clone(),
                        target: MapCamera {
                            center: record.coordinates,
                            zoom: self.focus_zoom,
                        },
                    });
                    commands.push(MapCommand::OpenPopup(record.id.clone()));
                    self.focused = Some(record.id.clone());
                }
            }
            None => {
                if let Some(previous) = self.focused.take() {
                    commands.push(MapCommand::ClosePopup(previous));
                }
            }
        }
        if !commands.is_empty() {
            debug!(revision = store.revision(), ?commands, "map reconciled");
        }
        commands
    }

    pub fn take_commands(&mut self) -> Vec<MapCommand> {
        std::mem::take(&mut self.pending)
    }
}

impl BoardObserver for MapReconciler {
    fn observe(&mut self, store: &BoardStore) {
        let commands = self.reconcile(store);
        self.pending.extend(commands);
    }
}

/// Presentation state owned by the map view itself.
#[derive(Debug, Clone, Default)]
pub struct MapViewState {
    camera: MapCamera,
    transition: Option<CameraTransition>,
    open_popup: Option<EmployerId>,
}

impl MapViewState {
    pub fn new(camera: MapCamera) -> Self {
        Self {
            camera,
            transition: None,
            open_popup: None,
        }
    }

    pub fn camera(&self) -> MapCamera {
        self.camera
    }

    pub fn open_popup(&self) -> Option<&EmployerId> {
        self.open_popup.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn apply(&mut self, command: MapCommand) {
        match command {
            MapCommand::FlyTo { target, .. } => {
                self.transition = Some(CameraTransition::new(
                    self.camera,
                    target,
                    FLY_DURATION_SECS,
                ));
            }
            MapCommand::OpenPopup(id) => self.open_popup = Some(id),
            MapCommand::ClosePopup(id) => {
                if self.open_popup.as_ref() == Some(&id) {
                    self.open_popup = None;
                }
            }
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if let Some(transition) = self.transition.as_mut() {
            self.camera = transition.advance(dt);
            if transition.is_finished() {
                self.transition = None;
            }
        }
    }

    /// The user dismissed the popup. Returns the employer whose popup closed.
    pub fn dismiss_popup(&mut self) -> Option<EmployerId> {
        self.open_popup.take()
    }

    /// Drags the map by a screen-space delta; interrupts any fly-to.
    pub fn pan_pixels(&mut self, dx: f32, dy: f32) {
        self.transition = None;
        let projection = MapProjection::new(self.camera);
        let (x, y) = projection.world_xy(self.camera.center);
        self.camera.center = projection.unproject_world(x - f64::from(dx), y - f64::from(dy));
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.transition = None;
        self.camera.zoom = (self.camera.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Web Mercator projection for a camera.
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    camera: MapCamera,
    world_size: f64,
}

impl MapProjection {
    pub fn new(camera: MapCamera) -> Self {
        Self {
            camera,
            world_size: TILE_SIZE * 2f64.powf(f64::from(camera.zoom)),
        }
    }

    pub fn world_xy(&self, coordinates: Coordinates) -> (f64, f64) {
        let latitude = coordinates
            .latitude
            .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
            .to_radians();
        let x = (coordinates.longitude + 180.0) / 360.0 * self.world_size;
        let y = (1.0 - (latitude.tan() + 1.0 / latitude.cos()).ln() / PI) / 2.0 * self.world_size;
        (x, y)
    }

    pub fn unproject_world(&self, x: f64, y: f64) -> Coordinates {
        let longitude = x / self.world_size * 360.0 - 180.0;
        let latitude = (PI * (1.0 - 2.0 * y / self.world_size))
            .sinh()
            .atan()
            .to_degrees();
        Coordinates::new(
            latitude.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE),
            longitude.clamp(-180.0, 180.0),
        )
    }

    /// Offset in pixels of `coordinates` from the viewport centre.
    pub fn offset_from_center(&self, coordinates: Coordinates) -> (f32, f32) {
        let (cx, cy) = self.world_xy(self.camera.center);
        let (x, y) = self.world_xy(coordinates);
        ((x - cx) as f32, (y - cy) as f32)
    }
}

#[cfg(test)]
#[path = "tests/map_tests.rs"]
mod tests;
