use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use board_core::map::{MapCamera, DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, MAX_ZOOM, MIN_ZOOM};
use serde::Deserialize;
use shared::domain::Coordinates;

pub const CONFIG_FILE_NAME: &str = "job_board.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset_path: Option<PathBuf>,
    pub window_title: String,
    pub map_center_lat: f64,
    pub map_center_lon: f64,
    pub initial_zoom: f32,
    pub focus_zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            window_title: "Work & Travel Jobs".into(),
            map_center_lat: DEFAULT_CENTER.latitude,
            map_center_lon: DEFAULT_CENTER.longitude,
            initial_zoom: DEFAULT_ZOOM,
            focus_zoom: FOCUS_ZOOM,
        }
    }
}

impl Settings {
    /// Starting viewport; out-of-range values fall back to the defaults.
    pub fn initial_camera(&self) -> MapCamera {
        let center = Coordinates::new(self.map_center_lat, self.map_center_lon);
        MapCamera {
            center: if center.is_valid() {
                center
            } else {
                DEFAULT_CENTER
            },
            zoom: if self.initial_zoom.is_finite() {
                self.initial_zoom.clamp(MIN_ZOOM, MAX_ZOOM)
            } else {
                DEFAULT_ZOOM
            },
        }
    }

    pub fn focus_zoom(&self) -> f32 {
        if self.focus_zoom.is_finite() {
            self.focus_zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            FOCUS_ZOOM
        }
    }
}

/// Defaults, then `job_board.toml` (explicit path, working directory, or the
/// user config dir), then `JOB_BOARD_*` environment variables.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            parse_settings(&raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?
        }
        None => discover_config_file()
            .and_then(|path| {
                let raw = fs::read_to_string(&path).ok()?;
                match parse_settings(&raw) {
                    Ok(settings) => {
                        tracing::info!(path = %path.display(), "loaded settings file");
                        Some(settings)
                    }
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "ignoring invalid settings file");
                        None
                    }
                }
            })
            .unwrap_or_default(),
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str::<Settings>(raw)?)
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("job_board").join(CONFIG_FILE_NAME);
    user.is_file().then_some(user)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("JOB_BOARD_DATASET") {
        settings.dataset_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read("JOB_BOARD__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = read("JOB_BOARD__MAP_CENTER_LAT") {
        if let Ok(parsed) = v.trim().parse::<f64>() {
            settings.map_center_lat = parsed;
        }
    }
    if let Some(v) = read("JOB_BOARD__MAP_CENTER_LON") {
        if let Ok(parsed) = v.trim().parse::<f64>() {
            settings.map_center_lon = parsed;
        }
    }
    if let Some(v) = read("JOB_BOARD__INITIAL_ZOOM") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.initial_zoom = parsed;
        }
    }
    if let Some(v) = read("JOB_BOARD__FOCUS_ZOOM") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.focus_zoom = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
