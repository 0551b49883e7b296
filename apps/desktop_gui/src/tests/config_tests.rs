use std::{collections::HashMap, path::PathBuf};

use board_core::map::{DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, MAX_ZOOM};

use super::{apply_env_overrides, parse_settings, Settings};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_center_on_australia() {
    let settings = Settings::default();
    let camera = settings.initial_camera();
    assert_eq!(camera.center, DEFAULT_CENTER);
    assert_eq!(camera.zoom, DEFAULT_ZOOM);
    assert_eq!(settings.focus_zoom(), FOCUS_ZOOM);
    assert!(settings.dataset_path.is_none());
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let settings = parse_settings(
        r#"
        dataset_path = "/srv/jobs/companies.json"
        focus_zoom = 12.0
        "#,
    )
    .expect("valid toml");
    assert_eq!(
        settings.dataset_path,
        Some(PathBuf::from("/srv/jobs/companies.json"))
    );
    assert_eq!(settings.focus_zoom(), 12.0);
    assert_eq!(settings.window_title, Settings::default().window_title);
}

#[test]
fn malformed_file_is_rejected() {
    assert!(parse_settings("focus_zoom = \"close\"").is_err());
}

#[test]
fn env_overrides_win_and_bad_numbers_are_skipped() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("JOB_BOARD_DATASET", "/tmp/other.json"),
            ("JOB_BOARD__FOCUS_ZOOM", "11"),
            ("JOB_BOARD__INITIAL_ZOOM", "not-a-number"),
            ("JOB_BOARD__WINDOW_TITLE", "   "),
        ]),
    );
    assert_eq!(settings.dataset_path, Some(PathBuf::from("/tmp/other.json")));
    assert_eq!(settings.focus_zoom, 11.0);
    assert_eq!(settings.initial_zoom, DEFAULT_ZOOM);
    assert_eq!(settings.window_title, Settings::default().window_title);
}

#[test]
fn out_of_range_camera_values_fall_back() {
    let settings = Settings {
        map_center_lat: 123.0,
        initial_zoom: 40.0,
        focus_zoom: f32::NAN,
        ..Settings::default()
    };
    let camera = settings.initial_camera();
    assert_eq!(camera.center, DEFAULT_CENTER);
    assert_eq!(camera.zoom, MAX_ZOOM);
    assert_eq!(settings.focus_zoom(), FOCUS_ZOOM);
}
