use fish_catch::config::{ConfigError, ControlScheme, GameConfig, MotionModel};

use std::path::PathBuf;

fn temp_file(tag: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "fish_catch_config_{}_{}.toml",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_match_the_original_tuning() {
    let config = GameConfig::default();
    assert_eq!(config.duration_secs, 30);
    assert_eq!(config.field_width, 800.0);
    assert_eq!(config.field_height, 450.0);
    assert_eq!(config.padding, 40.0);
    assert_eq!(config.keyboard_speed, 150.0);
    assert_eq!(config.pointer_speed, 200.0);
    assert_eq!(config.spawn_intervals_ms, vec![1000]);
    assert_eq!(config.fish_speed_min, 80.0);
    assert_eq!(config.fish_speed_max, 150.0);
    assert_eq!(config.initial_fish, 3);
    assert_eq!(config.motion_model, MotionModel::Glide);
    assert_eq!(config.control_scheme, ControlScheme::Drag);
}

#[test]
fn hitbox_helpers_apply_the_scale_factors() {
    let config = GameConfig::default();
    assert_eq!(config.shark_hitbox(), 8.0); // 40 * 0.4 / 2
    assert_eq!(config.fish_hitbox(), 8.0); // 32 * 0.5 / 2
}

#[test]
fn play_bounds_shrink_the_field_by_padding_and_half_extent() {
    let config = GameConfig::default();
    let (min_x, max_x, min_y, max_y) = config.play_bounds(20.0);
    assert_eq!(min_x, 60.0);
    assert_eq!(max_x, 740.0);
    assert_eq!(min_y, 60.0);
    assert_eq!(max_y, 390.0);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let path = temp_file(
        "partial",
        r#"
duration_secs = 60
control_scheme = "flick"
spawn_intervals_ms = [1000, 600]
"#,
    );
    let config = GameConfig::load_from_path(&path).unwrap();
    assert_eq!(config.duration_secs, 60);
    assert_eq!(config.control_scheme, ControlScheme::Flick);
    assert_eq!(config.spawn_intervals_ms, vec![1000, 600]);
    // Untouched keys keep their defaults
    assert_eq!(config.keyboard_speed, 150.0);
    assert_eq!(config.motion_model, MotionModel::Glide);
}

#[test]
fn motion_model_parses_from_snake_case() {
    let path = temp_file("motion", "motion_model = \"drift\"\n");
    let config = GameConfig::load_from_path(&path).unwrap();
    assert_eq!(config.motion_model, MotionModel::Drift);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = PathBuf::from("/nonexistent/fish_catch.toml");
    match GameConfig::load_from_path(&path) {
        Err(ConfigError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = temp_file("invalid", "duration_secs = \"lots\"\n");
    match GameConfig::load_from_path(&path) {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected Parse error, got {:?}", other.map(|_| ())),
    }
}
