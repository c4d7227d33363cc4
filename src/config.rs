//! Runtime-tunable game configuration.
//!
//! The six source revisions of this game differ only in tunables: speeds,
//! padding, spawn cadence, hitbox scaling, control scheme. [`GameConfig`]
//! enumerates all of them in one struct. Every field defaults to the
//! compile-time constant below; an optional TOML file can override any
//! subset (missing keys keep their defaults, so a minimal file overrides
//! just the values you care about).

use std::fmt;
use std::path::Path;

use serde::Deserialize;

// ── Compile-time defaults ─────────────────────────────────────────────────────

pub const GAME_DURATION_SECS: u32 = 30;
pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 450.0;
pub const GAME_PADDING: f32 = 40.0;
pub const KEYBOARD_SPEED: f32 = 150.0;
pub const POINTER_SPEED: f32 = 200.0;
pub const POINTER_DEAD_ZONE: f32 = 5.0;
pub const FLICK_FRICTION: f32 = 0.92;
pub const FLICK_MIN_SPEED: f32 = 10.0;
pub const FISH_SPAWN_INTERVAL_MS: u64 = 1000;
pub const FISH_SPEED_MIN: f32 = 80.0;
pub const FISH_SPEED_MAX: f32 = 150.0;
pub const SPAWN_EDGE_OFFSET: f32 = 20.0;
pub const SPAWN_Y_MARGIN: f32 = 50.0;
pub const CULL_MARGIN: f32 = 100.0;
pub const SHARK_SIZE: f32 = 40.0;
pub const FISH_SIZE: f32 = 32.0;
pub const SHARK_HITBOX_SCALE: f32 = 0.4;
pub const FISH_HITBOX_SCALE: f32 = 0.5;
pub const FACING_DEAD_ZONE: f32 = 10.0;
pub const INITIAL_FISH: u32 = 3;
pub const DRIFT_VY_MAX: f32 = 60.0;

// ── Enumerated tunables ───────────────────────────────────────────────────────

/// Which of the two fish motion models the pool uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionModel {
    /// Deterministic linear crossing to a mirrored exit point.
    Glide,
    /// Constant velocity with vertical reflection inside the play rectangle.
    Drift,
}

/// What pointer release does. Keyboard input works under every scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    /// Release stops the shark immediately.
    Drag,
    /// Release keeps the last drag velocity, decaying by `flick_friction`
    /// per frame until it drops below `flick_min_speed`.
    Flick,
}

// ── Config struct ─────────────────────────────────────────────────────────────

/// Every gameplay tunable in one place.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Session length in seconds.
    pub duration_secs: u32,
    /// Logical field size, in field units (the frontend scales to cells).
    pub field_width: f32,
    pub field_height: f32,
    /// Margin on every side of the field; the shark is clamped inside it.
    pub padding: f32,
    pub keyboard_speed: f32,
    pub pointer_speed: f32,
    /// Pointer movement below this distance is ignored.
    pub pointer_dead_zone: f32,
    pub flick_friction: f32,
    pub flick_min_speed: f32,
    /// One accumulator per entry; some revisions run two overlapping
    /// spawn timers at different intervals.
    pub spawn_intervals_ms: Vec<u64>,
    pub fish_speed_min: f32,
    pub fish_speed_max: f32,
    /// How far past the edge a fish spawns.
    pub spawn_edge_offset: f32,
    /// Vertical band at the top and bottom where fish never spawn.
    pub spawn_y_margin: f32,
    /// Fish are culled once fully outside the field expanded by this margin.
    pub cull_margin: f32,
    pub shark_size: f32,
    pub fish_size: f32,
    /// Hitboxes are deliberately smaller than the sprites.
    pub shark_hitbox_scale: f32,
    pub fish_hitbox_scale: f32,
    /// |vx| must exceed this before facing flips, preventing flicker.
    pub facing_dead_zone: f32,
    /// Fish spawned immediately when a session starts.
    pub initial_fish: u32,
    /// Largest vertical speed a drifting fish can get.
    pub drift_vy_max: f32,
    pub motion_model: MotionModel,
    pub control_scheme: ControlScheme,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            duration_secs: GAME_DURATION_SECS,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            padding: GAME_PADDING,
            keyboard_speed: KEYBOARD_SPEED,
            pointer_speed: POINTER_SPEED,
            pointer_dead_zone: POINTER_DEAD_ZONE,
            flick_friction: FLICK_FRICTION,
            flick_min_speed: FLICK_MIN_SPEED,
            spawn_intervals_ms: vec![FISH_SPAWN_INTERVAL_MS],
            fish_speed_min: FISH_SPEED_MIN,
            fish_speed_max: FISH_SPEED_MAX,
            spawn_edge_offset: SPAWN_EDGE_OFFSET,
            spawn_y_margin: SPAWN_Y_MARGIN,
            cull_margin: CULL_MARGIN,
            shark_size: SHARK_SIZE,
            fish_size: FISH_SIZE,
            shark_hitbox_scale: SHARK_HITBOX_SCALE,
            fish_hitbox_scale: FISH_HITBOX_SCALE,
            facing_dead_zone: FACING_DEAD_ZONE,
            initial_fish: INITIAL_FISH,
            drift_vy_max: DRIFT_VY_MAX,
            motion_model: MotionModel::Glide,
            control_scheme: ControlScheme::Drag,
        }
    }
}

impl GameConfig {
    /// Load from a TOML file, overriding defaults with any keys present.
    pub fn load_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&text).map_err(ConfigError::Parse)
    }

    /// Shark hitbox half-extent in field units.
    pub fn shark_hitbox(&self) -> f32 {
        self.shark_size * self.shark_hitbox_scale / 2.0
    }

    /// Fish hitbox half-extent in field units.
    pub fn fish_hitbox(&self) -> f32 {
        self.fish_size * self.fish_hitbox_scale / 2.0
    }

    /// Clamp bounds for an entity of half-extent `half` kept inside the
    /// padded play rectangle: (min_x, max_x, min_y, max_y).
    pub fn play_bounds(&self, half: f32) -> (f32, f32, f32, f32) {
        (
            self.padding + half,
            self.field_width - self.padding - half,
            self.padding + half,
            self.field_height - self.padding - half,
        )
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a config file failed to load. The frontend treats a missing file as
/// "use defaults" and only surfaces parse failures.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "could not parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
