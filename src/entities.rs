/// All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen: waiting for the player to begin a session.
    Start,
    Playing,
    GameOver,
}

/// Horizontal mirror of a sprite. Entities face the direction they travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Facing for an entity moving with horizontal velocity `vx`.
    pub fn from_vx(vx: f32) -> Facing {
        if vx < 0.0 { Facing::Left } else { Facing::Right }
    }
}

/// Which edge of the field a fish entered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnSide {
    Left,
    Right,
}

/// How a fish moves across the field.
///
/// `Glide` is the deterministic crossing used by the tween-based revisions:
/// the fish travels horizontally at a fixed speed toward a mirrored exit
/// point past the far edge. `Drift` is the physics-style variant: a constant
/// velocity vector whose vertical component reflects off the padded bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FishMotion {
    Glide { target_x: f32, speed: f32 },
    Drift { vx: f32, vy: f32 },
}

// ── Player & fish ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Shark {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub facing: Facing,
    /// Half-extent of the square hitbox, in field units.
    pub hitbox: f32,
}

#[derive(Clone, Debug)]
pub struct Fish {
    /// Unique within one pool lifetime; the capture guard keys on this.
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub side: SpawnSide,
    /// Half-extent of the square hitbox, in field units.
    pub hitbox: f32,
    pub motion: FishMotion,
}

// ── State-change events for the presentation layer ────────────────────────────

/// Emitted by the session state machine; the frontend drains these each
/// frame and updates the screen accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted,
    ScoreChanged(u32),
    HighScoreChanged(u32),
    TimeChanged(u32),
    /// Carries the final score of the session that just ended.
    SessionEnded(u32),
    SessionReset,
}
