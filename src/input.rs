//! Input translation.
//!
//! Keyboard, pointer drag, and flick gestures all normalize into one
//! [`MoveIntent`] consumed once per frame. Keyboard is authoritative
//! whenever any direction key is held; pointer-derived velocity applies
//! otherwise. Under the flick scheme, releasing the pointer leaves the
//! last drag velocity coasting, decaying each frame until it snaps to zero.

use crate::config::{ControlScheme, GameConfig};

/// Normalized movement intent for one tick, in field units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub vx: f32,
    pub vy: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Default)]
pub struct InputTranslator {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// Anchor of an active drag; `None` when the pointer is up.
    drag_anchor: Option<(f32, f32)>,
    /// Last pointer-derived velocity. Lives past release when coasting.
    pointer_vx: f32,
    pointer_vy: f32,
    coasting: bool,
}

impl InputTranslator {
    pub fn new() -> InputTranslator {
        InputTranslator::default()
    }

    pub fn key_down(&mut self, dir: Dir) {
        match dir {
            Dir::Up => self.up = true,
            Dir::Down => self.down = true,
            Dir::Left => self.left = true,
            Dir::Right => self.right = true,
        }
    }

    pub fn key_up(&mut self, dir: Dir) {
        match dir {
            Dir::Up => self.up = false,
            Dir::Down => self.down = false,
            Dir::Left => self.left = false,
            Dir::Right => self.right = false,
        }
    }

    /// Drop all held keys (used when the frontend loses key-release events).
    pub fn release_keys(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag_anchor = Some((x, y));
        self.pointer_vx = 0.0;
        self.pointer_vy = 0.0;
        self.coasting = false;
    }

    /// Pointer moved while dragging. Movement past the dead zone sets the
    /// velocity along the normalized drag direction and re-bases the anchor
    /// so the next delta is measured from here.
    pub fn pointer_move(&mut self, x: f32, y: f32, config: &GameConfig) {
        let Some((ax, ay)) = self.drag_anchor else {
            return;
        };
        let dx = x - ax;
        let dy = y - ay;
        if dx.abs() > config.pointer_dead_zone || dy.abs() > config.pointer_dead_zone {
            let distance = (dx * dx + dy * dy).sqrt();
            self.pointer_vx = dx / distance * config.pointer_speed;
            self.pointer_vy = dy / distance * config.pointer_speed;
            self.drag_anchor = Some((x, y));
        }
    }

    /// Pointer released. Drag stops dead; flick keeps the velocity coasting.
    pub fn pointer_up(&mut self, config: &GameConfig) {
        self.drag_anchor = None;
        match config.control_scheme {
            ControlScheme::Drag => {
                self.pointer_vx = 0.0;
                self.pointer_vy = 0.0;
            }
            ControlScheme::Flick => {
                self.coasting = self.pointer_vx != 0.0 || self.pointer_vy != 0.0;
            }
        }
    }

    pub fn any_key_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Produce this frame's movement intent. Call exactly once per frame:
    /// flick decay advances here.
    pub fn translate(&mut self, config: &GameConfig) -> MoveIntent {
        if self.any_key_held() {
            let mut vx = 0.0;
            let mut vy = 0.0;
            if self.left {
                vx -= config.keyboard_speed;
            }
            if self.right {
                vx += config.keyboard_speed;
            }
            if self.up {
                vy -= config.keyboard_speed;
            }
            if self.down {
                vy += config.keyboard_speed;
            }
            // Diagonals keep the same magnitude as a straight move
            if vx != 0.0 && vy != 0.0 {
                vx *= std::f32::consts::FRAC_1_SQRT_2;
                vy *= std::f32::consts::FRAC_1_SQRT_2;
            }
            return MoveIntent { vx, vy };
        }

        if self.coasting {
            self.pointer_vx *= config.flick_friction;
            self.pointer_vy *= config.flick_friction;
            let speed = (self.pointer_vx * self.pointer_vx + self.pointer_vy * self.pointer_vy).sqrt();
            if speed < config.flick_min_speed {
                self.pointer_vx = 0.0;
                self.pointer_vy = 0.0;
                self.coasting = false;
            }
        }

        MoveIntent {
            vx: self.pointer_vx,
            vy: self.pointer_vy,
        }
    }
}
