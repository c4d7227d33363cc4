//! The entity pool: owns the shark and every live fish.
//!
//! Spawning, per-frame motion, bounds clamping, culling, and the
//! double-capture guard all live here. Scoring does not — captures are
//! reported upward to the session machine.

use rand::Rng;

use crate::config::{GameConfig, MotionModel};
use crate::entities::{Facing, Fish, FishMotion, Shark, SpawnSide};

#[derive(Default)]
pub struct EntityPool {
    shark: Option<Shark>,
    fish: Vec<Fish>,
    next_fish_id: u32,
}

impl EntityPool {
    pub fn new() -> EntityPool {
        EntityPool::default()
    }

    pub fn shark(&self) -> Option<&Shark> {
        self.shark.as_ref()
    }

    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub fn fish_count(&self) -> usize {
        self.fish.len()
    }

    /// Spawn the player shark at field center. Replaces any previous one.
    pub fn spawn_shark(&mut self, config: &GameConfig) {
        self.shark = Some(Shark {
            x: config.field_width / 2.0,
            y: config.field_height / 2.0,
            vx: 0.0,
            vy: 0.0,
            facing: Facing::Left,
            hitbox: config.shark_hitbox(),
        });
    }

    /// Spawn one fish just past a random edge, heading for the far side at
    /// a random speed, facing its direction of travel.
    pub fn spawn_fish(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        let side = if rng.gen_bool(0.5) {
            SpawnSide::Left
        } else {
            SpawnSide::Right
        };
        let x = match side {
            SpawnSide::Left => -config.spawn_edge_offset,
            SpawnSide::Right => config.field_width + config.spawn_edge_offset,
        };
        let y = rng.gen_range(config.spawn_y_margin..config.field_height - config.spawn_y_margin);
        let speed = rng.gen_range(config.fish_speed_min..=config.fish_speed_max);

        let motion = match config.motion_model {
            MotionModel::Glide => {
                // Exit point mirrored past the far edge; arriving there is
                // exactly the cull boundary.
                let target_x = match side {
                    SpawnSide::Left => config.field_width + config.cull_margin,
                    SpawnSide::Right => -config.cull_margin,
                };
                FishMotion::Glide { target_x, speed }
            }
            MotionModel::Drift => {
                let vx = match side {
                    SpawnSide::Left => speed,
                    SpawnSide::Right => -speed,
                };
                let vy = rng.gen_range(-config.drift_vy_max..=config.drift_vy_max);
                FishMotion::Drift { vx, vy }
            }
        };

        let facing = match side {
            SpawnSide::Left => Facing::Right,
            SpawnSide::Right => Facing::Left,
        };

        let id = self.next_fish_id;
        self.next_fish_id += 1;
        self.fish.push(Fish {
            id,
            x,
            y,
            facing,
            side,
            hitbox: config.fish_hitbox(),
            motion,
        });
    }

    /// Set the shark's motion intent for this tick, flipping its facing
    /// only when |vx| clears the dead zone.
    pub fn set_shark_velocity(&mut self, vx: f32, vy: f32, config: &GameConfig) {
        if let Some(shark) = self.shark.as_mut() {
            shark.vx = vx;
            shark.vy = vy;
            if vx.abs() > config.facing_dead_zone {
                shark.facing = Facing::from_vx(vx);
            }
        }
    }

    /// Advance every entity by `dt` seconds, re-clamp the shark into the
    /// padded play rectangle, then cull fish outside the margin-expanded
    /// field. Returns the number of fish culled.
    pub fn update(&mut self, dt: f32, config: &GameConfig) -> usize {
        for fish in &mut self.fish {
            match fish.motion {
                FishMotion::Glide { target_x, speed } => {
                    let dir = (target_x - fish.x).signum();
                    fish.x += dir * speed * dt;
                }
                FishMotion::Drift { vx, ref mut vy } => {
                    fish.x += vx * dt;
                    fish.y += *vy * dt;
                    // Reflect off the padded top/bottom bounds
                    let half = config.fish_size / 2.0;
                    let (_, _, min_y, max_y) = config.play_bounds(half);
                    if fish.y < min_y {
                        fish.y = min_y;
                        *vy = -*vy;
                    } else if fish.y > max_y {
                        fish.y = max_y;
                        *vy = -*vy;
                    }
                }
            }
        }

        if let Some(shark) = self.shark.as_mut() {
            shark.x += shark.vx * dt;
            shark.y += shark.vy * dt;
            // Invariant: clamped every tick, not just on input
            let half = config.shark_size / 2.0;
            let (min_x, max_x, min_y, max_y) = config.play_bounds(half);
            shark.x = shark.x.clamp(min_x, max_x);
            shark.y = shark.y.clamp(min_y, max_y);
        }

        let before = self.fish.len();
        let w = config.field_width;
        let h = config.field_height;
        let margin = config.cull_margin;
        self.fish.retain(|fish| {
            let arrived = match fish.motion {
                FishMotion::Glide { target_x, .. } => match fish.side {
                    SpawnSide::Left => fish.x >= target_x,
                    SpawnSide::Right => fish.x <= target_x,
                },
                FishMotion::Drift { .. } => false,
            };
            let half = config.fish_size / 2.0;
            let off_screen = fish.x + half < -margin
                || fish.x - half > w + margin
                || fish.y + half < -margin
                || fish.y - half > h + margin;
            !(arrived || off_screen)
        });
        before - self.fish.len()
    }

    /// Ids of every fish whose hitbox overlaps the shark's (axis-aligned
    /// box test). Empty when no shark is alive.
    pub fn overlaps(&self) -> Vec<u32> {
        let Some(shark) = self.shark.as_ref() else {
            return Vec::new();
        };
        self.fish
            .iter()
            .filter(|f| {
                (shark.x - f.x).abs() <= shark.hitbox + f.hitbox
                    && (shark.y - f.y).abs() <= shark.hitbox + f.hitbox
            })
            .map(|f| f.id)
            .collect()
    }

    /// Remove the fish with `id` if it is still alive. Returns whether it
    /// was — a duplicate collision report for the same fish finds it gone
    /// and scores nothing.
    pub fn capture(&mut self, id: u32) -> bool {
        let before = self.fish.len();
        self.fish.retain(|f| f.id != id);
        self.fish.len() != before
    }

    /// Destroy the shark and every fish (session end / pre-start reset).
    pub fn clear_all(&mut self) {
        self.shark = None;
        self.fish.clear();
    }
}
