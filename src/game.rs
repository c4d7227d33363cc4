//! The game orchestrator.
//!
//! [`Game`] multiplexes the two cadences — the per-frame update and the
//! once-per-second session timer — onto one logical timeline, enforcing the
//! per-frame ordering: input translation, velocity application, spawn
//! cadence, motion + clamping + culling, then overlap resolution. All state
//! mutation funnels through here; handlers run to completion.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Fish, GameEvent, GamePhase, Shark};
use crate::input::{Dir, InputTranslator, MoveIntent};
use crate::pool::EntityPool;
use crate::score::HighScoreStore;
use crate::session::Session;

pub struct Game {
    config: GameConfig,
    session: Session,
    store: HighScoreStore,
    pool: EntityPool,
    input: InputTranslator,
    /// Elapsed milliseconds toward the next firing of each spawn interval.
    /// Zeroed whenever the session leaves Playing, so no spawn can land
    /// after the session ends.
    spawn_acc_ms: Vec<f32>,
}

impl Game {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Game {
        let session = Session::new(config.duration_secs, &store);
        let spawn_acc_ms = vec![0.0; config.spawn_intervals_ms.len()];
        Game {
            config,
            session,
            store,
            pool: EntityPool::new(),
            input: InputTranslator::new(),
            spawn_acc_ms,
        }
    }

    // ── Read access for the presentation layer ───────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score()
    }

    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining()
    }

    pub fn shark(&self) -> Option<&Shark> {
        self.pool.shark()
    }

    pub fn fish(&self) -> &[Fish] {
        self.pool.fish()
    }

    // ── Session control ──────────────────────────────────────────────────────

    /// Begin a session: fresh score and timer, a shark at field center, and
    /// the initial school of fish. No-op while already playing.
    pub fn start(&mut self, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.session.phase() == GamePhase::Playing {
            return events;
        }
        self.session.start(&mut events);
        self.rebuild_entities(rng);
        events
    }

    /// Restart from game over (emits the tear-down notice first).
    pub fn restart(&mut self, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.session.phase() != GamePhase::GameOver {
            return events;
        }
        self.session.restart(&mut events);
        self.rebuild_entities(rng);
        events
    }

    fn rebuild_entities(&mut self, rng: &mut impl Rng) {
        self.pool.clear_all();
        self.pool.spawn_shark(&self.config);
        for _ in 0..self.config.initial_fish {
            self.pool.spawn_fish(&self.config, rng);
        }
        for acc in &mut self.spawn_acc_ms {
            *acc = 0.0;
        }
    }

    // ── Input forwarding ─────────────────────────────────────────────────────

    pub fn key_down(&mut self, dir: Dir) {
        self.input.key_down(dir);
    }

    pub fn key_up(&mut self, dir: Dir) {
        self.input.key_up(dir);
    }

    pub fn release_keys(&mut self) {
        self.input.release_keys();
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.input.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input.pointer_move(x, y, &self.config);
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up(&self.config);
    }

    // ── The two cadences ─────────────────────────────────────────────────────

    /// Advance the simulation by `dt` seconds. Only runs while Playing.
    pub fn advance_frame(&mut self, dt: f32, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.session.phase() != GamePhase::Playing {
            return events;
        }

        // 1. Input translation, then velocity application
        let MoveIntent { vx, vy } = self.input.translate(&self.config);
        self.pool.set_shark_velocity(vx, vy, &self.config);

        // 2. Spawn cadence
        for (i, &interval) in self.config.spawn_intervals_ms.iter().enumerate() {
            self.spawn_acc_ms[i] += dt * 1000.0;
            while self.spawn_acc_ms[i] >= interval as f32 {
                self.spawn_acc_ms[i] -= interval as f32;
                self.pool.spawn_fish(&self.config, rng);
            }
        }

        // 3. Motion, clamping, culling
        self.pool.update(dt, &self.config);

        // 4. Overlap resolution — the fish is destroyed before scoring, so
        //    a repeated report of the same pair cannot score twice
        for id in self.pool.overlaps() {
            if self.pool.capture(id) {
                self.session.register_capture(&self.store, &mut events);
            }
        }

        events
    }

    /// The once-per-second timer tick. When it ends the session, all
    /// entities and spawn accumulators are torn down atomically with it.
    pub fn second_tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.session.second_tick(&self.store, &mut events);
        if self.session.phase() != GamePhase::Playing {
            self.pool.clear_all();
            for acc in &mut self.spawn_acc_ms {
                *acc = 0.0;
            }
        }
        events
    }
}
