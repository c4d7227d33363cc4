//! The session state machine.
//!
//! [`Session`] is the single writer of score, high score, remaining time,
//! and phase. The entity pool and input translator never touch these
//! directly — captures and timer ticks arrive as method calls, and every
//! state change is reported through [`GameEvent`]s pushed into a
//! caller-supplied queue for the presentation layer.

use crate::entities::{GameEvent, GamePhase};
use crate::score::HighScoreStore;

pub struct Session {
    phase: GamePhase,
    score: u32,
    high_score: u32,
    time_remaining: u32,
    duration: u32,
}

impl Session {
    /// New session machine on the start screen, high score seeded from the
    /// store.
    pub fn new(duration: u32, store: &HighScoreStore) -> Session {
        Session {
            phase: GamePhase::Start,
            score: 0,
            high_score: store.load(),
            time_remaining: duration,
            duration,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Begin a session. Valid from the start screen and from game over;
    /// a no-op while already playing.
    pub fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.time_remaining = self.duration;
        events.push(GameEvent::SessionStarted);
        events.push(GameEvent::ScoreChanged(0));
        events.push(GameEvent::TimeChanged(self.time_remaining));
    }

    /// Restart from the game-over screen: tear-down notice first, then a
    /// fresh session. No-op in any other phase.
    pub fn restart(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        events.push(GameEvent::SessionReset);
        self.start(events);
    }

    /// One-per-second timer tick. Counts down while playing; the tick that
    /// reaches zero ends the session.
    pub fn second_tick(&mut self, store: &HighScoreStore, events: &mut Vec<GameEvent>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        events.push(GameEvent::TimeChanged(self.time_remaining));
        if self.time_remaining == 0 {
            self.end(store, events);
        }
    }

    /// End the session. Flips the phase before anything else so a capture
    /// callback racing the timer in the same tick is cleanly rejected, then
    /// reconciles the high score against the final score.
    pub fn end(&mut self, store: &HighScoreStore, events: &mut Vec<GameEvent>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
            store.record(self.high_score);
            events.push(GameEvent::HighScoreChanged(self.high_score));
        }
        events.push(GameEvent::SessionEnded(self.score));
    }

    /// A shark–fish capture. Scores one point and persists a new high score
    /// immediately rather than waiting for the session to end. Captures
    /// reported after the session ends are silently dropped.
    pub fn register_capture(&mut self, store: &HighScoreStore, events: &mut Vec<GameEvent>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.score += 1;
        events.push(GameEvent::ScoreChanged(self.score));
        if self.score > self.high_score {
            self.high_score = self.score;
            store.record(self.high_score);
            events.push(GameEvent::HighScoreChanged(self.high_score));
        }
    }
}
