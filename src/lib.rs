//! Core of a timed catch-the-fish arcade game.
//!
//! A player-controlled shark roams a padded play rectangle while fish
//! stream across the field; each shark–fish overlap scores a point, a
//! 30-second timer ends the session, and the best score persists across
//! runs. The library holds all game logic — session state machine, entity
//! pool, input translation, scoring and persistence, configuration — and
//! the binary wraps it in a crossterm terminal frontend.

pub mod config;
pub mod display;
pub mod entities;
pub mod game;
pub mod input;
pub mod pool;
pub mod score;
pub mod session;
