//! High-score persistence.
//!
//! A single integer survives program restarts, stored under the fixed key
//! `sharkGameHighScore` — one file of that name inside the store directory.
//! Missing or unparsable data reads as 0; write failures are swallowed.
//! There is no user-facing error channel, only visual game states.

use std::path::PathBuf;

/// The key the original game used; kept for save compatibility.
pub const HIGH_SCORE_KEY: &str = "sharkGameHighScore";

pub struct HighScoreStore {
    dir: PathBuf,
}

impl HighScoreStore {
    /// Store rooted at `$HOME/.fish_catch` (falling back to the current
    /// directory when `HOME` is unset).
    pub fn open_default() -> HighScoreStore {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        HighScoreStore {
            dir: PathBuf::from(home).join(".fish_catch"),
        }
    }

    /// Store rooted at an explicit directory (tests point this at a temp dir).
    pub fn open_at(dir: PathBuf) -> HighScoreStore {
        HighScoreStore { dir }
    }

    fn key_path(&self) -> PathBuf {
        self.dir.join(HIGH_SCORE_KEY)
    }

    /// Read the persisted high score, defaulting to 0 on any failure.
    pub fn load(&self) -> u32 {
        std::fs::read_to_string(self.key_path())
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist `score` if it beats the stored value. Returns whether an
    /// update occurred. Safe to call repeatedly with the same score.
    pub fn record(&self, score: u32) -> bool {
        if score <= self.load() {
            return false;
        }
        let _ = std::fs::create_dir_all(&self.dir);
        let _ = std::fs::write(self.key_path(), score.to_string());
        true
    }
}
