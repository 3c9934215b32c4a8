//! Can-drinking mini-game ("straight-can challenge")
//!
//! Button-mash side mode: each press drinks 5% of the can; finishing records
//! the elapsed time. The best completion time persists as a JSON file under
//! a fixed storage key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Progress gained per press (percent)
pub const PRESS_INCREMENT: u8 = 5;
/// Progress at which the can is empty
pub const FULL: u8 = 100;

/// One run of the challenge. Time advances via `tick`, driven by the host
/// loop, so runs are reproducible in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkingGame {
    /// Percent drunk, 0 to 100
    pub progress: u8,
    /// Seconds since the run started
    pub elapsed: f32,
    pub completed: bool,
}

impl DrinkingGame {
    pub fn new() -> Self {
        Self {
            progress: 0,
            elapsed: 0.0,
            completed: false,
        }
    }

    /// Advance the run clock while the can isn't finished
    pub fn tick(&mut self, dt: f32) {
        if !self.completed {
            self.elapsed += dt;
        }
    }

    /// One button press. Returns true on the press that empties the can;
    /// presses after completion do nothing.
    pub fn press(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.progress = (self.progress + PRESS_INCREMENT).min(FULL);
        if self.progress >= FULL {
            self.completed = true;
            log::info!("can finished in {:.2} s", self.elapsed);
            return true;
        }
        false
    }
}

impl Default for DrinkingGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted best completion time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestTime {
    pub seconds: Option<f32>,
}

impl BestTime {
    /// Fixed storage key; the file is `<key>.json` in the data directory
    pub const STORAGE_KEY: &'static str = "best_can_time";

    fn path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Load the stored best, falling back to "no best yet" on any failure
    pub fn load(dir: &Path) -> Self {
        match fs::read_to_string(Self::path(dir)) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(best) => {
                    log::info!("loaded best can time");
                    best
                }
                Err(e) => {
                    log::warn!("best time file is corrupt, starting fresh: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no best can time yet");
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = fs::write(Self::path(dir), json) {
                    log::warn!("failed to save best time: {e}");
                }
            }
            Err(e) => log::warn!("failed to serialize best time: {e}"),
        }
    }

    /// Record a completion. Returns true (a new record) only when `time`
    /// beats the stored best.
    pub fn record(&mut self, time: f32) -> bool {
        match self.seconds {
            Some(best) if time >= best => false,
            _ => {
                self.seconds = Some(time);
                true
            }
        }
    }
}
