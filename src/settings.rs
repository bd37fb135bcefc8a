//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Playfield, SimError};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: i32,
    pub playfield_height: i32,

    // === Scheduling ===
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Catch-up cap per frame
    pub max_substeps: u32,

    // === Determinism ===
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,

    // === Driver ===
    /// Log a status line every this many ticks (0 disables)
    pub status_every_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
            seed: None,
            status_every_ticks: 50,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validated playfield
    pub fn playfield(&self) -> Result<Playfield, SimError> {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings in {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
