//! Cherry Maze - a tiny maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, collisions, spawning, ticking)
//! - `session`: Idle/Running lifecycle and the fixed-step scheduler
//! - `settings`: Data-driven configuration loaded from JSON

pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Command, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Fixed simulation interval in milliseconds (10 Hz)
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Maximum ticks run per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default playfield dimensions (the original window size)
    pub const PLAYFIELD_WIDTH: i32 = 600;
    pub const PLAYFIELD_HEIGHT: i32 = 600;

    /// Player defaults
    pub const PLAYER_START: IVec2 = IVec2::new(100, 100);
    pub const PLAYER_SIZE: i32 = 20;
    /// Distance covered per tick along the held direction
    pub const PLAYER_SPEED: i32 = 5;

    /// Ghost defaults
    pub const GHOST_SIZE: i32 = 20;
    pub const GHOST_COUNT: usize = 3;

    /// Cherry defaults
    pub const CHERRY_SIZE: i32 = 10;
    pub const CHERRY_REWARD: u32 = 300;
}
