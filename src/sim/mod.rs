//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (maze wall list, ghost spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod error;
pub mod rect;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use actor::{Direction, Ghost, GhostColor, Player};
pub use collision::{contains, find_capture, intersects, resolve_wall_collisions, touches_cherry};
pub use error::SimError;
pub use rect::Rect;
pub use rng::{RandomSource, SimRng};
pub use spawn::{Playfield, generate_maze, spawn_cherry, spawn_cherry_in, spawn_ghosts};
pub use state::{GameEvent, GamePhase, GameState, GhostView, ResetCause, Snapshot};
pub use tick::{TickInput, tick};
