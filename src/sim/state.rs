//! Game state and core simulation types
//!
//! All state the tick engine reads or writes lives in [`GameState`]; it is
//! passed around by `&mut`, never shared.

use serde::{Deserialize, Serialize};

use super::actor::{Ghost, GhostColor, Player};
use super::rect::Rect;
use super::rng::RandomSource;
use super::spawn::{Playfield, generate_maze, spawn_cherry, spawn_ghosts};

/// Coarse lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start, nothing ticks
    #[default]
    Idle,
    /// Ticking on the fixed schedule
    Running,
}

/// Why the world was reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    /// Reset command from the UI
    Command,
    /// A ghost caught the player mid-tick
    Caught,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Reset { cause: ResetCause },
    CherryEaten { x: i32, y: i32 },
    Caught { by: GhostColor },
    ScoreChanged { score: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub playfield: Playfield,
    pub phase: GamePhase,
    /// Ticks simulated since the session began
    pub time_ticks: u64,
    pub player: Player,
    pub walls: Vec<Rect>,
    /// At most one cherry at a time
    pub cherry: Option<Rect>,
    pub ghosts: Vec<Ghost>,
    pub score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Playfield::default())
    }
}

impl GameState {
    /// Idle state with the player at its start and an empty world
    pub fn new(playfield: Playfield) -> Self {
        Self {
            playfield,
            phase: GamePhase::Idle,
            time_ticks: 0,
            player: Player::new(),
            walls: Vec::new(),
            cherry: None,
            ghosts: Vec::new(),
            score: 0,
        }
    }

    /// Rebuild the maze, the ghosts and the cherry
    pub fn regenerate_world(&mut self, rng: &mut dyn RandomSource) {
        self.walls = generate_maze();
        self.ghosts = spawn_ghosts();
        self.respawn_cherry(rng);
    }

    /// Replace the cherry with a fresh one
    pub fn respawn_cherry(&mut self, rng: &mut dyn RandomSource) {
        self.cherry = Some(spawn_cherry(self.playfield, rng));
    }

    /// Player, velocity and score back to their initial values, world
    /// regenerated. The phase is left alone.
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        self.player.respawn();
        self.score = 0;
        self.regenerate_world(rng);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            tick: self.time_ticks,
            player: self.player.bounds(),
            player_velocity: (self.player.velocity().x, self.player.velocity().y),
            walls: self.walls.clone(),
            cherry: self.cherry,
            ghosts: self
                .ghosts
                .iter()
                .map(|g| GhostView {
                    bounds: g.bounds(),
                    color: g.color(),
                })
                .collect(),
            score: self.score,
        }
    }
}

/// Read-only view of one ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostView {
    pub bounds: Rect,
    pub color: GhostColor,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub player: Rect,
    pub player_velocity: (i32, i32),
    pub walls: Vec<Rect>,
    pub cherry: Option<Rect>,
    pub ghosts: Vec<GhostView>,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::actor::Direction;
    use crate::sim::rng::SimRng;
    use glam::IVec2;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.position(), PLAYER_START);
        assert!(state.walls.is_empty());
        assert!(state.ghosts.is_empty());
        assert!(state.cherry.is_none());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_restores_everything_but_phase() {
        let mut rng = SimRng::new(5);
        let mut state = GameState::default();
        state.phase = GamePhase::Running;
        state.score = 1200;
        state.player = Player::at(IVec2::new(400, 400));
        state.player.steer(Direction::Left);

        state.reset(&mut rng);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.position(), PLAYER_START);
        assert_eq!(state.player.velocity(), IVec2::ZERO);
        assert_eq!(state.score, 0);
        assert_eq!(state.walls, generate_maze());
        assert_eq!(state.ghosts, spawn_ghosts());
        assert!(state.cherry.is_some());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut rng = SimRng::new(8);
        let mut state = GameState::default();
        state.regenerate_world(&mut rng);
        state.score = 300;

        let snap = state.snapshot();
        assert_eq!(snap.player, Rect::new(100, 100, PLAYER_SIZE, PLAYER_SIZE));
        assert_eq!(snap.walls.len(), 4);
        assert_eq!(snap.ghosts.len(), GHOST_COUNT);
        assert_eq!(snap.ghosts[2].color, GhostColor::Green);
        assert_eq!(snap.cherry, state.cherry);
        assert_eq!(snap.score, 300);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = GameState::default().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
