//! Maze, ghost and cherry placement

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::actor::{Ghost, GhostColor};
use super::error::SimError;
use super::rect::Rect;
use super::rng::RandomSource;
use crate::consts::*;

/// Validated playfield dimensions. Both sides exceed the cherry size, so a
/// cherry always has somewhere to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    width: i32,
    height: i32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Result<Self, SimError> {
        if width <= CHERRY_SIZE || height <= CHERRY_SIZE {
            return Err(SimError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// The fixed four-wall layout: a hollow square, top/left/right/bottom
pub fn generate_maze() -> Vec<Rect> {
    vec![
        Rect::new(50, 50, 200, 20),
        Rect::new(50, 50, 20, 200),
        Rect::new(250, 50, 20, 200),
        Rect::new(50, 250, 200, 20),
    ]
}

/// Ghost seed positions and tints
const GHOST_SEEDS: [(IVec2, GhostColor); GHOST_COUNT] = [
    (IVec2::new(200, 200), GhostColor::Red),
    (IVec2::new(300, 200), GhostColor::Blue),
    (IVec2::new(200, 300), GhostColor::Green),
];

/// Fresh ghosts at their seed positions
pub fn spawn_ghosts() -> Vec<Ghost> {
    GHOST_SEEDS
        .iter()
        .map(|&(pos, color)| Ghost::new(pos, color))
        .collect()
}

/// Cherry with a uniformly random top-left in `[0, w - 10) x [0, h - 10)`
pub fn spawn_cherry(playfield: Playfield, rng: &mut dyn RandomSource) -> Rect {
    let x = rng.next_in(0, playfield.width - CHERRY_SIZE);
    let y = rng.next_in(0, playfield.height - CHERRY_SIZE);
    Rect::new(x, y, CHERRY_SIZE, CHERRY_SIZE)
}

/// [`spawn_cherry`] for raw dimensions, rejecting bounds with no valid spot
pub fn spawn_cherry_in(
    width: i32,
    height: i32,
    rng: &mut dyn RandomSource,
) -> Result<Rect, SimError> {
    let playfield = Playfield::new(width, height)?;
    Ok(spawn_cherry(playfield, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, SimRng};

    #[test]
    fn test_maze_is_fixed_hollow_square() {
        let maze = generate_maze();
        assert_eq!(maze.len(), 4);
        assert_eq!(maze, generate_maze());
        // Start position sits inside the hollow, clear of every wall
        let center = PLAYER_START + IVec2::splat(PLAYER_SIZE / 2);
        assert!(maze.iter().all(|w| !w.contains(center)));
    }

    #[test]
    fn test_ghost_seeds() {
        let ghosts = spawn_ghosts();
        assert_eq!(ghosts.len(), GHOST_COUNT);
        let positions: Vec<IVec2> = ghosts.iter().map(|g| g.position()).collect();
        assert_eq!(
            positions,
            vec![
                IVec2::new(200, 200),
                IVec2::new(300, 200),
                IVec2::new(200, 300)
            ]
        );
        assert_eq!(ghosts[1].color(), GhostColor::Blue);
    }

    #[test]
    fn test_cherry_within_bounds() {
        let mut rng = SimRng::new(1234);
        let playfield = Playfield::new(40, 25).unwrap();
        for _ in 0..500 {
            let cherry = spawn_cherry(playfield, &mut rng);
            assert!(cherry.x >= 0 && cherry.x < 30);
            assert!(cherry.y >= 0 && cherry.y < 15);
            assert_eq!((cherry.w, cherry.h), (CHERRY_SIZE, CHERRY_SIZE));
        }
    }

    #[test]
    fn test_cherry_scripted_position() {
        let mut rng = ScriptedRng::new(vec![420, 17]);
        let cherry = spawn_cherry(Playfield::default(), &mut rng);
        assert_eq!(cherry, Rect::new(420, 17, 10, 10));
    }

    #[test]
    fn test_cherry_smallest_playfield() {
        let mut rng = SimRng::new(9);
        let cherry = spawn_cherry_in(11, 11, &mut rng).unwrap();
        assert_eq!(cherry.origin(), IVec2::ZERO);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut rng = SimRng::new(9);
        for (w, h) in [(0, 600), (600, 0), (-5, 100), (10, 600), (600, 10)] {
            assert_eq!(
                spawn_cherry_in(w, h, &mut rng),
                Err(SimError::InvalidBounds { width: w, height: h })
            );
        }
    }
}
