//! Player and ghost actors

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::rect::Rect;
use super::rng::RandomSource;
use crate::consts::*;

/// Directional intent delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Per-tick velocity for this direction (screen space, y down)
    pub fn velocity(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -PLAYER_SPEED),
            Direction::Down => IVec2::new(0, PLAYER_SPEED),
            Direction::Left => IVec2::new(-PLAYER_SPEED, 0),
            Direction::Right => IVec2::new(PLAYER_SPEED, 0),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "up" => Some(Direction::Up),
            "s" | "down" => Some(Direction::Down),
            "a" | "left" => Some(Direction::Left),
            "d" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The player-controlled muncher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pos: IVec2,
    vel: IVec2,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Player at the start position, standing still
    pub fn new() -> Self {
        Self::at(PLAYER_START)
    }

    pub fn at(pos: IVec2) -> Self {
        Self {
            pos,
            vel: IVec2::ZERO,
        }
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> IVec2 {
        self.vel
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, PLAYER_SIZE)
    }

    /// Probe point for wall collisions
    pub fn center(&self) -> IVec2 {
        self.pos + IVec2::splat(PLAYER_SIZE / 2)
    }

    /// Set velocity directly. Only zero or one of the four cardinal
    /// velocities is accepted.
    pub fn set_velocity(&mut self, dx: i32, dy: i32) -> Result<(), SimError> {
        let vel = IVec2::new(dx, dy);
        let allowed = vel == IVec2::ZERO || Direction::ALL.iter().any(|d| d.velocity() == vel);
        if !allowed {
            return Err(SimError::InvalidVelocity { dx, dy });
        }
        self.vel = vel;
        Ok(())
    }

    /// Overwrite both velocity axes from a directional intent
    pub fn steer(&mut self, direction: Direction) {
        self.vel = direction.velocity();
    }

    pub fn step_position(&mut self) {
        self.pos += self.vel;
    }

    pub fn revert_step(&mut self) {
        self.pos -= self.vel;
    }

    /// Back to the start position with zero velocity
    pub fn respawn(&mut self) {
        *self = Self::new();
    }
}

/// Cosmetic ghost tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhostColor {
    Red,
    Blue,
    Green,
}

impl GhostColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            GhostColor::Red => "red",
            GhostColor::Blue => "blue",
            GhostColor::Green => "green",
        }
    }
}

/// A randomly wandering adversary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost {
    pos: IVec2,
    color: GhostColor,
}

impl Ghost {
    pub fn new(pos: IVec2, color: GhostColor) -> Self {
        Self { pos, color }
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.pos
    }

    #[inline]
    pub fn color(&self) -> GhostColor {
        self.color
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, GHOST_SIZE)
    }

    /// One random-walk step: each axis moves by -1, 0 or 1, sampled fresh
    pub fn wander(&mut self, rng: &mut dyn RandomSource) {
        let dx = rng.next_in(-1, 2);
        let dy = rng.next_in(-1, 2);
        self.pos += IVec2::new(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, SimRng};

    #[test]
    fn test_direction_velocities() {
        assert_eq!(Direction::Up.velocity(), IVec2::new(0, -5));
        assert_eq!(Direction::Down.velocity(), IVec2::new(0, 5));
        assert_eq!(Direction::Left.velocity(), IVec2::new(-5, 0));
        assert_eq!(Direction::Right.velocity(), IVec2::new(5, 0));
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key("W"), Some(Direction::Up));
        assert_eq!(Direction::from_key("left"), Some(Direction::Left));
        assert_eq!(Direction::from_key("x"), None);
    }

    #[test]
    fn test_steer_overwrites_both_axes() {
        let mut player = Player::new();
        player.steer(Direction::Right);
        player.steer(Direction::Up);
        assert_eq!(player.velocity(), IVec2::new(0, -5));
    }

    #[test]
    fn test_set_velocity_rejects_diagonal() {
        let mut player = Player::new();
        assert!(player.set_velocity(5, 0).is_ok());
        assert_eq!(
            player.set_velocity(5, 5),
            Err(SimError::InvalidVelocity { dx: 5, dy: 5 })
        );
        assert_eq!(
            player.set_velocity(3, 0).unwrap_err(),
            SimError::InvalidVelocity { dx: 3, dy: 0 }
        );
        // Rejected input leaves the previous velocity alone
        assert_eq!(player.velocity(), IVec2::new(5, 0));
        assert!(player.set_velocity(0, 0).is_ok());
        assert_eq!(player.velocity(), IVec2::ZERO);
    }

    #[test]
    fn test_step_and_revert() {
        let mut player = Player::new();
        player.steer(Direction::Left);
        player.step_position();
        assert_eq!(player.position(), IVec2::new(95, 100));
        player.revert_step();
        assert_eq!(player.position(), PLAYER_START);
    }

    #[test]
    fn test_respawn() {
        let mut player = Player::at(IVec2::new(300, 300));
        player.steer(Direction::Down);
        player.respawn();
        assert_eq!(player.position(), PLAYER_START);
        assert_eq!(player.velocity(), IVec2::ZERO);
    }

    #[test]
    fn test_wander_uses_scripted_deltas() {
        // next_in(-1, 2) maps offsets 0, 1, 2 to -1, 0, 1
        let mut rng = ScriptedRng::new(vec![0, 2]);
        let mut ghost = Ghost::new(IVec2::new(200, 200), GhostColor::Red);
        ghost.wander(&mut rng);
        assert_eq!(ghost.position(), IVec2::new(199, 201));
    }

    #[test]
    fn test_wander_step_is_unit() {
        let mut rng = SimRng::new(7);
        let mut ghost = Ghost::new(IVec2::new(200, 200), GhostColor::Blue);
        for _ in 0..100 {
            let before = ghost.position();
            ghost.wander(&mut rng);
            let delta = ghost.position() - before;
            assert!(delta.x.abs() <= 1 && delta.y.abs() <= 1);
        }
    }
}
