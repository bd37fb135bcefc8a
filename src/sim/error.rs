//! Simulation error type

use core::fmt;

use crate::consts::CHERRY_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Playfield too small to hold a cherry (empty or negative spawn range)
    InvalidBounds { width: i32, height: i32 },
    /// Velocity outside {zero, the four cardinal steps}
    InvalidVelocity { dx: i32, dy: i32 },
    /// Tick interval of zero, which would never schedule a tick
    InvalidTickInterval,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { width, height } => write!(
                f,
                "invalid playfield bounds {width}x{height}: both sides must exceed {CHERRY_SIZE}"
            ),
            Self::InvalidVelocity { dx, dy } => {
                write!(f, "invalid velocity ({dx}, {dy}): not a cardinal step or zero")
            }
            Self::InvalidTickInterval => write!(f, "tick interval must be at least 1 ms"),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SimError::InvalidBounds { width: 0, height: 600 };
        assert_eq!(
            err.to_string(),
            "invalid playfield bounds 0x600: both sides must exceed 10"
        );
    }
}
