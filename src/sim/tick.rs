//! Fixed timestep simulation tick
//!
//! Core game loop step: move, block, eat, get caught, wander.

use super::actor::Direction;
use super::collision::{find_capture, resolve_wall_collisions, touches_cherry};
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState, ResetCause};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest directional intent since the previous tick
    pub direction: Option<Direction>,
}

/// Advance the game state by one fixed timestep.
///
/// Returns the events produced, in order. Idle states are left untouched.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut dyn RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    if let Some(direction) = input.direction {
        state.player.steer(direction);
    }

    // Move, then undo the whole step for every wall holding the center
    state.player.step_position();
    resolve_wall_collisions(&mut state.player, &state.walls);

    if touches_cherry(&state.player, state.cherry.as_ref()) {
        if let Some(eaten) = state.cherry.take() {
            state.score += CHERRY_REWARD;
            log::debug!("Cherry eaten at ({}, {}), score {}", eaten.x, eaten.y, state.score);
            events.push(GameEvent::CherryEaten { x: eaten.x, y: eaten.y });
            events.push(GameEvent::ScoreChanged { score: state.score });
        }
        state.respawn_cherry(rng);
    }

    // A capture rebuilds the world, so nothing after it runs this tick
    if let Some(idx) = find_capture(&state.player, &state.ghosts) {
        let by = state.ghosts[idx].color();
        let had_score = state.score > 0;
        log::debug!("Caught by {} ghost at tick {}", by.as_str(), state.time_ticks);
        state.reset(rng);
        events.push(GameEvent::Caught { by });
        events.push(GameEvent::Reset {
            cause: ResetCause::Caught,
        });
        if had_score {
            events.push(GameEvent::ScoreChanged { score: 0 });
        }
        return events;
    }

    for ghost in &mut state.ghosts {
        ghost.wander(rng);
    }

    events
}
