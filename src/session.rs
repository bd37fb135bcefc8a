//! Session lifecycle and fixed-interval scheduling
//!
//! A [`Session`] owns the game state, the random source and the tick clock.
//! The host feeds it wall-clock time through [`Session::advance`] and
//! commands through [`Session::apply`]; ticks never overlap because they
//! only run inside `advance`.

use std::time::Duration;

use crate::settings::Settings;
use crate::sim::{
    Direction, GameEvent, GamePhase, GameState, Playfield, RandomSource, ResetCause, SimError,
    SimRng, Snapshot, TickInput, tick,
};

/// Commands from the UI and input layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Steer(Direction),
}

/// Fixed-step accumulator. Elapsed time is banked and paid out in whole
/// ticks, at most `max_substeps` per call.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    max_substeps: u32,
    accumulator: Duration,
    running: bool,
}

impl TickClock {
    pub fn new(interval: Duration, max_substeps: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_substeps: max_substeps.max(1),
            accumulator: Duration::ZERO,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start ticking from a clean accumulator. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.accumulator = Duration::ZERO;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Bank `elapsed` and return how many ticks are due now
    pub fn due_ticks(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < self.max_substeps {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        // Drop the backlog we refused to simulate
        if ticks == self.max_substeps && self.accumulator >= self.interval {
            log::warn!(
                "Tick clock fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }
}

/// One play session: state, randomness, scheduling and pending input
pub struct Session {
    state: GameState,
    rng: Box<dyn RandomSource>,
    clock: TickClock,
    /// Latest directional intent, consumed by the next tick
    pending: Option<Direction>,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(playfield: Playfield, clock: TickClock, rng: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::new(playfield),
            rng,
            clock,
            pending: None,
            events: Vec::new(),
        }
    }

    /// Build a session from settings, seeding the RNG from them if a seed is set
    pub fn from_settings(settings: &Settings) -> Result<Self, SimError> {
        let playfield = settings.playfield()?;
        if settings.tick_interval().is_zero() {
            return Err(SimError::InvalidTickInterval);
        }
        let rng = match settings.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };
        log::info!(
            "Session created: playfield {}x{}, tick {:?}, seed {}",
            playfield.width(),
            playfield.height(),
            settings.tick_interval(),
            rng.seed()
        );
        Ok(Self::new(
            playfield,
            TickClock::new(settings.tick_interval(), settings.max_substeps),
            Box::new(rng),
        ))
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Reset => self.reset(),
            Command::Steer(direction) => self.steer(direction),
        }
    }

    /// Idle -> Running. Regenerates the world and starts the clock; a no-op
    /// while already running.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Running {
            log::debug!("Start ignored, session already running");
            return;
        }
        self.state.regenerate_world(self.rng.as_mut());
        self.state.phase = GamePhase::Running;
        self.clock.start();
        self.events.push(GameEvent::Started);
        log::info!("Session started");
    }

    /// Full reinitialisation. Leaves the phase and the clock as they are.
    pub fn reset(&mut self) {
        let had_score = self.state.score > 0;
        self.state.reset(self.rng.as_mut());
        self.pending = None;
        self.events.push(GameEvent::Reset {
            cause: ResetCause::Command,
        });
        if had_score {
            self.events.push(GameEvent::ScoreChanged { score: 0 });
        }
        log::info!("Session reset ({:?})", self.state.phase);
    }

    /// Record a directional intent; the latest one before a tick wins
    pub fn steer(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Run every tick that has come due over `elapsed`. Returns the number run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.due_ticks(elapsed);
        for _ in 0..due {
            self.step();
        }
        due
    }

    /// Run exactly one tick, ignoring the clock
    pub fn step(&mut self) {
        let input = TickInput {
            direction: self.pending.take(),
        };
        let events = tick(&mut self.state, &input, self.rng.as_mut());
        self.events.extend(events);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Stop the clock at session end
    pub fn shutdown(&mut self) {
        self.clock.stop();
        log::info!(
            "Session ended after {} ticks, score {}",
            self.state.time_ticks,
            self.state.score
        );
    }
}
