use crate::{engine, Grid, LifeError};
use std::time::{Duration, Instant};

/// Default side length of the cell wall.
pub const DEFAULT_SIZE: usize = 15;

/// Bounds and step of the generation interval, in milliseconds.
pub const SPEED_MIN_MS: u64 = 50;
pub const SPEED_MAX_MS: u64 = 1000;
pub const SPEED_STEP_MS: u64 = 50;

/// Default generation interval.
pub const DEFAULT_SPEED_MS: u64 = 250;

/// Live density used by the randomize action.
const RANDOM_FILL_DENSITY: f64 = 0.3;

/// Which of the two mutation paths is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cells can be edited; the clock is disarmed.
    Editing,
    /// The clock advances generations; edits are rejected.
    Running,
}

/// Owns the grid, the run/edit mode flag, the speed setting and the step
/// timer. All mutation goes through here: cell edits only in [`Mode::Editing`],
/// generation advances only in [`Mode::Running`]. The two paths are mutually
/// exclusive by construction, so the single-threaded caller never observes a
/// grid mid-mutation.
pub struct Session {
    grid: Grid,
    mode: Mode,
    speed_ms: u64,
    generation: u64,
    /// Deadline of the pending single-shot step timer; `None` while editing.
    next_step: Option<Instant>,
}

impl Session {
    pub fn new(size: usize) -> Result<Self, LifeError> {
        Ok(Self {
            grid: Grid::new(size)?,
            mode: Mode::Editing,
            speed_ms: DEFAULT_SPEED_MS,
            generation: 0,
            next_step: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Generation rate implied by the current speed, for display.
    pub fn generations_per_sec(&self) -> f64 {
        1000. / self.speed_ms as f64
    }

    /// Deadline of the pending step, if the clock is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_step
    }

    /// `Editing -> Running`. Arms the step timer; the grid is untouched.
    pub fn start(&mut self, now: Instant) {
        if self.mode == Mode::Running {
            return;
        }
        self.mode = Mode::Running;
        self.arm(now);
        log::info!("simulation started at {:.1} gen/s", self.generations_per_sec());
    }

    /// `Running -> Editing`. Cancels the pending timer; the grid is untouched.
    pub fn stop(&mut self) {
        if self.mode == Mode::Editing {
            return;
        }
        self.mode = Mode::Editing;
        self.next_step = None;
        log::info!("simulation stopped at generation {}", self.generation);
    }

    /// Flips one cell. Rejected with [`LifeError::SimulationRunning`] while
    /// the clock is armed; the grid is never mutated by a rejected call.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.ensure_editing()?;
        let alive = self.grid.toggle(x, y)?;
        // Any successful edit defines a new starting pattern.
        self.generation = 0;
        Ok(alive)
    }

    /// Random fill, editing only. Resets the generation counter.
    pub fn randomize(&mut self, seed: Option<u64>) -> Result<(), LifeError> {
        self.ensure_editing()?;
        self.grid.randomize(RANDOM_FILL_DENSITY, seed);
        self.generation = 0;
        Ok(())
    }

    /// Kills every cell, editing only. Resets the generation counter.
    pub fn clear(&mut self) -> Result<(), LifeError> {
        self.ensure_editing()?;
        self.grid.clear();
        self.generation = 0;
        Ok(())
    }

    /// Clamps and applies a new generation interval. A pending timer is
    /// cancelled and re-armed from `now`, like the retriggerable single-shot
    /// timer it models.
    pub fn set_speed_ms(&mut self, speed_ms: u64, now: Instant) {
        let clamped = speed_ms.clamp(SPEED_MIN_MS, SPEED_MAX_MS);
        if clamped == self.speed_ms {
            return;
        }
        self.speed_ms = clamped;
        if self.mode == Mode::Running {
            self.arm(now);
        }
        log::info!("speed set to {} ms/gen", self.speed_ms);
    }

    /// One speed notch faster (shorter interval).
    pub fn faster(&mut self, now: Instant) {
        self.set_speed_ms(self.speed_ms.saturating_sub(SPEED_STEP_MS), now);
    }

    /// One speed notch slower (longer interval).
    pub fn slower(&mut self, now: Instant) {
        self.set_speed_ms(self.speed_ms + SPEED_STEP_MS, now);
    }

    /// Clock entry point: advances at most one generation if the pending
    /// deadline has passed, then re-arms. Returns whether a step happened.
    ///
    /// No catch-up: a late tick still produces a single generation, and the
    /// next deadline counts from `now`.
    pub fn tick(&mut self, now: Instant) -> Result<bool, LifeError> {
        let Some(deadline) = self.next_step else {
            return Ok(false);
        };
        if now < deadline {
            return Ok(false);
        }
        self.advance()?;
        self.arm(now);
        Ok(true)
    }

    /// Computes one generation from a snapshot and swaps it in atomically.
    /// The mode gate is symmetric to the edit path: advancing is rejected
    /// with [`LifeError::SimulationNotRunning`] while editing. On failure
    /// the grid is left unchanged.
    pub fn advance(&mut self) -> Result<(), LifeError> {
        if self.mode == Mode::Editing {
            log::debug!("advance rejected while editing");
            return Err(LifeError::SimulationNotRunning);
        }
        let next = engine::step(&self.grid.snapshot())?;
        self.grid.replace(next)?;
        self.generation += 1;
        Ok(())
    }

    fn arm(&mut self, now: Instant) {
        self.next_step = Some(now + Duration::from_millis(self.speed_ms));
    }

    fn ensure_editing(&self) -> Result<(), LifeError> {
        if self.mode == Mode::Running {
            log::debug!("edit rejected while running");
            return Err(LifeError::SimulationRunning);
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        // DEFAULT_SIZE is positive, so construction cannot fail.
        Self::new(DEFAULT_SIZE).unwrap()
    }
}
