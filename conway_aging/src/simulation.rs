//! Run/stop state machine around the generation advancer.
//!
//! [`Simulation`] owns the board, the generation counter and the running
//! flag. It never schedules anything itself; a driver (see
//! [`crate::runner`]) calls [`Simulation::tick`] every
//! [`Simulation::tick_interval`] while the simulation is running.

use std::time::Duration;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::generation::advance_with_cap;

/// What a call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The board changed and the generation counter moved on.
    Advanced { generation: u64 },
    /// The next board equalled the current one; the simulation stopped.
    Stable,
    /// Nothing to do, the simulation is not running.
    Idle,
}

/// Read-only view handed to renderers after every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub generation: u64,
    pub running: bool,
}

/// Commands a front end issues against a simulation, however it is driven.
pub trait LifeControls {
    fn start(&mut self);
    fn stop(&mut self);
    fn clear(&mut self);
    fn resize(&mut self, rows: usize, cols: usize) -> Result<()>;
    fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()>;
    fn paint_cell(&mut self, row: usize, col: usize) -> Result<()>;
    fn snapshot(&self) -> Snapshot;
}

#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    generation: u64,
    tick_interval: Duration,
    max_age: u8,
    running: bool,
    run_id: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        let config = LifeConfig::default();
        Self {
            board: Board::from_cells(config.rows, config.cols, vec![0; config.rows * config.cols]),
            generation: 0,
            tick_interval: config.tick_interval,
            max_age: config.max_age,
            running: false,
            run_id: 0,
        }
    }
}

impl Simulation {
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.rows, config.cols)?,
            generation: 0,
            tick_interval: config.tick_interval,
            max_age: config.max_age,
            running: false,
            run_id: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn max_age(&self) -> u8 {
        self.max_age
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Identifies the current run. Bumped by every Idle -> Running
    /// transition so a driver can tell its own run from a later one.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Changes the delay between ticks; applies from the next scheduled tick.
    pub fn set_tick_interval(&mut self, tick_interval: Duration) -> Result<()> {
        if tick_interval.is_zero() {
            return Err(LifeError::InvalidConfig("tick interval must be positive".into()));
        }
        self.tick_interval = tick_interval;
        Ok(())
    }

    /// Idle -> Running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.run_id += 1;
        info!(generation = self.generation, run = self.run_id, "simulation started");
        true
    }

    /// Running -> Idle. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!(generation = self.generation, "simulation stopped");
        true
    }

    /// Advances one generation while running. Reaching a board equal to its
    /// predecessor stops the simulation without counting a generation.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        let next = advance_with_cap(&self.board, self.max_age);
        if next == self.board {
            self.running = false;
            info!(generation = self.generation, "board is stable, simulation stopped");
            return TickOutcome::Stable;
        }
        self.board = next;
        self.generation += 1;
        debug!(generation = self.generation, live = self.board.live_count(), "tick");
        TickOutcome::Advanced {
            generation: self.generation,
        }
    }

    /// Stops if running, then kills every cell and resets the generation.
    pub fn clear(&mut self) {
        self.stop();
        self.board = self.board.cleared();
        self.generation = 0;
        info!(rows = self.board.rows(), cols = self.board.cols(), "board cleared");
    }

    /// Replaces the board with an empty one of the new size. A running
    /// simulation is stopped first. Invalid dimensions leave state untouched.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let board = Board::new(rows, cols)?;
        self.stop();
        self.board = board;
        self.generation = 0;
        info!(rows, cols, "board resized");
        Ok(())
    }

    /// Replaces the board wholesale (pattern or random seed). Stops a running
    /// simulation and resets the generation.
    pub fn load(&mut self, board: Board) {
        self.stop();
        info!(rows = board.rows(), cols = board.cols(), live = board.live_count(), "board loaded");
        self.board = board;
        self.generation = 0;
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.board = self.board.toggle(row, col)?;
        Ok(())
    }

    pub fn paint_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.board = self.board.force_alive(row, col)?;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            generation: self.generation,
            running: self.running,
        }
    }
}

impl LifeControls for Simulation {
    fn start(&mut self) {
        Simulation::start(self);
    }

    fn stop(&mut self) {
        Simulation::stop(self);
    }

    fn clear(&mut self) {
        Simulation::clear(self);
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        Simulation::resize(self, rows, cols)
    }

    fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        Simulation::toggle_cell(self, row, col)
    }

    fn paint_cell(&mut self, row: usize, col: usize) -> Result<()> {
        Simulation::paint_cell(self, row, col)
    }

    fn snapshot(&self) -> Snapshot {
        Simulation::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(LifeConfig::default().with_size(5, 5)).unwrap();
        sim.load(patterns::find("Blinker").unwrap().stamp_centered(sim.board()));
        sim
    }

    #[test]
    fn starts_idle_with_defaults() {
        let sim = Simulation::new(LifeConfig::default()).unwrap();
        assert_eq!(sim.board().dimensions(), (30, 50));
        assert!(sim.board().is_empty());
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());
        assert_eq!(sim.tick_interval(), Duration::from_millis(60));
        assert_eq!(sim.snapshot(), Simulation::default().snapshot());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Simulation::new(LifeConfig::default().with_size(0, 3)).is_err());
        assert!(Simulation::new(LifeConfig::default().with_max_age(0)).is_err());
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut sim = Simulation::default();
        assert!(sim.start());
        assert!(!sim.start());
        assert_eq!(sim.run_id(), 1);
        assert!(sim.stop());
        assert!(!sim.stop());
        assert!(sim.start());
        assert_eq!(sim.run_id(), 2);
    }

    #[test]
    fn tick_does_nothing_while_idle() {
        let mut sim = blinker_sim();
        let before = sim.snapshot();
        assert_eq!(sim.tick(), TickOutcome::Idle);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn empty_board_is_stable_immediately() {
        let mut sim = Simulation::default();
        sim.start();
        assert_eq!(sim.tick(), TickOutcome::Stable);
        assert!(!sim.is_running());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn lone_cell_dies_then_stabilises() {
        let mut sim = Simulation::default();
        sim.toggle_cell(10, 10).unwrap();
        sim.start();
        assert_eq!(sim.tick(), TickOutcome::Advanced { generation: 1 });
        assert!(sim.board().is_empty());
        assert_eq!(sim.tick(), TickOutcome::Stable);
        assert_eq!(sim.generation(), 1);
        assert!(!sim.is_running());
    }

    #[test]
    fn blinker_keeps_running() {
        let mut sim = blinker_sim();
        let horizontal = sim.board().clone();
        sim.start();
        for expected in 1..=6 {
            assert_eq!(sim.tick(), TickOutcome::Advanced { generation: expected });
            assert!(sim.is_running());
            let vertical = expected % 2 == 1;
            assert_eq!(sim.board().is_alive(1, 2), vertical);
            assert_eq!(sim.board().is_alive(2, 1), !vertical);
            assert!(sim.board().is_alive(2, 2));
        }
        // Same shape as the start, but the centre cell has aged.
        assert_eq!(sim.board().live_count(), horizontal.live_count());
        assert_eq!(sim.board().get(2, 2), Some(7));
    }

    #[test]
    fn stable_block_stops_once_ages_cap() {
        let mut sim = Simulation::new(LifeConfig::default().with_size(4, 4).with_max_age(3)).unwrap();
        let block = sim.board().with_live_cells([(1, 1), (1, 2), (2, 1), (2, 2)]);
        sim.load(block);
        sim.start();
        assert_eq!(sim.tick(), TickOutcome::Advanced { generation: 1 });
        assert_eq!(sim.tick(), TickOutcome::Advanced { generation: 2 });
        assert_eq!(sim.tick(), TickOutcome::Stable);
        assert_eq!(sim.board().get(1, 1), Some(3));
    }

    #[test]
    fn clear_stops_and_resets() {
        let mut sim = blinker_sim();
        sim.start();
        sim.tick();
        sim.clear();
        assert!(!sim.is_running());
        assert_eq!(sim.generation(), 0);
        assert!(sim.board().is_empty());
        assert_eq!(sim.board().dimensions(), (5, 5));
    }

    #[test]
    fn resize_replaces_board_and_stops() {
        let mut sim = blinker_sim();
        sim.start();
        sim.tick();
        sim.resize(40, 70).unwrap();
        assert_eq!(sim.board().dimensions(), (40, 70));
        assert!(sim.board().is_empty());
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());
    }

    #[test]
    fn failed_resize_keeps_state() {
        let mut sim = blinker_sim();
        sim.start();
        sim.tick();
        let before = sim.snapshot();
        assert_eq!(
            sim.resize(0, 5),
            Err(LifeError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn toggle_discards_age_and_paint_keeps_it() {
        let mut sim = blinker_sim();
        sim.start();
        sim.tick();
        sim.tick();
        assert_eq!(sim.board().get(2, 2), Some(3));

        sim.paint_cell(2, 2).unwrap();
        assert_eq!(sim.board().get(2, 2), Some(3));

        sim.toggle_cell(2, 2).unwrap();
        assert_eq!(sim.board().get(2, 2), Some(0));

        sim.paint_cell(0, 0).unwrap();
        assert_eq!(sim.board().get(0, 0), Some(1));
    }

    #[test]
    fn edits_out_of_bounds_propagate() {
        let mut sim = blinker_sim();
        assert!(matches!(sim.toggle_cell(5, 0), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(sim.paint_cell(0, 5), Err(LifeError::OutOfBounds { .. })));
    }

    #[test]
    fn tick_interval_must_be_positive() {
        let mut sim = Simulation::default();
        assert!(sim.set_tick_interval(Duration::ZERO).is_err());
        sim.set_tick_interval(Duration::from_millis(250)).unwrap();
        assert_eq!(sim.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn drives_through_the_controls_trait() {
        fn run_two(controls: &mut dyn LifeControls) -> Snapshot {
            controls.toggle_cell(0, 0).unwrap();
            controls.start();
            controls.snapshot()
        }
        let mut sim = Simulation::default();
        let snapshot = run_two(&mut sim);
        assert!(snapshot.running);
        assert_eq!(snapshot.board.get(0, 0), Some(1));
    }
}
