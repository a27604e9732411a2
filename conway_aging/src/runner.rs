//! Timer-driven tick loop on a tokio runtime.
//!
//! [`Runner`] wraps a [`Simulation`] behind a mutex and, while it is running,
//! keeps exactly one task alive that sleeps for the tick interval, ticks,
//! and reschedules itself. Stopping is simply not rescheduling: the loop
//! exits as soon as it sees the simulation idle or a newer run. Every state
//! change is published as a [`Snapshot`] on a watch channel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::board::Board;
use crate::config::LifeConfig;
use crate::error::Result;
use crate::simulation::{LifeControls, Simulation, Snapshot, TickOutcome};

struct Shared {
    sim: Mutex<Simulation>,
    pending: Mutex<Option<JoinHandle<()>>>,
    updates: watch::Sender<Snapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Simulation> {
        self.sim.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self) {
        let snapshot = self.lock().snapshot();
        self.updates.send_replace(snapshot);
    }

    /// Locks the slot holding the tick task. Lifecycle commands take this
    /// lock before the simulation lock and hold it until the slot matches
    /// the new state, so concurrent start/stop calls cannot interleave.
    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a command that may stop the simulation and drops the tick task
    /// if it did.
    fn halt_with<T>(&self, command: impl FnOnce(&mut Simulation) -> T) -> T {
        let mut pending = self.lock_pending();
        let (result, running) = {
            let mut sim = self.lock();
            let result = command(&mut *sim);
            (result, sim.is_running())
        };
        if !running {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
        drop(pending);
        self.publish();
        result
    }
}

/// Cloneable handle to a simulation driven by a tokio timer.
#[derive(Clone)]
pub struct Runner {
    shared: Arc<Shared>,
    handle: Handle,
}

impl Runner {
    /// Builds a simulation from `config`; ticks are spawned on `handle`.
    pub fn new(config: LifeConfig, handle: Handle) -> Result<Self> {
        let sim = Simulation::new(config)?;
        let (updates, _) = watch::channel(sim.snapshot());
        Ok(Self {
            shared: Arc::new(Shared {
                sim: Mutex::new(sim),
                pending: Mutex::new(None),
                updates,
            }),
            handle,
        })
    }

    /// Latest snapshot, taken directly from the simulation.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot()
    }

    /// A receiver that is notified after every tick, edit and command.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.updates.subscribe()
    }

    pub fn tick_interval(&self) -> Duration {
        self.shared.lock().tick_interval()
    }

    pub fn set_tick_interval(&self, tick_interval: Duration) -> Result<()> {
        self.shared.lock().set_tick_interval(tick_interval)
    }

    pub fn start(&self) {
        let mut pending = self.shared.lock_pending();
        let run = {
            let mut sim = self.shared.lock();
            if !sim.start() {
                return;
            }
            sim.run_id()
        };
        if let Some(task) = pending.take() {
            task.abort();
        }
        *pending = Some(self.handle.spawn(tick_loop(Arc::clone(&self.shared), run)));
        drop(pending);
        self.shared.publish();
    }

    pub fn stop(&self) {
        self.shared.halt_with(Simulation::stop);
    }

    pub fn clear(&self) {
        self.shared.halt_with(Simulation::clear);
    }

    pub fn resize(&self, rows: usize, cols: usize) -> Result<()> {
        self.shared.halt_with(|sim| sim.resize(rows, cols))
    }

    pub fn load(&self, board: Board) {
        self.shared.halt_with(|sim| sim.load(board));
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<()> {
        self.shared.lock().toggle_cell(row, col)?;
        self.shared.publish();
        Ok(())
    }

    pub fn paint_cell(&self, row: usize, col: usize) -> Result<()> {
        self.shared.lock().paint_cell(row, col)?;
        self.shared.publish();
        Ok(())
    }
}

async fn tick_loop(shared: Arc<Shared>, run: u64) {
    loop {
        let interval = {
            let sim = shared.lock();
            if !sim.is_running() || sim.run_id() != run {
                break;
            }
            sim.tick_interval()
        };

        tokio::time::sleep(interval).await;

        let outcome = {
            let mut sim = shared.lock();
            if sim.run_id() != run {
                break;
            }
            sim.tick()
        };
        shared.publish();

        if !matches!(outcome, TickOutcome::Advanced { .. }) {
            break;
        }
    }
    debug!(run, "tick loop finished");
}

impl LifeControls for Runner {
    fn start(&mut self) {
        Runner::start(self);
    }

    fn stop(&mut self) {
        Runner::stop(self);
    }

    fn clear(&mut self) {
        Runner::clear(self);
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        Runner::resize(self, rows, cols)
    }

    fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        Runner::toggle_cell(self, row, col)
    }

    fn paint_cell(&mut self, row: usize, col: usize) -> Result<()> {
        Runner::paint_cell(self, row, col)
    }

    fn snapshot(&self) -> Snapshot {
        Runner::snapshot(self)
    }
}
