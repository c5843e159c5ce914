//! Gravity timers
//!
//! A board owns one [`GravityTimer`]. The board re-arms it whenever its fall
//! cadence must restart (manual soft drop, line clear) and cancels it on game
//! over. Every re-arm bumps a generation counter; ticks carry the generation
//! they were scheduled under so a tick already in flight when the timer was
//! re-armed can be recognised and dropped.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::{Result, TetrisError};
use crate::penalty::BoardId;

/// One gravity step for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTick {
    pub board: BoardId,
    pub generation: u64,
}

/// Trait for the repeating timer that drives a board's gravity
pub trait GravityTimer: Send {
    /// Cancel any pending tick and start ticking every `interval`
    fn rearm(&mut self, interval: Duration);

    /// Stop ticking
    fn cancel(&mut self);

    /// Generation of the latest arming
    fn generation(&self) -> u64;

    /// Interval the timer is currently ticking at, if armed
    fn interval(&self) -> Option<Duration>;

    /// Whether a tick scheduled under `generation` should still be honoured
    fn is_current(&self, generation: u64) -> bool {
        self.interval().is_some() && generation == self.generation()
    }
}

/// Factory creating the timer for each board of a game
///
/// Any `FnMut(BoardId) -> Result<Box<dyn GravityTimer>>` closure qualifies.
pub trait GravityFactory: FnMut(BoardId) -> Result<Box<dyn GravityTimer>> {}

impl<F> GravityFactory for F where F: FnMut(BoardId) -> Result<Box<dyn GravityTimer>> {}

/// Timer that never fires on its own
///
/// Records how it was armed, so headless drivers and tests can deliver ticks
/// themselves with [`ManualGravity::tick`].
#[derive(Debug)]
pub struct ManualGravity {
    board: BoardId,
    generation: u64,
    interval: Option<Duration>,
}

impl ManualGravity {
    pub fn new(board: BoardId) -> Self {
        Self {
            board,
            generation: 0,
            interval: None,
        }
    }

    /// Tick for the current arming
    pub fn tick(&self) -> GravityTick {
        GravityTick {
            board: self.board,
            generation: self.generation,
        }
    }
}

impl GravityTimer for ManualGravity {
    fn rearm(&mut self, interval: Duration) {
        self.generation += 1;
        self.interval = Some(interval);
    }

    fn cancel(&mut self) {
        self.interval = None;
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

/// Gravity driven by a tokio task
///
/// The task sends a [`GravityTick`] over a flume channel every interval. The
/// event loop receiving the ticks hands them back to the board, which ignores
/// ticks whose generation is stale.
pub struct GravityClock {
    board: BoardId,
    tick_tx: flume::Sender<GravityTick>,
    runtime: tokio::runtime::Handle,
    task: Option<JoinHandle<()>>,
    generation: u64,
    interval: Option<Duration>,
}

impl GravityClock {
    /// Create a clock for `board`; must be called from inside a tokio runtime
    pub fn new(board: BoardId, tick_tx: flume::Sender<GravityTick>) -> Result<Self> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| TetrisError::RuntimeUnavailable(e.to_string()))?;
        Ok(Self {
            board,
            tick_tx,
            runtime,
            task: None,
            generation: 0,
            interval: None,
        })
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl GravityTimer for GravityClock {
    fn rearm(&mut self, interval: Duration) {
        self.abort_task();
        self.generation += 1;
        self.interval = Some(interval);

        let tick = GravityTick {
            board: self.board,
            generation: self.generation,
        };
        let tick_tx = self.tick_tx.clone();
        tracing::debug!(
            "Gravity for {} board armed at {:?} (generation {})",
            self.board,
            interval,
            self.generation
        );
        self.task = Some(self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tick_tx.send_async(tick).await.is_err() {
                    // Receiver gone, nobody to drive
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        self.abort_task();
        self.interval = None;
        tracing::debug!("Gravity for {} board cancelled", self.board);
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Drop for GravityClock {
    fn drop(&mut self) {
        self.abort_task();
    }
}
