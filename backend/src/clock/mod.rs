//! Simulation Clock
//!
//! The engine itself has no time dependency: it exposes `tick()` and
//! something must call it. That something is a [`TickSource`], the
//! injectable tick driver. Tests drive a [`ManualClock`] synchronously;
//! hosts drive a [`WallClock`], one tick per interval on a worker thread.
//!
//! At most one handler is attached to a source at a time; attaching a new
//! one replaces (and stops) the previous, so two clocks never run
//! concurrently against the same source.

pub mod runner;

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

/// Flow control returned by a tick handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    /// Keep ticking
    Continue,
    /// Detach: the session left Running and no further tick may fire
    Stop,
}

/// An injectable source of tick callbacks
///
/// Implementations fire the attached handler once per nominal second (or
/// per test-driven `fire`), stop as soon as the handler returns
/// [`TickFlow::Stop`], and replace any previous handler on `start`.
pub trait TickSource {
    /// Attach a handler, replacing (and stopping) any previous one.
    fn start(&mut self, handler: Box<dyn FnMut() -> TickFlow + Send>);

    /// Detach the current handler, if any. Synchronous: when this returns,
    /// no further tick will fire.
    fn stop(&mut self);

    /// Whether a handler is currently attached and live.
    fn is_attached(&self) -> bool;
}

/// Test clock driven synchronously by calling [`ManualClock::fire`]
///
/// Lets tests step the simulation tick-by-tick without wall-clock delays.
#[derive(Default)]
pub struct ManualClock {
    handler: Option<Box<dyn FnMut() -> TickFlow + Send>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire one tick. Returns whether a handler ran; the handler is
    /// detached once it reports [`TickFlow::Stop`].
    pub fn fire(&mut self) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                if handler() == TickFlow::Stop {
                    self.handler = None;
                }
                true
            }
            None => false,
        }
    }
}

impl TickSource for ManualClock {
    fn start(&mut self, handler: Box<dyn FnMut() -> TickFlow + Send>) {
        self.handler = Some(handler);
    }

    fn stop(&mut self) {
        self.handler = None;
    }

    fn is_attached(&self) -> bool {
        self.handler.is_some()
    }
}

/// Real clock: fires the handler once per interval on a worker thread
///
/// The worker exits when the handler returns [`TickFlow::Stop`], on
/// [`TickSource::stop`] (which joins the thread), or when the clock is
/// dropped. Do not call `stop` from inside the handler; return
/// [`TickFlow::Stop`] instead.
pub struct WallClock {
    interval: Duration,
    worker: Option<Worker>,
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl WallClock {
    /// One tick per second, the nominal simulation cadence.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Custom cadence, for fast demos and tests.
    ///
    /// # Panics
    /// Panics if `interval` is zero.
    pub fn with_interval(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "tick interval must be non-zero");
        Self {
            interval,
            worker: None,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn start(&mut self, mut handler: Box<dyn FnMut() -> TickFlow + Send>) {
        // At most one worker system-wide: replace any previous one
        self.stop();

        let interval = self.interval;
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            debug!(?interval, "clock attached");
            loop {
                match stop_rx.recv_timeout(interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        if handler() == TickFlow::Stop {
                            break;
                        }
                    }
                }
            }
            debug!("clock detached");
        });

        self.worker = Some(Worker { stop_tx, handle });
    }

    fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.handle.join();
        }
    }

    fn is_attached(&self) -> bool {
        self.worker
            .as_ref()
            .map_or(false, |w| !w.handle.is_finished())
    }
}

impl Drop for WallClock {
    fn drop(&mut self) {
        self.stop();
    }
}
