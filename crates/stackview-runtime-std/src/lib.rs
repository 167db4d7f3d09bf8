//! Wall-clock runtime services backed by `web-time`.
//!
//! A host event loop builds a [`StdRuntime`], hands [`StdRuntime::handle`] to
//! the panels it mounts, and calls [`StdRuntime::pump_frame`] each time it
//! redraws. Frame requests are latched in [`StdScheduler`] and can wake the
//! loop through an optional waker.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use stackview_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::Instant;

type FrameWaker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Latches frame requests from the runtime.
#[derive(Default)]
pub struct StdScheduler {
    pending: AtomicBool,
    waker: RwLock<Option<FrameWaker>>,
}

impl StdScheduler {
    /// Consumes the latched request, if any.
    pub fn take_frame_request(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }

    fn install_waker(&self, waker: Option<FrameWaker>) {
        match self.waker.write() {
            Ok(mut slot) => *slot = waker,
            Err(_) => log::warn!("frame waker lock poisoned; leaving previous waker in place"),
        }
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.pending.store(true, Ordering::SeqCst);
        let waker = self.waker.read().ok().and_then(|slot| slot.clone());
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field("pending", &self.pending.load(Ordering::SeqCst))
            .finish()
    }
}

/// [`Clock`] over [`web_time::Instant`], so it also works on wasm.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// A [`Runtime`] whose frame times are wall-clock nanoseconds since creation.
#[derive(Clone)]
pub struct StdRuntime {
    runtime: Runtime,
    scheduler: Arc<StdScheduler>,
    epoch: Instant,
}

impl StdRuntime {
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        Self {
            runtime: Runtime::new(Arc::clone(&scheduler) as Arc<dyn RuntimeScheduler>),
            scheduler,
            epoch: StdClock.now(),
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn scheduler(&self) -> Arc<StdScheduler> {
        Arc::clone(&self.scheduler)
    }

    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Called from whatever thread schedules a frame; typically posts a
    /// redraw to the host window.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.scheduler.install_waker(Some(Arc::new(waker)));
    }

    pub fn clear_frame_waker(&self) {
        self.scheduler.install_waker(None);
    }

    /// Nanoseconds since this runtime was created.
    pub fn frame_time_nanos(&self) -> u64 {
        StdClock.elapsed_nanos(self.epoch)
    }

    /// Fires due timers and pending frame callbacks at the current time.
    ///
    /// Returns `true` if more frames are wanted.
    pub fn pump_frame(&self) -> bool {
        self.handle().drain_frame_callbacks(self.frame_time_nanos());
        self.runtime.needs_frame()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("frame_time_nanos", &self.frame_time_nanos())
            .field("needs_frame", &self.runtime.needs_frame())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
