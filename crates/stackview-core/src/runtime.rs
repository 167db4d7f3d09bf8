use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::collections::map::HashMap;
use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::{FrameCallbackId, TimerId};

const NANOS_PER_MILLI: u64 = 1_000_000;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;
type TimerCallback = Box<dyn FnOnce() + 'static>;

struct Timer {
    due_nanos: u64,
    callback: TimerCallback,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    /// Timestamp of the most recent frame; timers are scheduled relative to it.
    frame_time_nanos: Cell<u64>,
    next_id: Cell<u64>,
    /// Registration order is run order.
    frame_callbacks: RefCell<Vec<(FrameCallbackId, FrameCallback)>>,
    timers: RefCell<HashMap<TimerId, Timer>>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_time_nanos: Cell::new(0),
            next_id: Cell::new(1),
            frame_callbacks: RefCell::new(Vec::new()),
            timers: RefCell::new(HashMap::default()),
        }
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn request_frame(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn has_pending_timers(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    fn has_work(&self) -> bool {
        self.has_frame_callbacks() || self.has_pending_timers()
    }

    /// Drops the frame request once the last piece of work is gone.
    fn settle_needs_frame(&self) {
        if !self.has_work() {
            self.needs_frame.set(false);
        }
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.allocate_id();
        self.frame_callbacks.borrow_mut().push((id, callback));
        self.request_frame();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.frame_callbacks
            .borrow_mut()
            .retain(|(entry_id, _)| *entry_id != id);
        self.settle_needs_frame();
    }

    fn post_delayed(&self, delay_millis: u64, callback: TimerCallback) -> TimerId {
        let id = self.allocate_id();
        let due_nanos = self
            .frame_time_nanos
            .get()
            .saturating_add(delay_millis.saturating_mul(NANOS_PER_MILLI));
        self.timers
            .borrow_mut()
            .insert(id, Timer { due_nanos, callback });
        log::trace!("timer {id} due at {due_nanos}ns");
        self.request_frame();
        id
    }

    fn cancel_timer(&self, id: TimerId) -> bool {
        let removed = self.timers.borrow_mut().remove(&id).is_some();
        if removed {
            log::trace!("timer {id} cancelled");
        }
        self.settle_needs_frame();
        removed
    }

    /// Removes every timer due by `now`, earliest first (ties by id).
    fn take_due_timers(&self, now: u64) -> Vec<TimerCallback> {
        let mut timers = self.timers.borrow_mut();
        let mut due: Vec<(u64, TimerId)> = timers
            .iter()
            .filter(|(_, timer)| timer.due_nanos <= now)
            .map(|(id, timer)| (timer.due_nanos, *id))
            .collect();
        due.sort_unstable();
        due.into_iter()
            .filter_map(|(_, id)| timers.remove(&id))
            .map(|timer| timer.callback)
            .collect()
    }

    fn run_frame(&self, frame_time_nanos: u64) {
        let now = frame_time_nanos.max(self.frame_time_nanos.get());
        self.frame_time_nanos.set(now);

        for callback in self.take_due_timers(now) {
            callback();
        }

        // Callbacks registered while this batch runs wait for the next frame.
        let batch = std::mem::take(&mut *self.frame_callbacks.borrow_mut());
        for (_, callback) in batch {
            callback(now);
        }

        if self.has_work() {
            self.request_frame();
        } else {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the frame callback queue and the timer queue.
///
/// Everything registered through the runtime runs on the thread that drives
/// [`RuntimeHandle::drain_frame_callbacks`]; nothing here is `Send`.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether a frame callback or timer is waiting for a frame.
    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
#[derive(Default)]
pub struct TestScheduler;

#[cfg(any(test, feature = "test-helpers"))]
impl RuntimeScheduler for TestScheduler {
    fn schedule_frame(&self) {}
}

/// Runtime driven by hand from tests, on a synthetic clock starting at 0.
#[cfg(any(test, feature = "test-helpers"))]
pub struct TestRuntime {
    runtime: Runtime,
    frame_time_nanos: Cell<u64>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl TestRuntime {
    /// ~60 FPS.
    pub const FRAME_NANOS: u64 = 16_666_667;

    pub fn new() -> Self {
        Self {
            runtime: Runtime::new(Arc::new(TestScheduler)),
            frame_time_nanos: Cell::new(0),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos.get()
    }

    /// Advances the synthetic clock by one frame and drains the runtime.
    pub fn advance_frame(&self) {
        self.advance_by_nanos(Self::FRAME_NANOS);
    }

    pub fn advance_by_millis(&self, millis: u64) {
        self.advance_by_nanos(millis * NANOS_PER_MILLI);
    }

    fn advance_by_nanos(&self, nanos: u64) {
        let next = self.frame_time_nanos.get() + nanos;
        self.frame_time_nanos.set(next);
        self.runtime.handle().drain_frame_callbacks(next);
    }

    /// Pumps frames until nothing is pending or `max_frames` ran out.
    /// Returns the number of frames driven.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.runtime.needs_frame() {
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak handle to a [`Runtime`].
///
/// Every operation degrades to a no-op once the runtime has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    fn with_inner<R>(&self, f: impl FnOnce(&RuntimeInner) -> R) -> Option<R> {
        self.inner.upgrade().map(|inner| f(inner.as_ref()))
    }

    /// Asks the host for a frame even if nothing is registered.
    pub fn schedule(&self) {
        self.with_inner(RuntimeInner::request_frame);
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.with_inner(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.with_inner(|inner| inner.cancel_frame_callback(id));
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.with_inner(RuntimeInner::has_frame_callbacks)
            .unwrap_or(false)
    }

    /// Runs `callback` on the first frame at least `delay_millis` after the
    /// most recent frame.
    pub fn post_delayed(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> Option<TimerId> {
        self.with_inner(|inner| inner.post_delayed(delay_millis, Box::new(callback)))
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        self.with_inner(|inner| inner.cancel_timer(id))
            .unwrap_or(false)
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.with_inner(|inner| inner.timers.borrow().contains_key(&id))
            .unwrap_or(false)
    }

    pub fn has_pending_timers(&self) -> bool {
        self.with_inner(RuntimeInner::has_pending_timers)
            .unwrap_or(false)
    }

    /// Fires due timers, then every frame callback registered before this call.
    ///
    /// Frame time never moves backwards: an earlier timestamp is raised to
    /// the last one seen.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.with_inner(|inner| inner.run_frame(frame_time_nanos));
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.with_inner(|inner| inner.frame_time_nanos.get())
            .unwrap_or(0)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}
