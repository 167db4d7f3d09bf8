use crate::runtime::RuntimeHandle;
use crate::{FrameCallbackId, TimerId};

/// Frame and timer scheduling bound to a runtime.
///
/// Every registration returned here is scoped: dropping it releases the
/// underlying callback, and releasing twice is harmless.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Runs `callback` once with the time of the next frame.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        FrameCallbackRegistration {
            id: self.runtime.register_frame_callback(callback),
            runtime: self.runtime.clone(),
        }
    }

    /// Delay-then-fire. The callback runs at most once.
    pub fn with_delay(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        TimerRegistration {
            id: self.runtime.post_delayed(delay_millis, callback),
            runtime: self.runtime.clone(),
        }
    }
}

/// Handle to a pending frame callback. Inert if the runtime was already gone.
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

/// Handle to a pending delayed callback.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    /// Whether the callback is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.id
            .map(|id| self.runtime.is_timer_pending(id))
            .unwrap_or(false)
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        self.release();
    }
}
