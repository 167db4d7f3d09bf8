//! Platform abstraction traits for the StackView runtime.
//!
//! The runtime never talks to a windowing system directly. Hosts implement
//! these traits to wake their event loop and to provide wall-clock time.

/// Schedules frames on behalf of the runtime.
///
/// Called whenever an animation, a timer or any other piece of work needs the
/// host to drive another frame.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
