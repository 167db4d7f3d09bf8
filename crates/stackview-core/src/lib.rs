//! Core runtime for StackView.
//!
//! Everything in this crate is single-threaded: a [`Runtime`] owns the frame
//! callback and timer queues, [`FrameClock`] hands out scoped registrations
//! against it, and [`MutableState`] carries observable values between the
//! animation driver and whoever renders them.

mod collections;
mod frame_clock;
mod platform;
mod runtime;
mod state;

pub type FrameCallbackId = u64;
pub type TimerId = u64;

pub use frame_clock::{FrameCallbackRegistration, FrameClock, TimerRegistration};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{Runtime, RuntimeHandle};
#[cfg(any(test, feature = "test-helpers"))]
pub use runtime::{TestRuntime, TestScheduler};
pub use state::{MutableState, State, Subscription, SubscriptionId};

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod runtime_tests;

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
