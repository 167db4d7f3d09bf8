//! Animation system for StackView
//!
//! Provides time-based tweens driven by the runtime's frame clock. An
//! [`Animatable`] publishes every intermediate value through an observable
//! state, so readers can subscribe instead of polling.

mod animatable;
mod easing;

pub use animatable::{Animatable, AnimationSpec, Lerp};
pub use easing::Easing;

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
