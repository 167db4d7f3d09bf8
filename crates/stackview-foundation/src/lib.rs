//! Pointer input and gesture tuning shared by StackView components.

pub mod gesture_constants;
mod pointer;

pub use pointer::{PointerEvent, PointerEventKind};

#[cfg(test)]
#[path = "tests/pointer_tests.rs"]
mod tests;
