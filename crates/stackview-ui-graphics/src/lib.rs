//! Pure math/data for StackView layout
//!
//! Geometry primitives, color parsing and translation transforms shared by
//! the animation and UI crates.

mod color;
mod geometry;
mod transform;

pub use color::*;
pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, Size};
    pub use crate::transform::Translation;
}

#[cfg(test)]
#[path = "tests/graphics_tests.rs"]
mod tests;
