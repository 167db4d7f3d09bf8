//! Translation transforms applied by the host renderer.

use crate::geometry::Rect;

/// A 2D translation in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const IDENTITY: Translation = Translation { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn horizontal(x: f32) -> Self {
        Self { x, y: 0.0 }
    }

    pub const fn vertical(y: f32) -> Self {
        Self { x: 0.0, y }
    }

    pub fn apply_to_rect(&self, rect: Rect) -> Rect {
        rect.translate(self.x, self.y)
    }
}

/// Linear interpolation of `value` from `[input_start, input_end]` onto
/// `[output_start, output_end]`, extrapolating outside the input range.
pub fn interpolate(
    value: f32,
    (input_start, input_end): (f32, f32),
    (output_start, output_end): (f32, f32),
) -> f32 {
    let span = input_end - input_start;
    if span == 0.0 {
        return output_start;
    }
    let fraction = (value - input_start) / span;
    output_start + (output_end - output_start) * fraction
}
