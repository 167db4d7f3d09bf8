//! Per-edge geometry for the panel.
//!
//! Every side-dependent formula lives in [`SideStrategy`], picked once when
//! the panel is built. Coordinates are window ("page") coordinates with the
//! origin at the top-left corner.

use stackview_foundation::gesture_constants::{GRAB_BAND_INSIDE, GRAB_BAND_OUTSIDE};
use stackview_ui_graphics::{interpolate, Point, Size, Translation};

/// Screen edge the panel slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    #[default]
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Side {
    pub fn axis(self) -> Axis {
        match self {
            Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    pub fn strategy(self) -> SideStrategy {
        SideStrategy { side: self }
    }
}

/// Result of feeding one touch-move sample through a [`SideStrategy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Raw per-event delta, before side normalization.
    pub velocity: f32,
    /// Clamped progress to apply.
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideStrategy {
    side: Side,
}

impl SideStrategy {
    pub fn side(&self) -> Side {
        self.side
    }

    /// Window dimension the panel travels along.
    pub fn extent(&self, window: Size) -> f32 {
        match self.side.axis() {
            Axis::Vertical => window.height,
            Axis::Horizontal => window.width,
        }
    }

    fn usable_extent(&self, window: Size) -> Option<f32> {
        let extent = self.extent(window);
        (extent > 0.0 && extent.is_finite()).then_some(extent)
    }

    fn coordinate(&self, point: Point) -> f32 {
        match self.side.axis() {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// `(extent - coordinate) / extent`: how far from the far edge the touch is.
    ///
    /// `None` for a zero-sized (or non-finite) extent or a non-finite touch.
    pub fn axis_sample(&self, point: Point, window: Size) -> Option<f32> {
        let extent = self.usable_extent(window)?;
        finite((extent - self.coordinate(point)) / extent)
    }

    /// Progress implied by a touch position, unclamped.
    pub fn raw_progress(&self, point: Point, window: Size) -> Option<f32> {
        match self.side {
            Side::Bottom | Side::Right => self.axis_sample(point, window),
            Side::Left => {
                let extent = self.usable_extent(window)?;
                finite(point.x / extent)
            }
        }
    }

    /// Velocity and clamped progress for a touch-move sample.
    ///
    /// Velocity is always measured against the un-inverted axis sample, even
    /// for [`Side::Left`] whose progress is inverted.
    pub fn drag(
        &self,
        point: Point,
        window: Size,
        current: f32,
        max_stack_point: f32,
    ) -> Option<DragSample> {
        let sample = self.axis_sample(point, window)?;
        let progress = match self.side {
            Side::Bottom | Side::Right => sample.clamp(0.0, max_stack_point),
            Side::Left => (1.0 - sample).clamp(0.0, 1.0),
        };
        Some(DragSample {
            velocity: sample - current,
            progress,
        })
    }

    /// Flips velocity so that positive always means "opening" at release.
    pub fn normalize_velocity(&self, velocity: f32) -> f32 {
        match self.side {
            Side::Left => -velocity,
            Side::Bottom | Side::Right => velocity,
        }
    }

    /// Distance of the panel's leading edge from its home edge.
    pub fn leading_edge_offset(&self, progress: f32, window: Size) -> f32 {
        self.extent(window) * (1.0 - progress)
    }

    /// Inclusive coordinate range along the axis that grabs the panel.
    pub fn grab_band(&self, progress: f32, window: Size) -> (f32, f32) {
        let offset = self.leading_edge_offset(progress, window);
        match self.side {
            Side::Bottom | Side::Right => (offset - GRAB_BAND_INSIDE, offset + GRAB_BAND_OUTSIDE),
            Side::Left => {
                let edge = window.width - offset;
                (edge - GRAB_BAND_OUTSIDE, edge + GRAB_BAND_INSIDE)
            }
        }
    }

    pub fn hits_grab_band(&self, point: Point, progress: f32, window: Size) -> bool {
        let (start, end) = self.grab_band(progress, window);
        let coordinate = self.coordinate(point);
        coordinate >= start && coordinate <= end
    }

    /// Translation that places the panel for `progress`: the full extent at 0,
    /// none at 1.
    pub fn translation(&self, progress: f32, window: Size) -> Translation {
        match self.side {
            Side::Bottom => {
                Translation::vertical(interpolate(progress, (0.0, 1.0), (window.height, 0.0)))
            }
            Side::Right => {
                Translation::horizontal(interpolate(progress, (0.0, 1.0), (window.width, 0.0)))
            }
            Side::Left => {
                Translation::horizontal(interpolate(progress, (0.0, 1.0), (-window.width, 0.0)))
            }
        }
    }
}

fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}
