use smallvec::SmallVec;
use stackview_foundation::gesture_constants::{
    FLING_SPEED_SCALE, FLING_VELOCITY_THRESHOLD, SETTLE_DURATION_MS,
};

use crate::error::StackViewError;

/// Detents as percentages of full reveal, in configuration order.
///
/// Fully closed (0) is always an implicit candidate after the configured
/// points. Configuration order matters: it breaks distance ties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapPoints {
    points: SmallVec<[u32; 4]>,
}

impl SnapPoints {
    pub const MAX_PERCENT: u32 = 100;

    /// Validates and collects snap points. Repeated values keep their first position.
    pub fn new(points: impl IntoIterator<Item = u32>) -> Result<Self, StackViewError> {
        let mut collected: SmallVec<[u32; 4]> = SmallVec::new();
        for value in points {
            if value == 0 || value > Self::MAX_PERCENT {
                return Err(StackViewError::SnapPointOutOfRange { value });
            }
            if !collected.contains(&value) {
                collected.push(value);
            }
        }
        if collected.is_empty() {
            return Err(StackViewError::EmptySnapPoints);
        }
        Ok(Self { points: collected })
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.points
    }

    pub fn max_percent(&self) -> u32 {
        // Non-empty by construction.
        self.points.iter().copied().max().unwrap_or(Self::MAX_PERCENT)
    }

    /// Progress at which the panel counts as fully open.
    pub fn max_stack_point(&self) -> f32 {
        self.max_percent() as f32 / 100.0
    }

    /// Configured points followed by the implicit closed position.
    pub fn candidates(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().copied().chain(std::iter::once(0))
    }

    /// Candidate nearest to `progress`; the first one wins on ties.
    pub fn closest(&self, progress: f32) -> u32 {
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for candidate in self.candidates() {
            let distance = (progress - candidate as f32 / 100.0).abs();
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self {
            points: SmallVec::from_slice(&[Self::MAX_PERCENT]),
        }
    }
}

impl TryFrom<&[u32]> for SnapPoints {
    type Error = StackViewError;

    fn try_from(points: &[u32]) -> Result<Self, Self::Error> {
        Self::new(points.iter().copied())
    }
}

impl TryFrom<Vec<u32>> for SnapPoints {
    type Error = StackViewError;

    fn try_from(points: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseKind {
    /// Fast motion toward closed.
    FlingClose,
    /// Fast motion toward open.
    FlingOpen,
    /// Slow release; settles on the nearest candidate (percent).
    Settle { snap_point: u32 },
}

/// What the panel does when the finger lifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub kind: ReleaseKind,
    pub target: f32,
    pub duration_ms: f32,
    /// The panel ends fully closed and the host should be told.
    pub dismiss: bool,
}

/// Decides the release outcome.
///
/// `velocity` must already be normalized so that positive means opening.
/// Fling thresholds are strict: exactly +/-0.01 settles instead.
pub fn resolve_release(progress: f32, velocity: f32, snap_points: &SnapPoints) -> Release {
    if velocity < -FLING_VELOCITY_THRESHOLD {
        let speed = -(velocity + FLING_VELOCITY_THRESHOLD) / FLING_SPEED_SCALE;
        return Release {
            kind: ReleaseKind::FlingClose,
            target: 0.0,
            duration_ms: SETTLE_DURATION_MS / speed.max(1.0),
            dismiss: true,
        };
    }

    if velocity > FLING_VELOCITY_THRESHOLD {
        let speed = (velocity - FLING_VELOCITY_THRESHOLD) / FLING_SPEED_SCALE;
        return Release {
            kind: ReleaseKind::FlingOpen,
            target: snap_points.max_stack_point(),
            duration_ms: SETTLE_DURATION_MS / speed.max(1.0),
            dismiss: false,
        };
    }

    let snap_point = snap_points.closest(progress);
    Release {
        kind: ReleaseKind::Settle { snap_point },
        target: snap_point as f32 / 100.0,
        duration_ms: SETTLE_DURATION_MS,
        dismiss: snap_point == 0,
    }
}
