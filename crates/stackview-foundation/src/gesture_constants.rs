//! Gesture tuning for edge-anchored drag panels.
//!
//! Distances are in logical pixels. Velocities are per-event deltas of
//! normalized progress, not rates per second; the thresholds below are
//! calibrated to that unit.

/// How far the grab band reaches into the revealed panel from its leading edge.
pub const GRAB_BAND_INSIDE: f32 = 14.0;

/// How far the grab band reaches past the leading edge into the uncovered area.
pub const GRAB_BAND_OUTSIDE: f32 = 36.0;

/// Release velocity magnitude that must be exceeded (strictly) to count as a fling.
pub const FLING_VELOCITY_THRESHOLD: f32 = 0.01;

/// Velocity above the threshold that doubles the fling speed factor.
pub const FLING_SPEED_SCALE: f32 = 0.05;

/// Duration of a settle animation and the base of a fling duration.
pub const SETTLE_DURATION_MS: f32 = 300.0;

/// Duration of the opening animation on mount.
pub const APPEAR_DURATION_MS: u64 = 500;

/// Delay between a closing release and the dismissal callback.
pub const DISMISS_DELAY_MS: u64 = 1;
