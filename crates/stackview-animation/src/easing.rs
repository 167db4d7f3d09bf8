/// Easing curves applied to a linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease-in-out`: slow at both ends. Used for panel movement.
    EaseInOut,
    /// Material standard curve; the default for [`crate::AnimationSpec`].
    FastOutSlowIn,
}

impl Easing {
    /// Maps a fraction in `[0, 1]` to eased progress in `[0, 1]`.
    /// Inputs outside the range are clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::EaseInOut => EASE_IN_OUT.y_for_x(fraction),
            Easing::FastOutSlowIn => FAST_OUT_SLOW_IN.y_for_x(fraction),
        }
    }
}

const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

/// Unit cubic bezier from (0, 0) to (1, 1) with two control points.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const TOLERANCE: f32 = 1e-5;
    const MAX_STEPS: usize = 24;

    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bernstein form of one coordinate at parameter `t`.
    fn coordinate(p1: f32, p2: f32, t: f32) -> f32 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    /// x is monotonic in t for control x values in `[0, 1]`, so bisection
    /// always converges.
    fn y_for_x(&self, x: f32) -> f32 {
        if x <= 0.0 || x >= 1.0 {
            return x;
        }
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = x;
        for _ in 0..Self::MAX_STEPS {
            let error = Self::coordinate(self.x1, self.x2, t) - x;
            if error.abs() < Self::TOLERANCE {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = (low + high) * 0.5;
        }
        Self::coordinate(self.y1, self.y2, t)
    }
}
