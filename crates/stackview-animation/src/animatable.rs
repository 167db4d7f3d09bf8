use std::cell::RefCell;
use std::rc::Rc;

use stackview_core::{
    FrameCallbackRegistration, FrameClock, MutableState, RuntimeHandle, State, Subscription,
};

use crate::easing::Easing;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Values an [`Animatable`] can tween between.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Duration, easing and start delay of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased fraction after `elapsed_nanos`; `None` while still in the delay.
    fn fraction_at(&self, elapsed_nanos: u64) -> Option<f32> {
        let delay_nanos = self.delay_millis.saturating_mul(NANOS_PER_MILLI);
        let running = elapsed_nanos.checked_sub(delay_nanos)?;
        let duration_nanos = self.duration_millis.saturating_mul(NANOS_PER_MILLI).max(1);
        let linear = (running as f64 / duration_nanos as f64).min(1.0) as f32;
        Some(if linear >= 1.0 {
            1.0
        } else {
            self.easing.transform(linear)
        })
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// One in-flight tween. Its clock starts on the first frame it sees.
struct Tween<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
    started_at: Option<u64>,
}

enum Step<T> {
    Hold,
    Moved(T),
    Finished(T),
}

impl<T: Lerp + Clone> Tween<T> {
    fn step(&mut self, frame_time_nanos: u64) -> Step<T> {
        let started_at = *self.started_at.get_or_insert(frame_time_nanos);
        match self.spec.fraction_at(frame_time_nanos.saturating_sub(started_at)) {
            None => Step::Hold,
            Some(fraction) if fraction >= 1.0 => Step::Finished(self.to.clone()),
            Some(fraction) => Step::Moved(self.from.lerp(&self.to, fraction)),
        }
    }
}

/// Value holder that tweens toward a target on the runtime's frame clock.
///
/// Starting a new animation while one is in flight redirects it from the
/// current value; nothing is queued. Every frame writes the interpolated value
/// into the backing state, which notifies subscribers.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
    state: MutableState<T>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    state: MutableState<T>,
    clock: FrameClock,
    current: T,
    tween: Option<Tween<T>>,
    last_spec: AnimationSpec,
    frame: Option<FrameCallbackRegistration>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let state = MutableState::new(initial.clone());
        let inner = AnimatableInner {
            state: state.clone(),
            clock: runtime.frame_clock(),
            current: initial,
            tween: None,
            last_spec: AnimationSpec::default(),
            frame: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
            state,
        }
    }

    /// Tween from the current value to `target`, superseding any running animation.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_frame();
            inner.tween = Some(Tween {
                from: inner.current.clone(),
                to: target,
                spec,
                started_at: None,
            });
            inner.last_spec = spec;
        }
        Self::request_frame(&self.inner);
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_frame();
            inner.tween = None;
            inner.current = value.clone();
        }
        self.state.set(value);
    }

    /// Freeze at the current value.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_frame();
        inner.tween = None;
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Where the running animation is headed, or the resting value.
    pub fn target(&self) -> T {
        let inner = self.inner.borrow();
        match &inner.tween {
            Some(tween) => tween.to.clone(),
            None => inner.current.clone(),
        }
    }

    /// Spec passed to the most recent [`Animatable::animate_to`].
    pub fn animation_spec(&self) -> AnimationSpec {
        self.inner.borrow().last_spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().frame.is_some()
    }

    pub fn state(&self) -> State<T> {
        self.state.as_state()
    }

    /// Listen to every value written, including intermediate animation frames.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    fn request_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.frame.is_some() || inner.tween.is_none() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let frame = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(this) = weak.upgrade() {
                Self::advance(&this, frame_time_nanos);
            }
        });
        this.borrow_mut().frame = Some(frame);
    }

    fn advance(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (state, written) = {
            let mut inner = this.borrow_mut();
            inner.frame = None;
            let step = match inner.tween.as_mut() {
                Some(tween) => tween.step(frame_time_nanos),
                None => return,
            };
            let written = match step {
                Step::Hold => None,
                Step::Moved(value) => Some(value),
                Step::Finished(value) => {
                    inner.tween = None;
                    Some(value)
                }
            };
            if let Some(value) = &written {
                inner.current = value.clone();
            }
            (inner.state.clone(), written)
        };

        // Listeners may call back into this animatable.
        if let Some(value) = written {
            state.set(value);
        }

        Self::request_frame(this);
        if this.borrow().tween.is_none() {
            log::trace!("animation settled");
        }
    }
}

impl<T: Lerp + Clone + 'static> AnimatableInner<T> {
    fn cancel_frame(&mut self) {
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            state: self.state.clone(),
        }
    }
}
