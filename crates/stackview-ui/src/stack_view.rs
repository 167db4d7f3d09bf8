use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use stackview_animation::{Animatable, AnimationSpec, Easing};
use stackview_core::{FrameClock, RuntimeHandle, State, Subscription, TimerRegistration};
use stackview_foundation::gesture_constants::{APPEAR_DURATION_MS, DISMISS_DELAY_MS};
use stackview_foundation::{PointerEvent, PointerEventKind};
use stackview_ui_graphics::{Color, Point};

use crate::layout::{ContainerStyle, ContentStyle, LayoutInput, StackViewLayout};
use crate::metrics::WindowMetrics;
use crate::options::{ClosedCallback, StackViewOptions};
use crate::side::{Side, SideStrategy};
use crate::snap::{resolve_release, Release, SnapPoints};

const PANEL_EASING: Easing = Easing::EaseInOut;

/// An edge-anchored panel that follows drags and snaps on release.
///
/// Mounting starts the opening animation. Feed touch events through
/// [`StackView::on_touch_start`], [`StackView::on_touch_move`] and
/// [`StackView::on_touch_end`] (or [`StackView::handle_pointer_event`]),
/// and render [`StackView::layout`] on every frame the progress changes.
///
/// Dropping the view, or calling [`StackView::dispose`], releases the
/// progress listener, any running animation and any pending dismissal.
pub struct StackView {
    strategy: SideStrategy,
    snap_points: SnapPoints,
    max_stack_point: f32,
    background: Color,
    content_style: ContentStyle,
    container_style: ContainerStyle,
    metrics: Box<dyn WindowMetrics>,
    clock: FrameClock,
    animation: Animatable<f32>,
    /// Last value published by the animation, kept current by the listener.
    progress: Rc<Cell<f32>>,
    progress_subscription: Option<Subscription>,
    holding: bool,
    velocity: f32,
    close_timer: Option<TimerRegistration>,
    on_closed: Rc<RefCell<Option<ClosedCallback>>>,
    mounted: bool,
}

impl StackView {
    pub fn mount(
        runtime: RuntimeHandle,
        metrics: impl WindowMetrics + 'static,
        options: StackViewOptions,
    ) -> Self {
        let StackViewOptions {
            background_color,
            side,
            snap_points,
            style,
            container_style,
            on_closed,
        } = options;
        let max_stack_point = snap_points.max_stack_point();

        let animation = Animatable::new(0.0f32, runtime.clone());
        let progress = Rc::new(Cell::new(0.0f32));
        let progress_subscription = {
            let progress = Rc::clone(&progress);
            animation.subscribe(move |value| progress.set(*value))
        };

        log::debug!(
            "mounting stack view: side={side:?} snap_points={:?} max={max_stack_point}",
            snap_points.as_slice()
        );
        animation.animate_to(
            max_stack_point,
            AnimationSpec::tween(APPEAR_DURATION_MS, PANEL_EASING),
        );

        Self {
            strategy: side.strategy(),
            snap_points,
            max_stack_point,
            background: background_color,
            content_style: style,
            container_style,
            metrics: Box::new(metrics),
            clock: runtime.frame_clock(),
            animation,
            progress,
            progress_subscription: Some(progress_subscription),
            holding: false,
            velocity: 0.0,
            close_timer: None,
            on_closed: Rc::new(RefCell::new(on_closed)),
            mounted: true,
        }
    }

    pub fn side(&self) -> Side {
        self.strategy.side()
    }

    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    pub fn max_stack_point(&self) -> f32 {
        self.max_stack_point
    }

    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Observable progress for hosts that redraw on change.
    pub fn progress_state(&self) -> State<f32> {
        self.animation.state()
    }

    /// Target of the running (or last) animation.
    pub fn animation_target(&self) -> f32 {
        self.animation.target()
    }

    pub fn animation_spec(&self) -> AnimationSpec {
        self.animation.animation_spec()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Last per-event drag delta, before side normalization.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn has_pending_close(&self) -> bool {
        self.close_timer
            .as_ref()
            .map(TimerRegistration::is_pending)
            .unwrap_or(false)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn layout(&self) -> StackViewLayout {
        let input = LayoutInput {
            side: self.side(),
            window: self.metrics.window_size(),
            max_stack_point: self.max_stack_point,
            background: self.background,
            container_style: self.container_style,
            content_style: self.content_style,
        };
        StackViewLayout::compute(&input, self.progress())
    }

    /// Starts a drag only if `point` lands on the grab band around the leading edge.
    pub fn on_touch_start(&mut self, point: Point) {
        if !self.mounted {
            return;
        }
        let window = self.metrics.window_size();
        self.holding = self
            .strategy
            .hits_grab_band(point, self.progress(), window);
        if self.holding {
            log::trace!("grab at {point:?}, progress {}", self.progress());
            self.velocity = 0.0;
            self.cancel_close();
        }
    }

    pub fn on_touch_move(&mut self, point: Point) {
        if !self.mounted || !self.holding {
            return;
        }
        let window = self.metrics.window_size();
        let Some(sample) =
            self.strategy
                .drag(point, window, self.progress(), self.max_stack_point)
        else {
            log::warn!("ignoring drag to {point:?} in window {window:?}");
            return;
        };
        self.velocity = sample.velocity;
        self.animation.snap_to(sample.progress);
        log::trace!(
            "drag to {} (velocity {})",
            sample.progress,
            sample.velocity
        );
    }

    /// Ends a drag and animates to the resolved position.
    ///
    /// Returns the decision, or `None` when no drag was in progress.
    pub fn on_touch_end(&mut self, point: Point) -> Option<Release> {
        if !self.mounted || !self.holding {
            return None;
        }
        self.holding = false;

        let window = self.metrics.window_size();
        let progress = match self.strategy.raw_progress(point, window) {
            Some(progress) => progress,
            None => {
                log::warn!("releasing at {point:?} in window {window:?}; using current progress");
                self.progress()
            }
        };
        let velocity = self.strategy.normalize_velocity(self.velocity);
        let release = resolve_release(progress, velocity, &self.snap_points);
        log::debug!(
            "release at progress {progress} velocity {velocity}: {:?} -> {} over {}ms",
            release.kind,
            release.target,
            release.duration_ms
        );

        self.animation.animate_to(
            release.target,
            AnimationSpec::tween(duration_millis(release.duration_ms), PANEL_EASING),
        );
        if release.dismiss {
            self.schedule_close();
        }
        Some(release)
    }

    /// Routes a pointer event; a cancelled pointer is released where it stopped.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> Option<Release> {
        match event.kind {
            PointerEventKind::Down => {
                self.on_touch_start(event.page_position);
                None
            }
            PointerEventKind::Move => {
                self.on_touch_move(event.page_position);
                None
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.on_touch_end(event.page_position)
            }
        }
    }

    /// Releases the listener, animation and pending dismissal.
    ///
    /// Returns `false` if the view was already disposed.
    pub fn dispose(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.holding = false;
        if let Some(mut subscription) = self.progress_subscription.take() {
            subscription.unsubscribe();
        }
        self.cancel_close();
        self.animation.stop();
        log::debug!("stack view disposed at progress {}", self.progress());
        true
    }

    /// Clears any pending dismissal before arming a new one.
    fn schedule_close(&mut self) {
        self.cancel_close();
        let on_closed = Rc::clone(&self.on_closed);
        self.close_timer = Some(self.clock.with_delay(DISMISS_DELAY_MS, move || {
            log::debug!("stack view closed");
            if let Some(callback) = on_closed.borrow_mut().as_mut() {
                callback();
            }
        }));
    }

    fn cancel_close(&mut self) {
        if let Some(timer) = self.close_timer.take() {
            timer.cancel();
        }
    }
}

impl Drop for StackView {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for StackView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackView")
            .field("side", &self.side())
            .field("snap_points", &self.snap_points)
            .field("progress", &self.progress())
            .field("holding", &self.holding)
            .field("velocity", &self.velocity)
            .field("pending_close", &self.has_pending_close())
            .field("mounted", &self.mounted)
            .finish()
    }
}

fn duration_millis(duration_ms: f32) -> u64 {
    duration_ms.round().max(1.0) as u64
}
