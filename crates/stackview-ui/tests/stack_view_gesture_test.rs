//! End-to-end gesture flows driven by the synthetic test runtime.

use std::cell::Cell;
use std::rc::Rc;

use stackview_animation::Easing;
use stackview_core::TestRuntime;
use stackview_foundation::PointerEvent;
use stackview_ui::{ReleaseKind, Side, StackView, StackViewError, StackViewOptions};
use stackview_ui_graphics::{Point, Size};

const WINDOW: Size = Size::new(400.0, 800.0);

fn closed_counter(options: StackViewOptions) -> (StackViewOptions, Rc<Cell<u32>>) {
    let closed = Rc::new(Cell::new(0));
    let options = {
        let closed = Rc::clone(&closed);
        options.on_closed(move || closed.set(closed.get() + 1))
    };
    (options, closed)
}

fn open_view(runtime: &TestRuntime, options: StackViewOptions) -> StackView {
    let view = StackView::mount(runtime.handle(), WINDOW, options);
    runtime.run_until_idle(120);
    view
}

/// Drags from `from_y` to `to_y` in 4px steps, slow enough never to fling.
fn slow_drag(view: &mut StackView, from_y: f32, to_y: f32) {
    let step = if to_y > from_y { 4.0 } else { -4.0 };
    let mut y = from_y;
    while (to_y - y).abs() >= 4.0 {
        y += step;
        view.on_touch_move(Point::new(200.0, y));
    }
}

#[test]
fn mount_animates_open_over_appear_duration() {
    let runtime = TestRuntime::new();
    let view = StackView::mount(runtime.handle(), WINDOW, StackViewOptions::default());

    assert_eq!(view.progress(), 0.0);
    assert!(view.is_animating());
    assert_eq!(view.animation_target(), 1.0);
    assert_eq!(view.animation_spec().duration_millis, 500);
    assert_eq!(view.animation_spec().easing, Easing::EaseInOut);

    runtime.advance_by_millis(250);
    runtime.advance_by_millis(250);
    let midway = view.progress();
    assert!(midway > 0.0 && midway < 1.0, "midway progress was {midway}");

    let frames = runtime.run_until_idle(120);
    assert!(frames > 0);
    assert_eq!(view.progress(), 1.0);
    assert!(!view.is_animating());
    assert_eq!(view.layout().progress, 1.0);
}

#[test]
fn mount_opens_to_largest_snap_point() {
    let runtime = TestRuntime::new();
    let options = StackViewOptions::new()
        .try_snap_points([30, 60])
        .expect("valid snap points");
    let view = open_view(&runtime, options);

    assert_eq!(view.max_stack_point(), 0.6);
    assert_eq!(view.progress(), 0.6);
}

#[test]
fn move_without_grab_is_ignored() {
    for side in [Side::Bottom, Side::Right, Side::Left] {
        let runtime = TestRuntime::new();
        let mut view = open_view(&runtime, StackViewOptions::new().side(side));

        view.on_touch_move(Point::new(200.0, 400.0));
        assert_eq!(view.progress(), 1.0, "{side:?}");
        assert_eq!(view.velocity(), 0.0, "{side:?}");
        assert_eq!(view.on_touch_end(Point::new(200.0, 400.0)), None, "{side:?}");

        view.on_touch_start(Point::new(200.0, 400.0));
        assert!(!view.is_holding(), "{side:?}: touch far from the edge must not grab");
        view.on_touch_move(Point::new(200.0, 500.0));
        assert_eq!(view.progress(), 1.0, "{side:?}");
    }
}

#[test]
fn non_finite_touch_leaves_progress_alone() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(StackViewOptions::default());
    let mut view = open_view(&runtime, options);

    view.on_touch_start(Point::new(200.0, 10.0));
    assert!(view.is_holding());
    view.on_touch_move(Point::new(200.0, f32::NAN));
    assert_eq!(view.progress(), 1.0);
    assert_eq!(view.velocity(), 0.0);

    let release = view
        .on_touch_end(Point::new(200.0, f32::NAN))
        .expect("drag was in progress");
    assert_eq!(release.kind, ReleaseKind::Settle { snap_point: 100 });
    assert!(!release.dismiss);

    runtime.run_until_idle(120);
    assert_eq!(view.progress(), 1.0);
    assert_eq!(closed.get(), 0);
}

#[test]
fn left_panel_settles_then_flings_closed() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(
        StackViewOptions::new()
            .side(Side::Left)
            .try_snap_points([50, 100])
            .expect("valid snap points"),
    );
    let mut view = open_view(&runtime, options);
    assert_eq!(view.side(), Side::Left);

    // Fully open, the leading edge sits at the window's right edge.
    view.on_touch_start(Point::new(400.0, 300.0));
    assert!(view.is_holding());
    view.on_touch_move(Point::new(300.0, 300.0));
    assert!((view.progress() - 0.75).abs() < 1e-5);
    view.on_touch_move(Point::new(202.0, 300.0));
    view.on_touch_move(Point::new(200.0, 300.0));
    assert!((view.progress() - 0.5).abs() < 1e-5);

    let release = view
        .on_touch_end(Point::new(200.0, 300.0))
        .expect("drag was in progress");
    assert_eq!(release.kind, ReleaseKind::Settle { snap_point: 50 });
    assert_eq!(release.duration_ms, 300.0);
    assert!(!release.dismiss);
    runtime.run_until_idle(120);
    assert!((view.progress() - 0.5).abs() < 1e-5);
    assert_eq!(closed.get(), 0);

    // Half open, the leading edge is at x = 200. Dragging toward the home
    // edge raises the raw sample, which the release flips into a close.
    view.on_touch_start(Point::new(200.0, 300.0));
    assert!(view.is_holding());
    view.on_touch_move(Point::new(100.0, 300.0));
    assert!((view.progress() - 0.25).abs() < 1e-5);
    let release = view
        .on_touch_end(Point::new(100.0, 300.0))
        .expect("drag was in progress");
    assert_eq!(release.kind, ReleaseKind::FlingClose);
    assert_eq!(release.target, 0.0);
    assert!(release.dismiss);

    runtime.advance_frame();
    assert_eq!(closed.get(), 1);
    runtime.run_until_idle(120);
    assert_eq!(view.progress(), 0.0);
    assert_eq!(closed.get(), 1);
}

#[test]
fn drag_tracks_finger_and_clamps_to_max() {
    let runtime = TestRuntime::new();
    let options = StackViewOptions::new()
        .try_snap_points([30, 60])
        .expect("valid snap points");
    let mut view = open_view(&runtime, options);

    // Leading edge sits at 800 * 0.4 = 320.
    view.on_touch_start(Point::new(200.0, 330.0));
    assert!(view.is_holding());

    view.on_touch_move(Point::new(200.0, 400.0));
    assert!((view.progress() - 0.5).abs() < 1e-5);
    assert!((view.velocity() + 0.1).abs() < 1e-5);

    view.on_touch_move(Point::new(200.0, 0.0));
    assert_eq!(view.progress(), 0.6);

    view.on_touch_move(Point::new(200.0, 1000.0));
    assert_eq!(view.progress(), 0.0);
}

#[test]
fn slow_release_settles_on_nearest_snap_point() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(
        StackViewOptions::new()
            .try_snap_points([40, 100])
            .expect("valid snap points"),
    );
    let mut view = open_view(&runtime, options);

    view.on_touch_start(Point::new(200.0, 0.0));
    slow_drag(&mut view, 0.0, 360.0);
    let release = view
        .on_touch_end(Point::new(200.0, 360.0))
        .expect("drag was in progress");

    assert_eq!(release.kind, ReleaseKind::Settle { snap_point: 40 });
    assert_eq!(release.duration_ms, 300.0);
    assert!(!release.dismiss);
    assert!(!view.is_holding());
    assert!(!view.has_pending_close());

    runtime.run_until_idle(120);
    assert_eq!(view.progress(), 0.4);
    assert_eq!(closed.get(), 0);
}

#[test]
fn fling_down_closes_and_notifies_once() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(StackViewOptions::default());
    let mut view = open_view(&runtime, options);

    view.on_touch_start(Point::new(200.0, 10.0));
    view.on_touch_move(Point::new(200.0, 40.0));
    view.on_touch_move(Point::new(200.0, 80.0));
    let release = view
        .on_touch_end(Point::new(200.0, 80.0))
        .expect("drag was in progress");

    assert_eq!(release.kind, ReleaseKind::FlingClose);
    assert_eq!(release.target, 0.0);
    assert!(release.dismiss);
    assert!(view.has_pending_close());
    assert_eq!(closed.get(), 0, "dismissal is deferred to the timer");

    runtime.advance_frame();
    assert_eq!(closed.get(), 1);
    assert!(!view.has_pending_close());

    runtime.run_until_idle(120);
    assert_eq!(view.progress(), 0.0);
    assert_eq!(closed.get(), 1);
}

#[test]
fn fling_up_opens_to_max() {
    let runtime = TestRuntime::new();
    let mut view = open_view(&runtime, StackViewOptions::default());

    view.on_touch_start(Point::new(200.0, 10.0));
    slow_drag(&mut view, 10.0, 400.0);
    view.on_touch_move(Point::new(200.0, 300.0));
    let release = view
        .on_touch_end(Point::new(200.0, 300.0))
        .expect("drag was in progress");

    assert_eq!(release.kind, ReleaseKind::FlingOpen);
    assert!(!release.dismiss);
    runtime.run_until_idle(120);
    assert_eq!(view.progress(), 1.0);
}

#[test]
fn grabbing_again_cancels_pending_dismissal() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(StackViewOptions::default());
    let mut view = open_view(&runtime, options);

    view.on_touch_start(Point::new(200.0, 10.0));
    view.on_touch_move(Point::new(200.0, 80.0));
    view.on_touch_end(Point::new(200.0, 80.0));
    assert!(view.has_pending_close());

    // The panel has not moved since the release; its edge is still at 80.
    view.on_touch_start(Point::new(200.0, 80.0));
    assert!(view.is_holding());
    assert!(!view.has_pending_close());

    runtime.run_until_idle(120);
    assert_eq!(closed.get(), 0);
}

#[test]
fn dispose_mid_drag_releases_everything() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(StackViewOptions::default());
    let mut view = open_view(&runtime, options);
    let progress = view.progress_state();
    assert_eq!(progress.subscriber_count(), 1);

    view.on_touch_start(Point::new(200.0, 10.0));
    view.on_touch_move(Point::new(200.0, 80.0));
    view.on_touch_end(Point::new(200.0, 80.0));
    view.on_touch_start(Point::new(200.0, 80.0));
    assert!(view.is_holding());
    assert!(view.is_animating(), "the closing animation keeps running under the finger");

    assert!(view.dispose());
    assert!(!view.dispose());
    assert_eq!(progress.subscriber_count(), 0);
    assert!(!view.has_pending_close());
    assert!(!view.is_animating());
    assert!(!view.is_holding());

    view.on_touch_move(Point::new(200.0, 400.0));
    assert_eq!(view.on_touch_end(Point::new(200.0, 400.0)), None);

    runtime.run_until_idle(120);
    assert_eq!(closed.get(), 0);
    assert!(!runtime.runtime().needs_frame());
}

#[test]
fn dropping_view_cancels_dismissal_timer() {
    let runtime = TestRuntime::new();
    let (options, closed) = closed_counter(StackViewOptions::default());
    let mut view = open_view(&runtime, options);
    let progress = view.progress_state();

    view.on_touch_start(Point::new(200.0, 10.0));
    view.on_touch_move(Point::new(200.0, 80.0));
    view.on_touch_end(Point::new(200.0, 80.0));
    drop(view);

    runtime.run_until_idle(120);
    assert_eq!(closed.get(), 0);
    assert_eq!(progress.subscriber_count(), 0);
}

#[test]
fn zero_viewport_keeps_current_progress() {
    let runtime = TestRuntime::new();
    let window = Rc::new(Cell::new(WINDOW));
    let mut view = StackView::mount(
        runtime.handle(),
        Rc::clone(&window),
        StackViewOptions::default(),
    );
    runtime.run_until_idle(120);

    view.on_touch_start(Point::new(200.0, 10.0));
    assert!(view.is_holding());

    window.set(Size::ZERO);
    view.on_touch_move(Point::new(200.0, 400.0));
    assert_eq!(view.progress(), 1.0);

    let release = view
        .on_touch_end(Point::new(200.0, 400.0))
        .expect("drag was in progress");
    assert_eq!(release.kind, ReleaseKind::Settle { snap_point: 100 });
    assert_eq!(release.target, 1.0);
}

#[test]
fn window_resize_moves_grab_band() {
    let runtime = TestRuntime::new();
    let window = Rc::new(Cell::new(WINDOW));
    let options = StackViewOptions::new()
        .try_snap_points([50])
        .expect("valid snap points");
    let mut view = StackView::mount(runtime.handle(), Rc::clone(&window), options);
    runtime.run_until_idle(120);

    view.on_touch_start(Point::new(200.0, 400.0));
    assert!(view.is_holding());
    view.on_touch_end(Point::new(200.0, 400.0));
    runtime.run_until_idle(120);

    window.set(Size::new(400.0, 1000.0));
    view.on_touch_start(Point::new(200.0, 400.0));
    assert!(!view.is_holding());
    view.on_touch_start(Point::new(200.0, 500.0));
    assert!(view.is_holding());
}

#[test]
fn pointer_events_route_to_handlers() {
    let runtime = TestRuntime::new();
    let options = StackViewOptions::new().side(Side::Right);
    let mut view = open_view(&runtime, options);
    assert_eq!(view.side(), Side::Right);

    assert_eq!(view.handle_pointer_event(&PointerEvent::down(10.0, 300.0)), None);
    assert!(view.is_holding());
    assert_eq!(view.handle_pointer_event(&PointerEvent::moved(2.0, 300.0)), None);
    assert!((view.progress() - 0.995).abs() < 1e-5);

    let release = view
        .handle_pointer_event(&PointerEvent::cancel(2.0, 300.0))
        .expect("cancel releases the drag");
    assert_eq!(release.kind, ReleaseKind::Settle { snap_point: 100 });
    assert!(!view.is_holding());
}

#[test]
fn invalid_configuration_is_rejected() {
    assert_eq!(
        StackViewOptions::new().try_snap_points([0, 50]).err(),
        Some(StackViewError::SnapPointOutOfRange { value: 0 })
    );
    assert_eq!(
        StackViewOptions::new().try_snap_points(Vec::new()).err(),
        Some(StackViewError::EmptySnapPoints)
    );
    assert!(matches!(
        StackViewOptions::new().background_hex("#12345").err(),
        Some(StackViewError::InvalidColor(_))
    ));
    assert!(StackViewOptions::new().background_hex("#1e1e2e").is_ok());
}
