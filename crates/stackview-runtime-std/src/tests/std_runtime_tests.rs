use super::StdRuntime;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn registering_frame_callback_requests_frame() {
    let runtime = StdRuntime::new();
    assert!(!runtime.take_frame_request());

    let _registration = runtime.handle().frame_clock().with_frame_nanos(|_| {});

    assert!(
        runtime.take_frame_request(),
        "frame callback should request a frame"
    );
    assert!(!runtime.take_frame_request(), "request is consumed");
}

#[test]
fn frame_waker_is_invoked_on_schedule() {
    let runtime = StdRuntime::new();
    let wakes = Arc::new(AtomicUsize::new(0));
    {
        let wakes = Arc::clone(&wakes);
        runtime.set_frame_waker(move || {
            wakes.fetch_add(1, Ordering::SeqCst);
        });
    }

    runtime.handle().schedule();
    assert_eq!(wakes.load(Ordering::SeqCst), 1);

    runtime.clear_frame_waker();
    runtime.handle().schedule();
    assert_eq!(wakes.load(Ordering::SeqCst), 1);
}

#[test]
fn pump_frame_runs_callbacks_and_reports_idle() {
    let runtime = StdRuntime::new();
    let fired = Rc::new(Cell::new(false));
    let _registration = {
        let fired = Rc::clone(&fired);
        runtime
            .handle()
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true))
    };

    let wants_more = runtime.pump_frame();

    assert!(fired.get());
    assert!(!wants_more);
}

#[test]
fn zero_delay_timer_fires_on_next_pump() {
    let runtime = StdRuntime::new();
    let fired = Rc::new(Cell::new(false));
    let _timer = {
        let fired = Rc::clone(&fired);
        runtime
            .handle()
            .frame_clock()
            .with_delay(0, move || fired.set(true))
    };

    runtime.pump_frame();

    assert!(fired.get());
}

#[test]
fn frame_time_never_goes_backwards() {
    let runtime = StdRuntime::new();
    let first = runtime.frame_time_nanos();
    runtime.pump_frame();
    assert!(runtime.frame_time_nanos() >= first);
    assert!(runtime.handle().frame_time_nanos() >= first);
}
