//! Replays a few scripted gestures against a bottom StackView and logs
//! where the panel ends up. Run with `RUST_LOG=debug` to see every release
//! decision.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use stackview_foundation::PointerEvent;
use stackview_runtime_std::StdRuntime;
use stackview_ui::{Side, StackView, StackViewError, StackViewOptions};
use stackview_ui_graphics::Size;

const FRAME: Duration = Duration::from_millis(16);
const WINDOW: Size = Size::new(400.0, 800.0);

fn main() -> Result<(), StackViewError> {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let runtime = StdRuntime::new();
    let closed = Rc::new(Cell::new(false));
    let options = {
        let closed = Rc::clone(&closed);
        StackViewOptions::new()
            .side(Side::Bottom)
            .background_hex("#1e1e2e")?
            .try_snap_points([40, 100])?
            .on_closed(move || closed.set(true))
    };

    let mut view = StackView::mount(runtime.handle(), WINDOW, options);
    pump_until_idle(&runtime);
    report("opened", &view);

    // Slow drag to 55%: settles on the 40% detent.
    play(&runtime, &mut view, &drag_script(0.0, 360.0, 4.0));
    pump_until_idle(&runtime);
    report("settled", &view);

    // Quick downward swipe from the 40% edge: flings closed.
    play(&runtime, &mut view, &drag_script(480.0, 640.0, 40.0));
    pump_until_idle(&runtime);
    report("flung", &view);

    if closed.get() {
        log::info!("panel dismissed");
    } else {
        log::warn!("panel still open");
    }
    Ok(())
}

fn drag_script(from_y: f32, to_y: f32, step: f32) -> Vec<PointerEvent> {
    let x = WINDOW.width / 2.0;
    let mut events = vec![PointerEvent::down(x, from_y)];
    let mut y = from_y;
    while y + step <= to_y {
        y += step;
        events.push(PointerEvent::moved(x, y));
    }
    events.push(PointerEvent::up(x, y));
    events
}

fn play(runtime: &StdRuntime, view: &mut StackView, events: &[PointerEvent]) {
    for event in events {
        if let Some(release) = view.handle_pointer_event(event) {
            log::info!(
                "released: {:?} -> {:.2} in {:.0}ms",
                release.kind,
                release.target,
                release.duration_ms
            );
        }
        runtime.pump_frame();
        thread::sleep(FRAME);
    }
}

fn pump_until_idle(runtime: &StdRuntime) {
    while runtime.pump_frame() {
        thread::sleep(FRAME);
    }
}

fn report(label: &str, view: &StackView) {
    let panel = view.layout().panel.visible_frame();
    log::info!(
        "{label}: progress {:.2}, panel top at {:.0}",
        view.progress(),
        panel.y
    );
}
