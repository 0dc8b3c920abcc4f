//! Drives `FlipApp` without a window: random mouse sessions must keep the
//! canvas and page content within bounds.

use std::time::{Duration, Instant};

use flip_window::app::{AppConfig, FlipApp};
use flip_window::pointer::PointerTracker;
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct MouseFrame {
    pos:  Option<(f32, f32)>,
    down: bool,
    ms:   u64,
}

fn mouse_frame() -> impl Strategy<Value = MouseFrame> {
    (
        prop::option::weighted(0.9, (0.0f32..950.0, 0.0f32..380.0)),
        any::<bool>(),
        0u64..50,
    )
        .prop_map(|(pos, down, ms)| MouseFrame { pos, down, ms })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_mouse_sessions_stay_in_bounds(frames in prop::collection::vec(mouse_frame(), 1..80)) {
        let t0 = Instant::now();
        let mut app = FlipApp::new(AppConfig::default(), t0).unwrap();
        let mut tracker = PointerTracker::new();
        let mut now = t0;

        for f in frames {
            let cfg = app.book().config().clone();
            for event in tracker.update(f.pos, f.down, &cfg) {
                app.handle_pointer(event);
            }
            now += Duration::from_millis(f.ms);
            app.advance(now);

            let book = app.book();
            prop_assert!(book.cursor() <= book.page_count());
            for page in book.pages() {
                let w = page.content().width;
                prop_assert!(w >= 0.0 && w <= cfg.page_width + 1e-3, "width {w}");
            }
        }

        let canvas = app.canvas();
        for y in (0..canvas.height()).step_by(7) {
            for x in (0..canvas.width()).step_by(7) {
                let px = canvas.pixel(x, y);
                prop_assert!(px[..3].iter().all(|&c| c <= px[3]), "{px:?} at {x},{y}");
            }
        }
    }
}

#[test]
fn full_turn_through_the_tracker() {
    let t0 = Instant::now();
    let mut app = FlipApp::new(AppConfig { pages: 3, ..AppConfig::default() }, t0).unwrap();
    let mut tracker = PointerTracker::new();
    let cfg = app.book().config().clone();
    let o = cfg.spine_origin();

    let session = [
        (o.x + 150.0, true),
        (o.x + 20.0,  true),
        (o.x - 150.0, true),
        (o.x - 150.0, false),
    ];
    for (x, down) in session {
        for event in tracker.update(Some((x, o.y + 50.0)), down, &cfg) {
            app.handle_pointer(event);
        }
    }
    assert_eq!(app.book().cursor(), 1);

    let mut now = t0;
    for _ in 0..120 {
        now += Duration::from_millis(16);
        app.advance(now);
    }
    assert!(app.book().is_at_rest());
    assert_eq!(app.book().page(0).unwrap().target(), -1.0);
}
