//! Property-based invariants for the flip core.
//!
//! Verifies:
//! 1. Fold measurements stay in range for every progress value
//! 2. Draw plans are a pure function of progress
//! 3. Easing has the target as a fixed point
//! 4. Easing converges monotonically without overshoot
//! 5. Any pointer sequence keeps progress/target clamped and the cursor in range
//! 6. At most one page is ever dragged, and a release always frees it
//! 7. Release commits by the sign of x alone

use page_flip::{
    Book, BookConfig, FoldGeometry, GestureOutcome, NullPage, PageFlip, Point, PointerEvent,
    RecordingSink, Side,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_progress() -> impl Strategy<Value = f32> {
    -1.0f32..=1.0
}

fn arb_event() -> impl Strategy<Value = PointerEvent> {
    (0u8..3, -700.0f32..700.0, -50.0f32..300.0).prop_map(|(kind, x, y)| {
        let p = Point::new(x, y);
        match kind {
            0 => PointerEvent::Down(p),
            1 => PointerEvent::Move(p),
            _ => PointerEvent::Up(p),
        }
    })
}

fn cfg() -> BookConfig {
    BookConfig::default()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Geometry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fold_measurements_in_range(p in arb_progress()) {
        let c = cfg();
        let g = FoldGeometry::new(p, &c);
        prop_assert!((0.0..=1.0).contains(&g.strength));
        prop_assert!(g.fold_width >= 0.0 && g.fold_width <= c.page_width);
        prop_assert!(g.content_width() >= 0.0 && g.content_width() <= c.page_width);
        prop_assert!(g.vertical_outdent >= 0.0 && g.vertical_outdent <= 20.0);
        for w in [g.paper_shadow_width, g.right_shadow_width, g.left_shadow_width] {
            prop_assert!(w >= 0.0 && w <= c.page_width * 0.25);
        }
        prop_assert!((g.edge_x() - c.page_width * g.progress).abs() < 1e-3);
    }

    #[test]
    fn draw_plan_is_pure(p in arb_progress()) {
        let c = cfg();
        let a = FoldGeometry::new(p, &c).draw_plan(&c);
        let b = FoldGeometry::new(p, &c).draw_plan(&c);
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Easing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn target_is_fixed_point(t in arb_progress(), n in 1usize..100) {
        let mut page = PageFlip::new(NullPage);
        page.set_target(t);
        for _ in 0..400 { page.ease(0.2); }
        let settled = page.progress();
        page.set_target(settled);
        for _ in 0..n { page.ease(0.2); }
        prop_assert_eq!(page.progress(), settled);
    }

    #[test]
    fn easing_converges_monotonically(t in arb_progress(), k in 0.01f32..0.99) {
        let mut page = PageFlip::new(NullPage);
        page.set_target(t);
        let mut gap = (page.progress() - t).abs();
        for _ in 0..100 {
            page.ease(k);
            let g = (page.progress() - t).abs();
            prop_assert!(g <= gap);
            // never crosses the target
            prop_assert!((page.progress() - t) * (1.0 - t) >= 0.0);
            gap = g;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5–7. Pointer sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pointer_sequences_keep_invariants(
        n in 1usize..8,
        events in prop::collection::vec(arb_event(), 0..60),
    ) {
        let mut book = Book::new(cfg(), vec![NullPage; n]).unwrap();
        let mut sink = RecordingSink::new();
        for event in events {
            let outcome = book.handle_pointer(event);
            if let PointerEvent::Up(_) = event {
                prop_assert_eq!(book.active_page(), None);
            }
            if let GestureOutcome::Grabbed { page } = outcome {
                prop_assert!(page < n);
                prop_assert_eq!(book.active_page(), Some(page));
            }
            book.render(&mut sink);

            prop_assert!(book.cursor() <= n);
            let dragged = (0..n).filter(|&i| book.is_dragging(i)).count();
            prop_assert!(dragged <= 1);
            for page in book.pages() {
                prop_assert!((-1.0..=1.0).contains(&page.progress()));
                prop_assert!((-1.0..=1.0).contains(&page.target()));
            }
        }
    }

    #[test]
    fn release_commits_by_sign(
        grab_x in 1.0f32..399.0,
        release_x in -2000.0f32..2000.0,
    ) {
        let mut book = Book::new(cfg(), vec![NullPage; 4]).unwrap();
        prop_assert_eq!(
            book.handle_pointer(PointerEvent::Down(Point::new(grab_x, 10.0))),
            GestureOutcome::Grabbed { page: 0 }
        );
        let outcome = book.handle_pointer(PointerEvent::Up(Point::new(release_x, 10.0)));
        let side = if release_x < 0.0 { Side::Left } else { Side::Right };
        prop_assert_eq!(outcome, GestureOutcome::Committed { page: 0, side });
        prop_assert_eq!(book.page(0).unwrap().target(), side.target());
        prop_assert_eq!(book.cursor(), if side == Side::Left { 1 } else { 0 });
    }
}
