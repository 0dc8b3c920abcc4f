//! Pointer input → page drags.
//!
//! The public interface is [`PointerEvent`], delivered to
//! [`Book::handle_pointer`](crate::Book::handle_pointer).  Coordinates are
//! book-local: `x = 0` is the spine, `y = 0` the top of the paper.
//!
//! ## Gesture → Action mapping
//!
//! | Event | Where | Action |
//! |---|---|---|
//! | Down | `-page_width < x < 0`, a page on the left stack | grab the top left page |
//! | Down | `0 < x < page_width`, more than one page on the right | grab the top right page |
//! | Move | anywhere | dragged page follows `x / page_width` on the next tick |
//! | Up   | `x < 0` | commit dragged page to the left stack |
//! | Up   | `x >= 0` | return dragged page to the right stack |

use crate::flip::clamp_progress;
use crate::paint::Point;

// ════════════════════════════════════════════════════════════════════════════
// PointerEvent / GestureOutcome
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// The stack a released page settles on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Rest progress for this side.
    pub fn target(self) -> f32 {
        match self {
            Side::Left  => -1.0,
            Side::Right =>  1.0,
        }
    }

    /// Cursor after a page settles on this side, kept within `0..=page_count`.
    pub fn advance_cursor(self, cursor: usize, page_count: usize) -> usize {
        match self {
            Side::Left  => (cursor + 1).min(page_count),
            Side::Right => cursor.saturating_sub(1),
        }
    }
}

/// What a pointer event did to the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing changed hands: outside the draggable zone, at a stack
    /// boundary, a second press during a drag, or a release with no drag.
    Ignored,
    /// `page` started dragging.
    Grabbed { page: usize },
    /// The pointer moved while `page` is dragging.
    Tracking { page: usize },
    /// `page` was released toward `side`.
    Committed { page: usize, side: Side },
}

// ════════════════════════════════════════════════════════════════════════════
// Mapping rules
// ════════════════════════════════════════════════════════════════════════════

/// Page a press at book-local `x` picks up, given `cursor` pages on the left
/// stack out of `page_count`.
///
/// Presses further than one page-width from the spine, or exactly on it,
/// pick up nothing.  The last page never lifts off the right stack.
pub fn grab_page(x: f32, cursor: usize, page_count: usize, page_width: f32) -> Option<usize> {
    if !(x.abs() < page_width) {
        return None;
    }
    if x < 0.0 && cursor >= 1 {
        Some(cursor - 1)
    } else if x > 0.0 && cursor + 1 < page_count {
        Some(cursor)
    } else {
        None
    }
}

/// Live target for a dragged page: pointer offset from the spine in
/// page-widths, clamped to the progress range.
pub fn drag_target(x: f32, page_width: f32) -> f32 {
    clamp_progress(x / page_width)
}

/// Which stack a page released at `x` settles on.  Only the sign counts.
pub fn release_side(x: f32) -> Side {
    if x < 0.0 { Side::Left } else { Side::Right }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
