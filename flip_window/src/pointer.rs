//! Mouse polling → book-local [`PointerEvent`]s.
//!
//! `minifb` exposes the mouse as polled state (position + button held), so
//! presses and releases are recovered by edge detection between frames.

use page_flip::{BookConfig, Point, PointerEvent};

#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    last:     Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker::default()
    }

    /// Translate one frame of mouse state into events.
    ///
    /// `surface_pos` is the mouse in window pixels (the window is the drawing
    /// surface), or `None` if the platform lost track of it, in which case
    /// the last known position is reused.  Events come out in the order
    /// Move, Down, Up so a press acts on the freshest position.
    pub fn update(
        &mut self,
        surface_pos: Option<(f32, f32)>,
        down: bool,
        config: &BookConfig,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        let pos = match surface_pos {
            Some((x, y)) => {
                let p = config.to_book_local(Point::new(x, y));
                if self.last != Some(p) {
                    events.push(PointerEvent::Move(p));
                    self.last = Some(p);
                }
                Some(p)
            }
            None => self.last,
        };

        if let Some(p) = pos {
            if down && !self.was_down {
                events.push(PointerEvent::Down(p));
            } else if !down && self.was_down {
                events.push(PointerEvent::Up(p));
            }
        }
        // Without any known position a press cannot be placed; remember the
        // button anyway so the release edge is still seen later.
        self.was_down = down;
        events
    }
}
