//! The book: every page's flip state, the stack cursor, and the gesture that
//! currently owns a page.
//!
//! `Book` processes [`PointerEvent`]s between ticks and produces one
//! [`Frame`] per [`Book::tick`].  All mutation happens on the caller's thread;
//! nothing here blocks.

use tracing::{debug, info, trace};

use crate::config::BookConfig;
use crate::error::ConfigError;
use crate::flip::{PageFlip, PageSink};
use crate::geometry::{DrawPlan, FoldGeometry};
use crate::input::{drag_target, grab_page, release_side, GestureOutcome, PointerEvent};
use crate::paint::{Point, RenderSink};

// ════════════════════════════════════════════════════════════════════════════
// Frame
// ════════════════════════════════════════════════════════════════════════════

/// One page drawn during a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePage {
    pub index:    usize,
    pub geometry: FoldGeometry,
    pub plan:     DrawPlan,
}

/// Output of one tick: the pages still turning, in page order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub pages: Vec<FramePage>,
}

impl Frame {
    /// No page needs drawing; the book is at rest.
    pub fn is_idle(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pages.iter().any(|p| p.index == index)
    }

    /// Paint every plan, in page order.
    pub fn paint(&self, sink: &mut dyn RenderSink) {
        for page in &self.pages {
            page.plan.paint(sink);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Book
// ════════════════════════════════════════════════════════════════════════════

pub struct Book<P> {
    config:  BookConfig,
    pages:   Vec<PageFlip<P>>,
    /// Pages resting on the left stack, `0..=pages.len()`.
    cursor:  usize,
    /// Page owned by the current gesture.
    active:  Option<usize>,
    /// Latest book-local pointer position.
    pointer: Point,
}

impl<P: PageSink> Book<P> {
    /// Build a book with one page per content handle, all resting on the
    /// right stack.
    pub fn new<I>(config: BookConfig, contents: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
    {
        config.validate()?;
        let pages: Vec<PageFlip<P>> = contents.into_iter().map(PageFlip::new).collect();
        if pages.is_empty() {
            return Err(ConfigError::NoPages);
        }
        info!(
            pages = pages.len(),
            page_width = config.page_width,
            page_height = config.page_height,
            "book ready"
        );
        Ok(Book { config, pages, cursor: 0, active: None, pointer: Point::default() })
    }

    // ── process one PointerEvent ─────────────────────────────────────────

    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        self.pointer = event.position();
        let x = self.pointer.x;

        match event {
            // ── Down → maybe grab a page ──────────────────────────────────
            PointerEvent::Down(_) => {
                if let Some(page) = self.active {
                    debug!(page, "press ignored: gesture already active");
                    return GestureOutcome::Ignored;
                }
                match grab_page(x, self.cursor, self.pages.len(), self.config.page_width) {
                    Some(page) => {
                        self.active = Some(page);
                        debug!(page, cursor = self.cursor, x, "page grabbed");
                        GestureOutcome::Grabbed { page }
                    }
                    None => {
                        debug!(cursor = self.cursor, x, "press outside a draggable page");
                        GestureOutcome::Ignored
                    }
                }
            }

            // ── Move → tracked on the next tick ───────────────────────────
            PointerEvent::Move(_) => match self.active {
                Some(page) => GestureOutcome::Tracking { page },
                None       => GestureOutcome::Ignored,
            },

            // ── Up → commit to the side of the spine ──────────────────────
            PointerEvent::Up(_) => {
                let Some(page) = self.active.take() else {
                    return GestureOutcome::Ignored;
                };
                let side = release_side(x);
                self.pages[page].set_target(side.target());
                self.cursor = side.advance_cursor(self.cursor, self.pages.len());
                debug!(page, ?side, cursor = self.cursor, x, "page released");
                GestureOutcome::Committed { page, side }
            }
        }
    }

    // ── Per-frame tick ────────────────────────────────────────────────────

    /// Advance every page by one tick and collect the pages still turning.
    ///
    /// The dragged page's target follows the pointer before easing.  Each
    /// page in the frame has its content resized to the fold position.
    pub fn tick(&mut self) -> Frame {
        let cfg = &self.config;
        let mut frame = Frame::default();

        for (index, page) in self.pages.iter_mut().enumerate() {
            let dragging = self.active == Some(index);
            if dragging {
                page.set_target(drag_target(self.pointer.x, cfg.page_width));
            }
            page.ease(cfg.easing);

            if page.in_transition(dragging, cfg.transition_threshold) {
                let geometry = page.geometry(cfg);
                page.content_mut().set_width(geometry.content_width());
                frame.pages.push(FramePage {
                    index,
                    geometry,
                    plan: geometry.draw_plan(cfg),
                });
            }
        }

        trace!(turning = frame.pages.len(), cursor = self.cursor, "tick");
        frame
    }

    /// Tick once, clear the whole surface, and paint the frame onto `sink`.
    pub fn render(&mut self, sink: &mut dyn RenderSink) -> Frame {
        let frame = self.tick();
        let (w, h) = self.config.surface_size();
        sink.clear(0.0, 0.0, w, h);
        frame.paint(sink);
        frame
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self)      -> &BookConfig    { &self.config }
    pub fn cursor(&self)      -> usize          { self.cursor }
    pub fn page_count(&self)  -> usize          { self.pages.len() }
    pub fn active_page(&self) -> Option<usize>  { self.active }
    pub fn pointer(&self)     -> Point          { self.pointer }

    pub fn page(&self, index: usize) -> Option<&PageFlip<P>> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageFlip<P>> {
        self.pages.iter()
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Stacking order of a page's content: earlier pages sit on top.
    pub fn stacking_order(&self, index: usize) -> usize {
        self.pages.len().saturating_sub(index)
    }

    /// Every page is settled and nothing is being dragged.
    pub fn is_at_rest(&self) -> bool {
        let threshold = self.config.transition_threshold;
        self.active.is_none()
            && self.pages.iter().all(|p| !p.in_transition(false, threshold))
    }
}

#[cfg(test)]
impl<P: PageSink> Book<P> {
    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.pages.len());
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
