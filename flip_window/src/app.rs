//! Top-level application state.
//!
//! `FlipApp` owns the [`Book`], the fold [`Canvas`] and the [`FrameClock`].
//! It feeds pointer events to the book and runs as many fixed ticks as the
//! clock says are due, painting only the last one.  [`run`] wraps it in a
//! [`Viewer`] window.

use std::time::Instant;

use page_flip::{Book, BookConfig, FrameClock, GestureOutcome, PointerEvent, Side};
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::page::PageElement;
use crate::viewer::Viewer;
use crate::AppError;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub book:  BookConfig,
    /// Number of pages in the document.
    pub pages: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { book: BookConfig::default(), pages: 6 }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FlipApp
// ════════════════════════════════════════════════════════════════════════════

pub struct FlipApp {
    book:   Book<PageElement>,
    canvas: Canvas,
    clock:  FrameClock,
    pub status: String,
}

impl FlipApp {
    pub fn new(cfg: AppConfig, now: Instant) -> Result<Self, AppError> {
        let pages = PageElement::book(cfg.pages, cfg.book.page_width);
        let book = Book::new(cfg.book, pages)?;
        let (w, h) = book.config().surface_size();
        let (w, h) = (w.ceil() as u32, h.ceil() as u32);
        let canvas = Canvas::new(w, h).ok_or(AppError::Surface { width: w, height: h })?;
        let clock = FrameClock::new(book.config().tick_interval(), now);

        let mut app = FlipApp { book, canvas, clock, status: String::new() };
        app.update_status();
        Ok(app)
    }

    // ── process one PointerEvent ─────────────────────────────────────────

    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        let outcome = self.book.handle_pointer(event);
        match outcome {
            GestureOutcome::Grabbed { page } => {
                debug!(page, "drag started");
            }
            GestureOutcome::Committed { page, side } => {
                let verb = match side {
                    Side::Left  => "turned",
                    Side::Right => "returned",
                };
                info!(page, cursor = self.book.cursor(), "page {verb}");
                self.update_status();
            }
            GestureOutcome::Tracking { .. } | GestureOutcome::Ignored => {}
        }
        outcome
    }

    // ── Per-frame advance ─────────────────────────────────────────────────

    /// Run every tick due at `now`.  Only the last tick is painted; returns
    /// the number of ticks run.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.clock.advance(now);
        for i in 0..due {
            if i + 1 == due {
                self.book.render(&mut self.canvas);
            } else {
                self.book.tick();
            }
        }
        due
    }

    fn update_status(&mut self) {
        let n = self.book.page_count();
        let left = self.book.cursor();
        self.status = if left == 0 {
            format!("cover - {n} pages - drag the right page to turn")
        } else {
            format!("pages {left}/{n} turned - drag either page")
        };
    }

    // ── Accessors for the render loop ─────────────────────────────────────

    pub fn book(&self)   -> &Book<PageElement> { &self.book }
    pub fn canvas(&self) -> &Canvas            { &self.canvas }
}

// ════════════════════════════════════════════════════════════════════════════
// run(): the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Open the window and drive input, ticks and presentation until it closes.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    let mut app = FlipApp::new(cfg, Instant::now())?;
    let mut viewer = Viewer::new(app.book().config())?;
    info!(pages = app.book().page_count(), "window open");

    while viewer.is_open() {
        let Some(events) = viewer.poll_input(app.book().config()) else { break };
        for event in events {
            app.handle_pointer(event);
        }
        app.advance(Instant::now());
        viewer.present(app.book(), app.canvas(), &app.status)?;
    }

    info!("window closed");
    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
