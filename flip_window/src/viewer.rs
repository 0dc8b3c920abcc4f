//! Software-rendered book window using `minifb`.
//!
//! Layout (the window is the drawing surface: the book plus padding):
//!
//! ```text
//! ┌──────────────────────────── padding ─────────────────────────────┐
//! │   ┌───────────────────────────┬───────────────────────────┐      │
//! │   │        left stack         │ page content (cut at fold)│      │
//! │   │                           │  + fold overlay (canvas)  │      │
//! │   └───────────────────────────┴───────────────────────────┘      │
//! │   status line                                                    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each frame the background, the book and the page elements are painted
//! into the framebuffer, then the fold canvas is composited on top.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use page_flip::{Book, BookConfig, PointerEvent};

use crate::canvas::Canvas;
use crate::font::{draw_text, text_width};
use crate::page::PageElement;
use crate::pointer::PointerTracker;
use crate::AppError;

// ════════════════════════════════════════════════════════════════════════════
// Colours
// ════════════════════════════════════════════════════════════════════════════

const BG_COLOR:     u32 = 0xFF1A1A2E;
const COVER_COLOR:  u32 = 0xFF5B3A29;
const PAPER_COLOR:  u32 = 0xFFF4F1EA;
const SPINE_COLOR:  u32 = 0xFFB8B2A6;
const NUMBER_COLOR: u32 = 0xFF555555;
const STATUS_COLOR: u32 = 0xFFAAAAAA;

// ════════════════════════════════════════════════════════════════════════════
// Framebuffer painting
// ════════════════════════════════════════════════════════════════════════════

/// Opaque ARGB framebuffer the size of the drawing surface.
pub struct Framebuffer {
    pub width:  usize,
    pub height: usize,
    pub buf:    Vec<u32>,
}

impl Framebuffer {
    pub fn for_config(config: &BookConfig) -> Self {
        let (w, h) = config.surface_size();
        let (width, height) = (w.ceil() as usize, h.ceil() as usize);
        Framebuffer { width, height, buf: vec![BG_COLOR; width * height] }
    }

    pub fn fill_rect(&mut self, x: isize, y: isize, w: isize, h: isize, color: u32) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x + w).clamp(0, self.width as isize) as usize;
        let y1 = (y + h).clamp(0, self.height as isize) as usize;
        if x0 >= x1 || y0 >= y1 { return; }
        for row in y0..y1 {
            self.buf[row * self.width + x0..row * self.width + x1].fill(color);
        }
    }

    /// Paint background, book, right-stack page content, fold overlay and
    /// the status line.
    pub fn compose(&mut self, book: &Book<PageElement>, canvas: &Canvas, status: &str) {
        let cfg = book.config();
        let origin = cfg.spine_origin();
        let (spine_x, paper_y) = (origin.x as isize, origin.y as isize);
        let page_w = cfg.page_width as isize;
        let page_h = cfg.page_height as isize;

        self.buf.fill(BG_COLOR);

        // ── Cover and the two paper halves ────────────────────────────────
        self.fill_rect(
            cfg.padding as isize,
            cfg.padding as isize,
            cfg.book_width as isize,
            cfg.book_height as isize,
            COVER_COLOR,
        );
        self.fill_rect(spine_x - page_w, paper_y, page_w * 2, page_h, PAPER_COLOR);

        // ── Page content, bottom of the right stack first ─────────────────
        let mut order: Vec<(usize, &PageElement)> = book
            .pages()
            .enumerate()
            .map(|(i, p)| (book.stacking_order(i), p.content()))
            .collect();
        order.sort_by_key(|&(z, _)| z);
        for (_, page) in order {
            let w = page.pixel_width() as isize;
            if w == 0 { continue; }
            self.fill_rect(spine_x, paper_y, w, page_h, page.color);

            let label = page.number.to_string();
            let scale = 4;
            let lx = spine_x + page_w / 2 - (text_width(&label, scale) / 2) as isize;
            // the number is cut off with the page
            if lx >= spine_x && lx + (text_width(&label, scale) as isize) <= spine_x + w {
                draw_text(
                    &mut self.buf, self.width, self.height, &label,
                    lx as usize, (paper_y + page_h / 2 - 10).max(0) as usize,
                    scale, NUMBER_COLOR,
                );
            }
        }
        self.fill_rect(spine_x - 1, paper_y, 2, page_h, SPINE_COLOR);

        // ── Fold overlay ──────────────────────────────────────────────────
        canvas.composite_onto(&mut self.buf, self.width, self.height, 0, 0);

        // ── Status line ───────────────────────────────────────────────────
        let sy = (cfg.padding + cfg.book_height) as usize + 12;
        draw_text(
            &mut self.buf, self.width, self.height, status,
            cfg.padding as usize, sy, 2, STATUS_COLOR,
        );
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Viewer
// ════════════════════════════════════════════════════════════════════════════

pub struct Viewer {
    window:  Window,
    frame:   Framebuffer,
    pointer: PointerTracker,
}

impl Viewer {
    pub fn new(config: &BookConfig) -> Result<Self, AppError> {
        let frame = Framebuffer::for_config(config);
        let mut window = Window::new(
            "Page Flip — drag a page corner across the spine",
            frame.width, frame.height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        window.limit_update_rate(Some(config.tick_interval()));

        Ok(Viewer { window, frame, pointer: PointerTracker::new() })
    }

    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll the mouse and keyboard.  Returns `None` when the user asked to
    /// quit (Q or Escape).
    pub fn poll_input(&mut self, config: &BookConfig) -> Option<Vec<PointerEvent>> {
        if !self.window.is_open()
            || self.window.is_key_pressed(Key::Q, KeyRepeat::No)
            || self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
        {
            return None;
        }
        let pos  = self.window.get_mouse_pos(MouseMode::Pass);
        let down = self.window.get_mouse_down(MouseButton::Left);
        Some(self.pointer.update(pos, down, config))
    }

    /// Compose and present one frame.
    pub fn present(
        &mut self,
        book: &Book<PageElement>,
        canvas: &Canvas,
        status: &str,
    ) -> Result<(), AppError> {
        self.frame.compose(book, canvas, status);
        self.window
            .update_with_buffer(&self.frame.buf, self.frame.width, self.frame.height)?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use page_flip::Point;

    fn book(n: usize) -> Book<PageElement> {
        let cfg = BookConfig::default();
        let pages = PageElement::book(n, cfg.page_width);
        Book::new(cfg, pages).unwrap()
    }

    #[test]
    fn frame_matches_surface() {
        let f = Framebuffer::for_config(&BookConfig::default());
        assert_eq!((f.width, f.height), (950, 380));
    }

    #[test]
    fn top_page_shows_on_right() {
        let b = book(3);
        let canvas = Canvas::new(950, 380).unwrap();
        let mut f = Framebuffer::for_config(b.config());
        f.compose(&b, &canvas, "");
        let o = b.config().spine_origin();
        let px = f.buf[(o.y as usize + 5) * f.width + o.x as usize + 390];
        assert_eq!(px, b.page(0).unwrap().content().color);
    }

    #[test]
    fn turned_page_reveals_next() {
        let mut b = book(3);
        b.handle_pointer(PointerEvent::Down(Point::new(100.0, 10.0)));
        b.handle_pointer(PointerEvent::Up(Point::new(-100.0, 10.0)));
        while !b.tick().is_idle() {}
        assert!(b.page(0).unwrap().content().width < 1.0);

        let canvas = Canvas::new(950, 380).unwrap();
        let mut f = Framebuffer::for_config(b.config());
        f.compose(&b, &canvas, "");
        let o = b.config().spine_origin();
        let px = f.buf[(o.y as usize + 5) * f.width + o.x as usize + 390];
        assert_eq!(px, b.page(1).unwrap().content().color);
    }

    #[test]
    fn fill_rect_clips() {
        let mut f = Framebuffer::for_config(&BookConfig::default());
        f.fill_rect(-10, -10, 20, 20, 0xFF123456);
        assert_eq!(f.buf[0], 0xFF123456);
        assert_eq!(f.buf[10], BG_COLOR);
        f.fill_rect(940, 370, 50, 50, 0xFF654321);
        assert_eq!(*f.buf.last().unwrap(), 0xFF654321);
    }
}
