//! Fixed book configuration.
//!
//! Dimensions are in surface pixels.  The drawing surface is the book plus
//! `padding` on every side, so shadows and the vertical outdent of a curling
//! page have room to spill past the paper.

use std::time::Duration;

use crate::error::ConfigError;
use crate::paint::Point;

/// Largest drawing-surface side, in pixels, a configuration may ask for.
pub const MAX_SURFACE_SIDE: f32 = 8192.0;

/// Book geometry and animation constants.  Immutable once a
/// [`Book`](crate::Book) has been built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct BookConfig {
    pub book_width:  f32,
    pub book_height: f32,
    pub page_width:  f32,
    pub page_height: f32,
    /// Extra surface around the book on every side.
    pub padding:     f32,
    /// Fraction of the remaining distance to `target` covered each tick.
    pub easing:      f32,
    /// Scheduler cadence in ticks per second.
    pub tick_rate:   u32,
    /// Pages with `|progress|` at or above this are considered at rest.
    pub transition_threshold: f32,
}

impl Default for BookConfig {
    fn default() -> Self {
        BookConfig {
            book_width:  830.0,
            book_height: 260.0,
            page_width:  400.0,
            page_height: 250.0,
            padding:     60.0,
            easing:      0.2,
            tick_rate:   60,
            transition_threshold: 0.997,
        }
    }
}

impl BookConfig {
    /// Check every field; the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("book_width",  self.book_width),
            ("book_height", self.book_height),
            ("page_width",  self.page_width),
            ("page_height", self.page_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::NegativePadding(self.padding));
        }
        if !(self.easing > 0.0 && self.easing < 1.0) {
            return Err(ConfigError::Easing(self.easing));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::TickRate);
        }
        if !(self.transition_threshold > 0.0 && self.transition_threshold <= 1.0) {
            return Err(ConfigError::Threshold(self.transition_threshold));
        }
        if self.page_width * 2.0 > self.book_width || self.page_height > self.book_height {
            return Err(ConfigError::PageTooLarge {
                page_width:  self.page_width,
                page_height: self.page_height,
                book_width:  self.book_width,
                book_height: self.book_height,
            });
        }
        let (width, height) = self.surface_size();
        if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(ConfigError::SurfaceTooLarge { width, height, max: MAX_SURFACE_SIDE });
        }
        Ok(())
    }

    /// Vertical gap between the top of the book and the top of the paper.
    pub fn page_y(&self) -> f32 {
        (self.book_height - self.page_height) / 2.0
    }

    /// Drawing-surface size `(width, height)`.
    pub fn surface_size(&self) -> (f32, f32) {
        (
            self.book_width + self.padding * 2.0,
            self.book_height + self.padding * 2.0,
        )
    }

    /// Surface position of the book-local origin (spine, top of the paper).
    pub fn spine_origin(&self) -> Point {
        Point::new(
            self.padding + self.book_width / 2.0,
            self.padding + self.page_y(),
        )
    }

    /// Convert a surface position into book-local coordinates.
    pub fn to_book_local(&self, surface: Point) -> Point {
        let o = self.spine_origin();
        Point::new(surface.x - o.x, surface.y - o.y)
    }

    /// Wall-clock length of one scheduler tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
