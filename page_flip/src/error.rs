//! Construction-time errors.
//!
//! Nothing fails per frame: every numeric quantity the book touches is
//! clamped.  The only failure mode is building a book from a malformed
//! configuration, which is rejected up front.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("padding must be finite and non-negative (got {0})")]
    NegativePadding(f32),

    #[error("easing coefficient must lie strictly between 0 and 1 (got {0})")]
    Easing(f32),

    #[error("tick rate must be at least one tick per second")]
    TickRate,

    #[error("transition threshold must lie in (0, 1] (got {0})")]
    Threshold(f32),

    #[error("page ({page_width}×{page_height}) does not fit a half of the book ({book_width}×{book_height})")]
    PageTooLarge {
        page_width:  f32,
        page_height: f32,
        book_width:  f32,
        book_height: f32,
    },

    #[error("drawing surface {width}×{height} exceeds {max} pixels per side")]
    SurfaceTooLarge { width: f32, height: f32, max: f32 },

    #[error("a book needs at least one page")]
    NoPages,
}
