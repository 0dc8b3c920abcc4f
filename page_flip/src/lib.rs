//! # page_flip
//!
//! Flip state machine and fold-geometry renderer for an interactive
//! page-turning book.
//!
//! Every page carries a continuous `progress` in `[-1, 1]` (left stack …
//! upright … right stack) that eases toward a `target` once per tick.  A
//! pointer press near the spine grabs the top page of either stack, the page
//! follows the pointer while dragged, and releasing it commits the page to
//! whichever side of the spine the pointer is on.  Each tick, every page that
//! is still turning is turned into a [`DrawPlan`]: a crease, two drop
//! shadows, and a curled sheet of paper with a glossy gradient.
//!
//! ## Quick start
//!
//! ```rust
//! use page_flip::{Book, BookConfig, NullPage, Point, PointerEvent, RecordingSink};
//!
//! let mut book = Book::new(BookConfig::default(), vec![NullPage; 5]).unwrap();
//!
//! // Grab the top right page just right of the spine and drag it left.
//! book.handle_pointer(PointerEvent::Down(Point::new(120.0, 40.0)));
//! book.handle_pointer(PointerEvent::Move(Point::new(-80.0, 40.0)));
//! book.handle_pointer(PointerEvent::Up(Point::new(-80.0, 40.0)));
//! assert_eq!(book.cursor(), 1);
//!
//! let mut sink = RecordingSink::new();
//! let frame = book.render(&mut sink);
//! assert!(!frame.is_idle());
//! ```
//!
//! The crate draws nothing itself: plans go to any [`RenderSink`], and page
//! content is resized through the [`PageSink`] each page was built with.

pub mod book;
pub mod config;
pub mod error;
pub mod flip;
pub mod geometry;
pub mod input;
pub mod paint;
pub mod scheduler;

pub use book::{Book, Frame, FramePage};
pub use config::{BookConfig, MAX_SURFACE_SIDE};
pub use error::ConfigError;
pub use flip::{clamp_progress, NullPage, PageFlip, PageSink};
pub use geometry::{DrawPlan, FillOp, FoldGeometry, StrokeOp};
pub use input::{GestureOutcome, PointerEvent, Side};
pub use paint::{
    ColorStop, LinearGradient, Paint, Path, PathSegment, Point, RecordingSink, RenderSink, Rgba,
    SinkCommand,
};
pub use scheduler::FrameClock;
