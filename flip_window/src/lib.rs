//! # flip_window
//!
//! A `minifb` window hosting a [`page_flip::Book`]: the mouse drags pages
//! across the spine, a software canvas rasterizes the fold overlay, and each
//! page's content is cut at the fold.
//!
//! ## Controls
//!
//! | Input | Action |
//! |---|---|
//! | Press near the spine, right half | Pick up the top right page |
//! | Press near the spine, left half | Pick up the top left page |
//! | Drag | Page follows the pointer |
//! | Release | Page settles on the side of the spine it was released on |
//! | `Q` / `Escape` | Quit |

pub mod app;
pub mod canvas;
pub mod cli;
pub mod font;
pub mod page;
pub mod pointer;
pub mod viewer;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid book configuration: {0}")]
    Config(#[from] page_flip::ConfigError),

    #[error("cannot allocate a {width}×{height} drawing surface")]
    Surface { width: u32, height: u32 },

    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}
