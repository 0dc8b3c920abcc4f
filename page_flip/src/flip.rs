//! Per-page flip state and the easing rule.

use crate::config::BookConfig;
use crate::geometry::FoldGeometry;

// ════════════════════════════════════════════════════════════════════════════
// PageSink: the page's content element
// ════════════════════════════════════════════════════════════════════════════

/// Handle to a page's visual content.  The book only ever resizes it so the
/// content ends where the fold begins.
pub trait PageSink {
    fn set_width(&mut self, pixels: f32);
}

/// A page with no visual content attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullPage;

impl PageSink for NullPage {
    fn set_width(&mut self, _pixels: f32) {}
}

// ════════════════════════════════════════════════════════════════════════════
// PageFlip
// ════════════════════════════════════════════════════════════════════════════

/// Continuous state of one page.
///
/// `progress` runs from -1 (flat on the left stack) through 0 (standing
/// upright) to +1 (flat on the right stack).  Both `progress` and `target`
/// always stay within that range.
#[derive(Debug)]
pub struct PageFlip<P> {
    progress: f32,
    target:   f32,
    content:  P,
}

impl<P: PageSink> PageFlip<P> {
    /// A page resting on the right stack.
    pub fn new(content: P) -> Self {
        PageFlip { progress: 1.0, target: 1.0, content }
    }

    pub fn progress(&self) -> f32 { self.progress }
    pub fn target(&self)   -> f32 { self.target }
    pub fn content(&self)  -> &P  { &self.content }

    pub fn set_target(&mut self, target: f32) {
        self.target = clamp_progress(target);
    }

    /// Move `progress` a fraction `k` of the way toward `target`.
    pub fn ease(&mut self, k: f32) {
        self.progress = clamp_progress(self.progress + (self.target - self.progress) * k);
    }

    /// Whether the page has to be drawn: it is being dragged, or it is still
    /// visibly away from either stack.
    pub fn in_transition(&self, dragging: bool, threshold: f32) -> bool {
        dragging || self.progress.abs() < threshold
    }

    pub fn geometry(&self, config: &BookConfig) -> FoldGeometry {
        FoldGeometry::new(self.progress, config)
    }

    pub(crate) fn content_mut(&mut self) -> &mut P {
        &mut self.content
    }

    #[cfg(test)]
    pub(crate) fn with_progress(mut self, progress: f32, target: f32) -> Self {
        self.progress = clamp_progress(progress);
        self.target = clamp_progress(target);
        self
    }
}

/// Clamp into `[-1, 1]`.  NaN collapses to the right stack.
pub fn clamp_progress(v: f32) -> f32 {
    if v.is_nan() { 1.0 } else { v.clamp(-1.0, 1.0) }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
