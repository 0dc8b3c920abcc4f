//! Fold geometry: the curled-paper silhouette and its shadows, derived from
//! a single progress value.
//!
//! Everything here is a pure function of `progress` and the [`BookConfig`]:
//! the same inputs always produce the same [`DrawPlan`], down to the bit.
//!
//! Book-local layout used by the plan (origin at the spine, top of paper):
//!
//! ```text
//!            fold_x − fold_width        fold_x
//!                   │◄── fold_width ──►│
//!   ░░ left shadow ░│   curled paper    │▒ right shadow ▒
//!                   │                   │
//! ```

use crate::config::BookConfig;
use crate::paint::{LinearGradient, Paint, Path, Point, RenderSink, Rgba};

/// Height (px) the curled edge lifts at its top and bottom when the page
/// stands upright.
pub const MAX_OUTDENT: f32 = 20.0;

/// Crease line width at full strength.
const CREASE_WIDTH:   f32 = 30.0;
const CREASE_ALPHA:   f32 = 0.05;
const RIGHT_SHADOW_ALPHA: f32 = 0.2;
const LEFT_SHADOW_ALPHA:  f32 = 0.15;
const OUTLINE_ALPHA:  f32 = 0.06;
const OUTLINE_WIDTH:  f32 = 0.5;

/// Highlight and shade stops across the curled paper.
const PAPER_STOPS: [(f32, u32); 4] = [
    (0.35, 0xFAFAFA),
    (0.73, 0xEEEEEE),
    (0.90, 0xFAFAFA),
    (1.00, 0xE2E2E2),
];

// ════════════════════════════════════════════════════════════════════════════
// FoldGeometry
// ════════════════════════════════════════════════════════════════════════════

/// Scalar measurements of a fold at one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldGeometry {
    pub progress: f32,
    /// 0 when flat, 1 when the page stands perpendicular to the book.
    pub strength: f32,
    /// Width of the visibly curled portion.
    pub fold_width: f32,
    /// Book-local x of the fold line.
    pub fold_x: f32,
    pub vertical_outdent: f32,
    pub paper_shadow_width: f32,
    pub right_shadow_width: f32,
    pub left_shadow_width:  f32,
}

impl FoldGeometry {
    /// Measure the fold.  `progress` is clamped to `[-1, 1]`.
    pub fn new(progress: f32, config: &BookConfig) -> Self {
        let progress = progress.clamp(-1.0, 1.0);
        let half = config.page_width * 0.5;

        let strength   = 1.0 - progress.abs();
        let fold_width = half * (1.0 - progress);
        let fold_x     = config.page_width * progress + fold_width;

        FoldGeometry {
            progress,
            strength,
            fold_width,
            fold_x,
            vertical_outdent:   MAX_OUTDENT * strength,
            paper_shadow_width: half * (1.0 - progress).clamp(0.0, 0.5),
            right_shadow_width: half * strength.clamp(0.0, 0.5),
            left_shadow_width:  half * strength.clamp(0.0, 0.5),
        }
    }

    /// Book-local x of the curled page's outer edge.
    pub fn edge_x(&self) -> f32 {
        self.fold_x - self.fold_width
    }

    /// Width the page's content should be cut to so it ends at the fold.
    pub fn content_width(&self) -> f32 {
        self.fold_x.max(0.0)
    }

    /// Build the full draw plan for this fold.
    pub fn draw_plan(&self, config: &BookConfig) -> DrawPlan {
        let page_h  = config.page_height;
        let outdent = self.vertical_outdent;
        let fold_x  = self.fold_x;
        let edge_x  = self.edge_x();
        let s       = self.strength;

        let crease = StrokeOp {
            path: Path::new()
                .move_to(edge_x, -outdent * 0.5)
                .line_to(edge_x, page_h + outdent * 0.5),
            color: Rgba::black(CREASE_ALPHA * s),
            width: CREASE_WIDTH * s,
        };

        let right_shadow = FillOp {
            path: Path::rect(fold_x, 0.0, self.right_shadow_width, page_h),
            paint: Paint::Linear(
                LinearGradient::horizontal(fold_x, fold_x + self.right_shadow_width)
                    .stop(0.0, Rgba::black(s * RIGHT_SHADOW_ALPHA))
                    .stop(0.8, Rgba::TRANSPARENT),
            ),
        };

        let left_x = edge_x - self.left_shadow_width;
        let left_shadow = FillOp {
            path: Path::rect(left_x, 0.0, self.left_shadow_width, page_h),
            paint: Paint::Linear(
                LinearGradient::horizontal(left_x, edge_x)
                    .stop(0.0, Rgba::TRANSPARENT)
                    .stop(1.0, Rgba::black(s * LEFT_SHADOW_ALPHA)),
            ),
        };

        let mut paper_gradient =
            LinearGradient::horizontal(fold_x - self.paper_shadow_width, fold_x);
        for (offset, rgb) in PAPER_STOPS {
            paper_gradient = paper_gradient.stop(offset, Rgba::hex(rgb));
        }
        let paper_path = Path::new()
            .move_to(fold_x, 0.0)
            .line_to(fold_x, page_h)
            .quad_to(fold_x, page_h + outdent * 2.0, edge_x, page_h + outdent)
            .line_to(edge_x, -outdent)
            .quad_to(fold_x, -outdent * 2.0, fold_x, 0.0)
            .close();

        DrawPlan {
            origin: config.spine_origin(),
            crease,
            right_shadow,
            left_shadow,
            paper: FillOp {
                path:  paper_path.clone(),
                paint: Paint::Linear(paper_gradient),
            },
            paper_outline: StrokeOp {
                path:  paper_path,
                color: Rgba::black(OUTLINE_ALPHA),
                width: OUTLINE_WIDTH,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DrawPlan
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
pub struct FillOp {
    pub path:  Path,
    pub paint: Paint,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeOp {
    pub path:  Path,
    pub color: Rgba,
    pub width: f32,
}

/// Everything needed to draw one turning page, in book-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawPlan {
    /// Surface position the plan is translated to before drawing.
    pub origin:        Point,
    pub crease:        StrokeOp,
    pub right_shadow:  FillOp,
    pub left_shadow:   FillOp,
    pub paper:         FillOp,
    pub paper_outline: StrokeOp,
}

impl DrawPlan {
    /// Issue the plan to `sink` inside its own transform scope.
    pub fn paint(&self, sink: &mut dyn RenderSink) {
        sink.save();
        sink.translate(self.origin.x, self.origin.y);

        sink.stroke_path(&self.crease.path, self.crease.color, self.crease.width);
        sink.fill_path(&self.right_shadow.path, &self.right_shadow.paint);
        sink.fill_path(&self.left_shadow.path, &self.left_shadow.paint);
        sink.fill_path(&self.paper.path, &self.paper.paint);
        sink.stroke_path(
            &self.paper_outline.path,
            self.paper_outline.color,
            self.paper_outline.width,
        );

        sink.restore();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
