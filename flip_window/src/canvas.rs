//! Fold overlay canvas: a [`RenderSink`] backed by a `tiny-skia` pixmap.
//!
//! Paths and gradients from a draw plan are converted to their `tiny-skia`
//! counterparts and filled with the non-zero winding rule.  The
//! save/translate/restore scope is a stack of [`Transform`]s.  Each frame the
//! pixmap is composited over the window framebuffer.

use page_flip::{Paint, Path, PathSegment, RenderSink, Rgba};
use tiny_skia::{
    BlendMode, Color, FillRule, GradientStop, LinearGradient, Pixmap, PremultipliedColorU8,
    Rect, Shader, SpreadMode, Stroke, Transform,
};

pub struct Canvas {
    pixmap:    Pixmap,
    transform: Transform,
    saved:     Vec<Transform>,
}

impl Canvas {
    /// A fully transparent canvas, or `None` if `tiny-skia` cannot allocate
    /// a pixmap of that size (zero or oversized).
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Canvas {
            pixmap:    Pixmap::new(width, height)?,
            transform: Transform::identity(),
            saved:     Vec::new(),
        })
    }

    pub fn width(&self)  -> usize { self.pixmap.width() as usize }
    pub fn height(&self) -> usize { self.pixmap.height() as usize }

    /// Premultiplied `[r, g, b, a]` at `(x, y)`; transparent outside.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let px = u32::try_from(x).ok().zip(u32::try_from(y).ok())
            .and_then(|(x, y)| self.pixmap.pixel(x, y))
            .unwrap_or(PremultipliedColorU8::TRANSPARENT);
        [px.red(), px.green(), px.blue(), px.alpha()]
    }

    /// Source-over the canvas onto an opaque `0xAARRGGBB` framebuffer with
    /// the canvas origin placed at `(at_x, at_y)`.
    pub fn composite_onto(&self, dst: &mut [u32], dst_w: usize, dst_h: usize, at_x: isize, at_y: isize) {
        let width = self.width();
        for (i, src) in self.pixmap.pixels().iter().enumerate() {
            if src.alpha() == 0 { continue; }
            let dx = (i % width) as isize + at_x;
            let dy = (i / width) as isize + at_y;
            if dx < 0 || dy < 0 || dx >= dst_w as isize || dy >= dst_h as isize { continue; }
            let idx = dy as usize * dst_w + dx as usize;
            dst[idx] = over_opaque(*src, dst[idx]);
        }
    }
}

impl RenderSink for Canvas {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else { return };
        let paint = tiny_skia::Paint {
            blend_mode: BlendMode::Clear,
            anti_alias: false,
            ..tiny_skia::Paint::default()
        };
        self.pixmap.fill_rect(rect, &paint, self.transform, None);
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }

    fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let (Some(sk_path), Some(shader)) = (to_sk_path(path), to_shader(paint)) else {
            return;
        };
        let paint = tiny_skia::Paint { shader, ..tiny_skia::Paint::default() };
        self.pixmap.fill_path(&sk_path, &paint, FillRule::Winding, self.transform, None);
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) {
        if width <= 0.0 || color.a <= 0.0 { return; }
        let Some(sk_path) = to_sk_path(path) else { return };
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(to_color(color));
        let stroke = Stroke { width, ..Stroke::default() };
        self.pixmap.stroke_path(&sk_path, &paint, &stroke, self.transform, None);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Conversions into tiny-skia
// ════════════════════════════════════════════════════════════════════════════

fn to_sk_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for seg in path.segments() {
        match *seg {
            PathSegment::MoveTo(p)          => pb.move_to(p.x, p.y),
            PathSegment::LineTo(p)          => pb.line_to(p.x, p.y),
            PathSegment::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathSegment::Close              => pb.close(),
        }
    }
    pb.finish()
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
        c.a.clamp(0.0, 1.0),
    )
    .unwrap_or(Color::TRANSPARENT)
}

/// `None` where the paint contributes nothing: no stops or a zero-length
/// gradient axis.
fn to_shader(paint: &Paint) -> Option<Shader<'static>> {
    match paint {
        Paint::Solid(c) => Some(Shader::SolidColor(to_color(*c))),
        Paint::Linear(g) => {
            let (dx, dy) = (g.end.x - g.start.x, g.end.y - g.start.y);
            if g.stops.is_empty() || dx * dx + dy * dy <= f32::EPSILON {
                return None;
            }
            let stops = g.stops
                .iter()
                .map(|s| GradientStop::new(s.offset, to_color(s.color)))
                .collect();
            LinearGradient::new(
                tiny_skia::Point::from_xy(g.start.x, g.start.y),
                tiny_skia::Point::from_xy(g.end.x, g.end.y),
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            )
        }
    }
}

/// Premultiplied source over an opaque ARGB destination.
fn over_opaque(src: PremultipliedColorU8, dst: u32) -> u32 {
    let inv = 255 - src.alpha() as u32;
    let chan = |s: u8, shift: u32| {
        let d = (dst >> shift) & 0xFF;
        ((s as u32 + (d * inv + 127) / 255).min(255)) << shift
    };
    0xFF000000 | chan(src.red(), 16) | chan(src.green(), 8) | chan(src.blue(), 0)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
