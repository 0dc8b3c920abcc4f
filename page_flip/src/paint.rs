//! Paint model and the drawing-surface contract.
//!
//! Draw plans are built from plain values ([`Path`], [`Paint`], [`Rgba`]) and
//! handed to a [`RenderSink`], an immediate-mode 2D surface with a
//! save/translate/restore transform scope.  The core never owns a surface;
//! [`RecordingSink`] captures the command stream for tests and headless
//! inspection.

// ════════════════════════════════════════════════════════════════════════════
// Point / Rgba
// ════════════════════════════════════════════════════════════════════════════

/// A point in surface (or book-local) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Straight (non-premultiplied) colour: 8-bit channels, alpha 0.0–1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Opaque colour from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Rgba {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 1.0,
        }
    }

    /// Black at the given alpha, clamped to 0.0–1.0.
    pub fn black(alpha: f32) -> Self {
        Rgba { r: 0, g: 0, b: 0, a: alpha.clamp(0.0, 1.0) }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gradients
// ════════════════════════════════════════════════════════════════════════════

/// One stop of a gradient; `offset` lies in 0.0–1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color:  Rgba,
}

impl ColorStop {
    pub fn new(offset: f32, color: Rgba) -> Self {
        ColorStop { offset: offset.clamp(0.0, 1.0), color }
    }
}

/// Linear gradient along the axis `start → end` with ordered stops.
///
/// Points are projected onto the axis.  Before the first stop the first
/// colour is used, past the last stop the last colour.  A zero-length axis
/// or an empty stop list paints nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end:   Point,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        LinearGradient { start, end, stops: Vec::new() }
    }

    /// Gradient running horizontally from `x0` to `x1`.
    pub fn horizontal(x0: f32, x1: f32) -> Self {
        Self::new(Point::new(x0, 0.0), Point::new(x1, 0.0))
    }

    /// Append a stop.  Stops must be added in non-decreasing offset order.
    pub fn stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(ColorStop::new(offset, color));
        self
    }
}

/// Fill style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

// ════════════════════════════════════════════════════════════════════════════
// Path
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier with control point `ctrl`.
    QuadTo { ctrl: Point, to: Point },
    Close,
}

/// A sequence of path segments, built with chained calls.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    /// Axis-aligned closed rectangle.
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Path::new()
            .move_to(x, y)
            .line_to(x + w, y)
            .line_to(x + w, y + h)
            .line_to(x, y + h)
            .close()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::QuadTo {
            ctrl: Point::new(cx, cy),
            to:   Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

// ════════════════════════════════════════════════════════════════════════════
// RenderSink: the drawing-surface contract
// ════════════════════════════════════════════════════════════════════════════

/// An immediate-mode 2D drawing surface.
///
/// `translate` applies to every subsequent path until the matching
/// `restore`.  Fills use the non-zero winding rule and implicitly close
/// open subpaths.
pub trait RenderSink {
    /// Reset the rectangle to fully transparent.
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn save(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn restore(&mut self);
    fn fill_path(&mut self, path: &Path, paint: &Paint);
    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32);
}

// ════════════════════════════════════════════════════════════════════════════
// RecordingSink
// ════════════════════════════════════════════════════════════════════════════

/// One call received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Save,
    Translate { dx: f32, dy: f32 },
    Restore,
    Fill { path: Path, paint: Paint },
    Stroke { path: Path, color: Rgba, width: f32 },
}

/// A sink that records every command instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<SinkCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SinkCommand::Clear { .. }))
            .count()
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SinkCommand::Fill { .. }))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(SinkCommand::Clear { x, y, w, h });
    }
    fn save(&mut self) {
        self.commands.push(SinkCommand::Save);
    }
    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(SinkCommand::Translate { dx, dy });
    }
    fn restore(&mut self) {
        self.commands.push(SinkCommand::Restore);
    }
    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(SinkCommand::Fill { path: path.clone(), paint: paint.clone() });
    }
    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) {
        self.commands.push(SinkCommand::Stroke { path: path.clone(), color, width });
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Rgba::hex(0xFAEEE2);
        assert_eq!((c.r, c.g, c.b), (0xFA, 0xEE, 0xE2));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn black_alpha_is_clamped() {
        assert_eq!(Rgba::black(1.5).a, 1.0);
        assert_eq!(Rgba::black(-0.2).a, 0.0);
    }

    #[test]
    fn gradient_builder_keeps_stop_order() {
        let g = LinearGradient::horizontal(160.0, 260.0)
            .stop(0.35, Rgba::hex(0xFAFAFA))
            .stop(1.4,  Rgba::hex(0xE2E2E2));
        assert_eq!(g.start, Point::new(160.0, 0.0));
        assert_eq!(g.end, Point::new(260.0, 0.0));
        assert_eq!(g.stops[0].offset, 0.35);
        // offsets are clamped into 0..=1
        assert_eq!(g.stops[1].offset, 1.0);
    }

    #[test]
    fn rect_path_is_closed() {
        let p = Path::rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            p.segments(),
            &[
                PathSegment::MoveTo(Point::new(1.0, 2.0)),
                PathSegment::LineTo(Point::new(4.0, 2.0)),
                PathSegment::LineTo(Point::new(4.0, 6.0)),
                PathSegment::LineTo(Point::new(1.0, 6.0)),
                PathSegment::Close,
            ]
        );
    }

    #[test]
    fn recording_sink_counts() {
        let mut s = RecordingSink::new();
        s.clear(0.0, 0.0, 1.0, 1.0);
        s.fill_path(&Path::rect(0.0, 0.0, 1.0, 1.0), &Paint::Solid(Rgba::black(1.0)));
        assert_eq!(s.clear_count(), 1);
        assert_eq!(s.fill_count(), 1);
    }
}
