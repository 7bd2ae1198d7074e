//! The drawing-surface trait consumed by the page compositor.
//!
//! The compositor never talks to a concrete output format. It issues a
//! small set of vector primitives to a [`PageCanvas`], in strict page and
//! draw order; later instructions overlay earlier ones on the same page,
//! which the watermark rendering depends on. Backends live outside this
//! crate (the engine crate ships an SVG backend and an instruction-trace
//! backend).

use crate::geometry::{Bounds, Point};

/// Glyph render mode for a text run.
///
/// `Stroke` draws glyph outlines only, which the chart uses to fake a bold
/// face without a second font file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextMode {
    /// Filled glyphs (the normal case).
    Fill,
    /// Outlined glyphs with the given stroke width.
    Stroke { width: f32 },
}

/// Ink selection for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Regular foreground ink (black).
    Foreground,
    /// Page-background ink, used for the watermark tiling.
    Background,
}

/// A sequential multi-page vector drawing sink.
///
/// All shape primitives are stroked in foreground ink; closed shapes are
/// filled with the page background. Text origins are the baseline start
/// (left edge) of the
/// run. [`end_page`](Self::end_page) finishes the current page; pages are
/// emitted in the exact order the composer produces them.
pub trait PageCanvas {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws a stroked, background-filled rectangle.
    fn rect(&mut self, bounds: Bounds, stroke_width: f32) -> Result<(), Self::Error>;

    /// Draws a stroked, background-filled ellipse inscribed in `bounds`.
    fn ellipse(&mut self, bounds: Bounds, stroke_width: f32) -> Result<(), Self::Error>;

    /// Draws a straight line segment. A zero-length segment is valid and
    /// must not fail.
    fn line(&mut self, from: Point, to: Point, width: f32) -> Result<(), Self::Error>;

    /// Draws a text run starting at `origin` (baseline, left edge).
    fn text(
        &mut self,
        origin: Point,
        content: &str,
        size: f32,
        mode: TextMode,
        ink: Ink,
    ) -> Result<(), Self::Error>;

    /// Returns the advance width of `content` at the given font size, in
    /// page units.
    fn measure(&self, content: &str, size: f32) -> f32;

    /// Finishes the current page and starts a new one.
    fn end_page(&mut self) -> Result<(), Self::Error>;
}
