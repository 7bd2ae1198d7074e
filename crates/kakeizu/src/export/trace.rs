//! Instruction-recording canvas for compositor tests.

use std::convert::Infallible;

use kakeizu_core::{
    canvas::{Ink, PageCanvas, TextMode},
    geometry::{Bounds, Point},
};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Rect {
        bounds: Bounds,
        stroke_width: f32,
    },
    Ellipse {
        bounds: Bounds,
        stroke_width: f32,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
    },
    Text {
        origin: Point,
        content: String,
        size: f32,
        mode: TextMode,
        ink: Ink,
    },
    EndPage,
}

/// Canvas that appends every call to an instruction list instead of
/// drawing. Text is "measured" as one em per character, which keeps tests
/// deterministic and independent of any installed fonts.
#[derive(Debug, Default)]
pub struct TraceCanvas {
    instructions: Vec<Instruction>,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded instruction stream, in issue order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Splits the stream into pages at `EndPage` boundaries. The `EndPage`
    /// markers themselves are not included.
    pub fn pages(&self) -> Vec<&[Instruction]> {
        self.instructions
            .split(|instruction| *instruction == Instruction::EndPage)
            .filter(|page| !page.is_empty())
            .collect()
    }
}

impl PageCanvas for TraceCanvas {
    type Error = Infallible;

    fn rect(&mut self, bounds: Bounds, stroke_width: f32) -> Result<(), Infallible> {
        self.instructions.push(Instruction::Rect {
            bounds,
            stroke_width,
        });
        Ok(())
    }

    fn ellipse(&mut self, bounds: Bounds, stroke_width: f32) -> Result<(), Infallible> {
        self.instructions.push(Instruction::Ellipse {
            bounds,
            stroke_width,
        });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, width: f32) -> Result<(), Infallible> {
        self.instructions.push(Instruction::Line { from, to, width });
        Ok(())
    }

    fn text(
        &mut self,
        origin: Point,
        content: &str,
        size: f32,
        mode: TextMode,
        ink: Ink,
    ) -> Result<(), Infallible> {
        self.instructions.push(Instruction::Text {
            origin,
            content: content.to_string(),
            size,
            mode,
            ink,
        });
        Ok(())
    }

    fn measure(&self, content: &str, size: f32) -> f32 {
        content.chars().count() as f32 * size
    }

    fn end_page(&mut self) -> Result<(), Infallible> {
        self.instructions.push(Instruction::EndPage);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_split_on_end_page() {
        let mut canvas = TraceCanvas::new();
        canvas
            .line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.5)
            .unwrap();
        canvas.end_page().unwrap();
        canvas
            .text(Point::new(2.0, 2.0), "a", 10.0, TextMode::Fill, Ink::Foreground)
            .unwrap();
        canvas.end_page().unwrap();

        let pages = canvas.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 1);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        let canvas = TraceCanvas::new();
        assert_eq!(canvas.measure("父の父", 10.0), 30.0);
        assert_eq!(canvas.measure("", 10.0), 0.0);
    }
}
