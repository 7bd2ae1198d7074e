//! SVG backend: one `<svg>` document per composed page.
//!
//! Chart geometry uses a bottom-left, y-up origin; SVG is top-left, y-down.
//! Every primitive flips its y coordinate against the page height at emit
//! time so the composer never has to know which convention the surface
//! uses.

use std::{
    convert::Infallible,
    fs::File,
    io::Write as _,
    path::Path,
    sync::Mutex,
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use kakeizu_core::{
    canvas::{Ink, PageCanvas, TextMode},
    geometry::{Bounds, Point, Size},
};

use crate::{config::ChartConfig, error::ChartError};

const FOREGROUND: &str = "black";
const BACKGROUND: &str = "white";

/// Multi-page SVG canvas.
///
/// Construct, [`register_font`](Self::register_font), hand to the
/// composer, then [`write_pages`](Self::write_pages). Text measurement
/// shapes the string with cosmic-text against the registered family, so
/// registration must happen before any drawing.
pub struct SvgCanvas {
    font_system: Mutex<FontSystem>,
    family: String,
    page_size: Size,
    current: Document,
    pages: Vec<Document>,
}

impl SvgCanvas {
    /// Creates an empty canvas sized from the configuration.
    pub fn new(config: &ChartConfig) -> Self {
        info!("Initializing FontSystem");
        let page_size = config.page().size();
        Self {
            font_system: Mutex::new(FontSystem::new()),
            family: config.font().family().to_string(),
            page_size,
            current: new_document(page_size),
            pages: Vec::new(),
        }
    }

    /// Loads font bytes and verifies they provide the configured family.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Font`] when, after loading, no face in the
    /// font database carries the configured family name. Callers must
    /// treat this as fatal: widths measured against a missing family are
    /// garbage.
    pub fn register_font(&mut self, bytes: Vec<u8>) -> Result<(), ChartError> {
        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");
        font_system.db_mut().load_font_data(bytes);

        let present = font_system.db().faces().any(|face| {
            face.families
                .iter()
                .any(|(name, _)| name == &self.family)
        });
        if !present {
            error!(family = self.family; "Registered font bytes do not provide the configured family");
            return Err(ChartError::Font {
                family: self.family.clone(),
            });
        }
        debug!(family = self.family; "Font family registered");
        Ok(())
    }

    /// The finished pages, in composition order. The page the composer is
    /// still drawing on is not included.
    pub fn pages(&self) -> &[Document] {
        &self.pages
    }

    /// Writes each finished page as `<stem>-<n>.svg` next to `path`,
    /// numbered from 1.
    pub fn write_pages(&self, path: &Path) -> Result<(), ChartError> {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("page");
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("svg");

        for (index, page) in self.pages.iter().enumerate() {
            let file_name = format!("{stem}-{}.{extension}", index + 1);
            let target = path.with_file_name(&file_name);
            info!(file_name; "Writing SVG page");
            let file = File::create(&target)?;
            write!(&file, "{page}")?;
        }
        Ok(())
    }

    /// SVG y for a chart y.
    fn flip(&self, y: f32) -> f32 {
        self.page_size.height() - y
    }

    /// Appends a node to the page under construction. `Document::add`
    /// consumes the document, hence the swap.
    fn push(&mut self, node: Box<dyn svg::Node>) {
        let document = std::mem::replace(&mut self.current, Document::new());
        self.current = document.add(node);
    }
}

fn new_document(size: Size) -> Document {
    Document::new()
        .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
        .set("width", format!("{}pt", size.width()))
        .set("height", format!("{}pt", size.height()))
}

impl PageCanvas for SvgCanvas {
    type Error = Infallible;

    fn rect(&mut self, bounds: Bounds, stroke_width: f32) -> Result<(), Infallible> {
        let element = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", self.flip(bounds.max_y()))
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", BACKGROUND)
            .set("stroke", FOREGROUND)
            .set("stroke-width", stroke_width);
        self.push(Box::new(element));
        Ok(())
    }

    fn ellipse(&mut self, bounds: Bounds, stroke_width: f32) -> Result<(), Infallible> {
        let center = bounds.center();
        let element = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", self.flip(center.y()))
            .set("rx", bounds.width() / 2.0)
            .set("ry", bounds.height() / 2.0)
            .set("fill", BACKGROUND)
            .set("stroke", FOREGROUND)
            .set("stroke-width", stroke_width);
        self.push(Box::new(element));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, width: f32) -> Result<(), Infallible> {
        let element = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", self.flip(from.y()))
            .set("x2", to.x())
            .set("y2", self.flip(to.y()))
            .set("stroke", FOREGROUND)
            .set("stroke-width", width);
        self.push(Box::new(element));
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
        let color = match ink {
            Ink::Foreground => FOREGROUND,
            Ink::Background => BACKGROUND,
        };
        let mut element = svg_element::Text::new(content)
            .set("x", origin.x())
            .set("y", self.flip(origin.y()))
            .set("font-family", self.family.as_str())
            .set("font-size", size);
        element = match mode {
            TextMode::Fill => element.set("fill", color),
            TextMode::Stroke { width } => element
                .set("fill", "none")
                .set("stroke", color)
                .set("stroke-width", width),
        };
        self.push(Box::new(element));
        Ok(())
    }

    fn measure(&self, content: &str, size: f32) -> f32 {
        if content.is_empty() {
            return 0.0;
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let metrics = Metrics::new(size, size * 1.15);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(&self.family));
        buffer.set_size(None, None);
        buffer.set_text(content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
        }

        if max_width > 0.0 {
            max_width
        } else {
            // No face resolved the content; assume full-width glyphs.
            content.chars().count() as f32 * size
        }
    }

    fn end_page(&mut self) -> Result<(), Infallible> {
        let finished = std::mem::replace(&mut self.current, new_document(self.page_size));
        self.pages.push(finished);
        Ok(())
    }
}
