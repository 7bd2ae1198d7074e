//! Page composition: turning a record and a resolved layout into drawing
//! instructions.
//!
//! The composer emits exactly ten pages, in fixed order: the tree page,
//! eight four-up record pages (31 targets in batches of four), and one
//! summary page. Instruction order within a page matters: the canvas is a
//! sequential sink and later draws overlay earlier ones, which the four-up
//! watermark relies on.

use log::{debug, info};

use kakeizu_core::{
    canvas::{Ink, PageCanvas, TextMode},
    geometry::{Bounds, MM, Point},
    matcher::Attributes,
    record::ChartRecord,
    schema::{self, GENERATION_COUNT, Gender, SlotId},
};

use crate::{
    config::ChartConfig,
    error::ChartError,
    layout::{TreeLayout, connector::Bracket},
};

/// Tree-page legend captions.
const LEGEND_PRIORITY: &str = "◎ 太字 ＝ 供養の優先順位の高いご先祖様";
const LEGEND_GUARDIAN: &str = "◎ 左傍線 ＝ 守護してくださるご先祖様";

/// Summary page title and section headings.
const SUMMARY_TITLE: &str = "■ 記録・解析";
const HEADING_GUARDIANS: &str = "◎ 守護";
const HEADING_PRIORITIES: &str = "◎ 癒す優先順位";
const HEADING_CONTRACTS: &str = "◎ 契約・コード";

/// Record-page batch size (the quartered layout).
const QUAD_BATCH: usize = 4;

/// Vertical glyph step as a fraction of the font size in stacked text.
const STACK_STEP: f32 = 1.05;

/// Composes the full document onto a [`PageCanvas`].
pub struct PageComposer<'a> {
    config: &'a ChartConfig,
    record: &'a ChartRecord,
    layout: &'a TreeLayout,
}

impl<'a> PageComposer<'a> {
    /// Creates a composer over a resolved layout and a parsed record.
    pub fn new(config: &'a ChartConfig, record: &'a ChartRecord, layout: &'a TreeLayout) -> Self {
        Self {
            config,
            record,
            layout,
        }
    }

    /// Renders the complete document: tree page, four-up pages, summary.
    ///
    /// # Errors
    ///
    /// Backend failures are wrapped in [`ChartError::Canvas`] and abort the
    /// render; no further pages are emitted.
    pub fn render<C: PageCanvas>(&self, canvas: &mut C) -> Result<(), ChartError> {
        info!("Composing document");
        self.render_inner(canvas).map_err(ChartError::canvas)?;
        info!("Document composed");
        Ok(())
    }

    fn render_inner<C: PageCanvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        self.tree_page(canvas)?;
        self.quad_pages(canvas)?;
        self.summary_page(canvas)
    }

    // =========================================================================
    // Tree page
    // =========================================================================

    fn tree_page<C: PageCanvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let page = self.config.page().size();
        let tree = self.config.tree();
        let fonts = self.config.font();

        // Legend captions in the top-left corner.
        let legend = Point::new(tree.margins().left(), page.height() - 15.0 * MM);
        canvas.text(
            legend,
            LEGEND_PRIORITY,
            fonts.legend_size(),
            TextMode::Fill,
            Ink::Foreground,
        )?;
        canvas.text(
            legend.offset(0.0, -6.0 * MM),
            LEGEND_GUARDIAN,
            fonts.legend_size(),
            TextMode::Fill,
            Ink::Foreground,
        )?;

        // Nodes with their stacked names.
        for id in SlotId::all() {
            self.tree_node(canvas, id)?;
        }

        // One bracket per couple with a resolved child, outermost first.
        let half_height = tree.box_size().height() / 2.0;
        for generation in (1..GENERATION_COUNT).rev() {
            for &(husband, wife) in schema::couples(generation) {
                let Some(child) = schema::child_of(husband, wife) else {
                    continue;
                };
                let bracket = Bracket::route(
                    self.layout.position(husband),
                    self.layout.position(wife),
                    self.layout.position(child),
                    half_height,
                    tree.bracket_gap(),
                );
                for segment in bracket.segments() {
                    canvas.line(segment.from(), segment.to(), tree.line_width())?;
                }
            }
        }

        canvas.end_page()
    }

    fn tree_node<C: PageCanvas>(&self, canvas: &mut C, id: SlotId) -> Result<(), C::Error> {
        let tree = self.config.tree();
        let center = self.layout.position(id);
        let bounds = Bounds::from_center(center, tree.box_size());

        match id.slot().gender() {
            Gender::Female => canvas.ellipse(bounds, tree.line_width())?,
            Gender::Male => canvas.rect(bounds, tree.line_width())?,
        }

        let attrs = self.record.attributes(id.slot().label());
        self.stacked_name(canvas, self.record.display_name(id), center, attrs)
    }

    /// Draws a name as vertically stacked glyphs centered on `center`,
    /// top-down, with the priority outline and guardian side rule.
    fn stacked_name<C: PageCanvas>(
        &self,
        canvas: &mut C,
        name: &str,
        center: Point,
        attrs: Attributes,
    ) -> Result<(), C::Error> {
        let tree = self.config.tree();
        let size = self.config.font().tree_size();
        let step = size * STACK_STEP;
        let count = name.chars().count();
        let total = count as f32 * step;
        let start_y = center.y() + total / 2.0;

        if attrs.guardian() {
            let rule_x = center.x() - size * 0.8;
            canvas.line(
                Point::new(rule_x, start_y + size * 0.2),
                Point::new(rule_x, start_y - total - size * 0.2),
                tree.rule_width(),
            )?;
        }

        let mode = if attrs.priority() {
            TextMode::Stroke {
                width: tree.name_stroke_width(),
            }
        } else {
            TextMode::Fill
        };

        let mut glyph = [0u8; 4];
        for (i, ch) in name.chars().enumerate() {
            let origin = Point::new(
                center.x() - size / 2.0,
                start_y - i as f32 * step - size,
            );
            canvas.text(origin, ch.encode_utf8(&mut glyph), size, mode, Ink::Foreground)?;
        }
        Ok(())
    }

    // =========================================================================
    // Four-up record pages
    // =========================================================================

    fn quad_pages<C: PageCanvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        // Table order is already subject-first, then ascending generation.
        let targets: Vec<SlotId> = SlotId::all().collect();
        debug!(
            targets = targets.len(),
            pages = targets.len().div_ceil(QUAD_BATCH);
            "Composing record pages"
        );

        for batch in targets.chunks(QUAD_BATCH) {
            self.quad_page(canvas, batch)?;
        }
        Ok(())
    }

    fn quad_page<C: PageCanvas>(&self, canvas: &mut C, batch: &[SlotId]) -> Result<(), C::Error> {
        let page = self.config.page().size();
        let quad = self.config.quad();
        let (center_x, center_y) = (page.width() / 2.0, page.height() / 2.0);

        // Quartering cross.
        canvas.line(
            Point::new(center_x, 0.0),
            Point::new(center_x, page.height()),
            quad.cross_width(),
        )?;
        canvas.line(
            Point::new(0.0, center_y),
            Point::new(page.width(), center_y),
            quad.cross_width(),
        )?;

        // Quadrant origins (bottom-left corners): top-left, top-right,
        // bottom-left, bottom-right.
        let quadrants = [
            Point::new(0.0, center_y),
            Point::new(center_x, center_y),
            Point::new(0.0, 0.0),
            Point::new(center_x, 0.0),
        ];

        for (&id, &origin) in batch.iter().zip(quadrants.iter()) {
            self.quadrant(canvas, id, origin, center_x, center_y)?;
        }

        canvas.end_page()
    }

    fn quadrant<C: PageCanvas>(
        &self,
        canvas: &mut C,
        id: SlotId,
        origin: Point,
        width: f32,
        height: f32,
    ) -> Result<(), C::Error> {
        let fonts = self.config.font();
        let quad = self.config.quad();
        let name = self.record.display_name(id);

        // Watermark tiling, drawn first so the foreground overlays it.
        let unit = format!("{name}　");
        let unit_width = canvas.measure(&unit, fonts.watermark_size()).max(1.0);
        let repeats = (width / unit_width).ceil() as usize;
        let row = unit.repeat(repeats.max(1));
        let mut y = origin.y() + height;
        while y > origin.y() {
            canvas.text(
                Point::new(origin.x(), y),
                &row,
                fonts.watermark_size(),
                TextMode::Fill,
                Ink::Background,
            )?;
            y -= quad.watermark_step();
        }

        // Centered name with the same attribute decorations as the tree.
        let attrs = self.record.attributes(id.slot().label());
        let size = fonts.quad_name_size();
        let name_width = canvas.measure(name, size);
        let center = origin.offset(width / 2.0, height / 2.0);
        let start_x = center.x() - name_width / 2.0;

        let mode = if attrs.priority() {
            TextMode::Stroke {
                width: quad.name_stroke_width(),
            }
        } else {
            TextMode::Fill
        };
        canvas.text(
            Point::new(start_x, center.y()),
            name,
            size,
            mode,
            Ink::Foreground,
        )?;

        if attrs.guardian() {
            let underline_y = center.y() - size * quad.underline_drop();
            canvas.line(
                Point::new(start_x, underline_y),
                Point::new(start_x + name_width, underline_y),
                quad.underline_width(),
            )?;
        }
        Ok(())
    }

    // =========================================================================
    // Summary page
    // =========================================================================

    fn summary_page<C: PageCanvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let page = self.config.page().size();
        let summary = self.config.summary();
        let x_base = summary.left_margin();
        let mut y = page.height() - summary.top_margin();

        canvas.text(
            Point::new(x_base, y),
            SUMMARY_TITLE,
            summary.title_size(),
            TextMode::Fill,
            Ink::Foreground,
        )?;
        y -= summary.title_drop();

        for (heading, entries) in [
            (HEADING_GUARDIANS, self.record.guardians()),
            (HEADING_PRIORITIES, self.record.priorities()),
            (HEADING_CONTRACTS, self.record.contracts()),
        ] {
            y = self.summary_section(canvas, heading, entries, x_base, y)?;
        }

        canvas.end_page()
    }

    /// Renders one headed, bulleted list with multi-column overflow and
    /// returns the y cursor for the following section.
    fn summary_section<C: PageCanvas>(
        &self,
        canvas: &mut C,
        heading: &str,
        entries: &[String],
        x_base: f32,
        y: f32,
    ) -> Result<f32, C::Error> {
        let summary = self.config.summary();

        canvas.text(
            Point::new(x_base, y),
            heading,
            summary.heading_size(),
            TextMode::Fill,
            Ink::Foreground,
        )?;
        let column_top = y - summary.heading_drop();

        for (i, entry) in entries.iter().enumerate() {
            let column = i / summary.column_rows();
            let row = i % summary.column_rows();
            canvas.text(
                Point::new(
                    x_base + column as f32 * summary.column_offset(),
                    column_top - row as f32 * summary.entry_step(),
                ),
                &format!("・{entry}"),
                summary.entry_size(),
                TextMode::Fill,
                Ink::Foreground,
            )?;
        }

        // The first column's extent decides where the next section starts.
        let first_column_rows = entries.len().min(summary.column_rows());
        Ok(column_top - first_column_rows as f32 * summary.entry_step() - summary.section_gap())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::export::trace::{Instruction, TraceCanvas};

    fn compose(record: &ChartRecord) -> TraceCanvas {
        let config = ChartConfig::default();
        let layout = TreeLayout::resolve(&config);
        let mut canvas = TraceCanvas::new();
        PageComposer::new(&config, record, &layout)
            .render(&mut canvas)
            .unwrap();
        canvas
    }

    fn is_foreground_text(instruction: &Instruction) -> bool {
        matches!(
            instruction,
            Instruction::Text {
                ink: Ink::Foreground,
                ..
            }
        )
    }

    #[test]
    fn test_document_has_ten_pages() {
        let canvas = compose(&ChartRecord::new());
        // 1 tree + ceil(31 / 4) record pages + 1 summary.
        assert_eq!(canvas.pages().len(), 10);
    }

    #[test]
    fn test_tree_page_starts_with_legend() {
        let canvas = compose(&ChartRecord::new());
        let tree_page = canvas.pages()[0];

        let Instruction::Text { content, size, .. } = &tree_page[0] else {
            panic!("expected legend text first, got {:?}", tree_page[0]);
        };
        assert_eq!(content, LEGEND_PRIORITY);
        assert_approx_eq!(f32, *size, 10.0);

        let Instruction::Text { content, .. } = &tree_page[1] else {
            panic!("expected second legend caption");
        };
        assert_eq!(content, LEGEND_GUARDIAN);
    }

    #[test]
    fn test_tree_page_shapes_match_genders() {
        let canvas = compose(&ChartRecord::new());
        let tree_page = canvas.pages()[0];

        let rects = tree_page
            .iter()
            .filter(|i| matches!(i, Instruction::Rect { .. }))
            .count();
        let ellipses = tree_page
            .iter()
            .filter(|i| matches!(i, Instruction::Ellipse { .. }))
            .count();
        // 16 male slots (self is male), 15 female.
        assert_eq!(rects, 16);
        assert_eq!(ellipses, 15);
    }

    #[test]
    fn test_tree_page_has_one_bracket_per_couple() {
        let canvas = compose(&ChartRecord::new());
        let lines = canvas.pages()[0]
            .iter()
            .filter(|i| matches!(i, Instruction::Line { .. }))
            .count();
        // 15 couples, 4 segments each; no guardian rules in an empty record.
        assert_eq!(lines, 60);
    }

    #[test]
    fn test_record_pages_batch_four_up() {
        let canvas = compose(&ChartRecord::new());

        for (index, page) in canvas.pages()[1..9].iter().enumerate() {
            let crosses = page
                .iter()
                .filter(|i| matches!(i, Instruction::Line { .. }))
                .count();
            assert!(crosses >= 2, "record page {index} is missing its cross");

            let names = page.iter().filter(|i| is_foreground_text(i)).count();
            let expected = if index == 7 { 3 } else { 4 };
            assert_eq!(names, expected, "record page {index}");
        }
    }

    #[test]
    fn test_watermark_precedes_quadrant_name() {
        let canvas = compose(&ChartRecord::new());
        let page = canvas.pages()[1];

        let first_background = page.iter().position(|i| {
            matches!(
                i,
                Instruction::Text {
                    ink: Ink::Background,
                    ..
                }
            )
        });
        let first_foreground = page.iter().position(is_foreground_text);
        assert!(first_background.unwrap() < first_foreground.unwrap());
    }

    #[test]
    fn test_watermark_fills_quadrant_height() {
        let canvas = compose(&ChartRecord::new());
        let config = ChartConfig::default();
        let quadrant_height = config.page().size().height() / 2.0;
        let expected_rows = (quadrant_height / config.quad().watermark_step()).ceil() as usize;

        let rows = canvas.pages()[1]
            .iter()
            .filter(|i| {
                matches!(
                    i,
                    Instruction::Text {
                        ink: Ink::Background,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(rows, expected_rows * 4);
    }

    #[test]
    fn test_priority_name_is_stroked_on_tree_and_record_pages() {
        let mut record = ChartRecord::new();
        record.push_priority("父".to_string());
        let canvas = compose(&record);

        let stroked_glyphs = canvas.pages()[0]
            .iter()
            .filter(|i| matches!(i, Instruction::Text { mode: TextMode::Stroke { .. }, .. }))
            .count();
        // The label 父 is one stacked glyph.
        assert_eq!(stroked_glyphs, 1);

        let stroked_names: Vec<_> = canvas.pages()[1..9]
            .iter()
            .flat_map(|page| page.iter())
            .filter_map(|i| match i {
                Instruction::Text {
                    content,
                    mode: TextMode::Stroke { .. },
                    ..
                } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(stroked_names, ["父"]);
    }

    #[test]
    fn test_guardian_gets_side_rule_and_underline() {
        let mut record = ChartRecord::new();
        record.push_guardian("母".to_string());
        let canvas = compose(&record);

        // One extra line on the tree page for the side rule.
        let tree_lines = canvas.pages()[0]
            .iter()
            .filter(|i| matches!(i, Instruction::Line { .. }))
            .count();
        assert_eq!(tree_lines, 61);

        // 母 is the third record-page target, so its underline lands on the
        // first record page alongside the two cross lines.
        let record_lines = canvas.pages()[1]
            .iter()
            .filter(|i| matches!(i, Instruction::Line { .. }))
            .count();
        assert_eq!(record_lines, 3);
    }

    #[test]
    fn test_summary_page_sections_and_headings() {
        let mut record = ChartRecord::new();
        record.push_guardian("父の父".to_string());
        record.push_contract("自己犠牲".to_string());
        let canvas = compose(&record);
        let summary = canvas.pages()[9];

        let texts: Vec<_> = summary
            .iter()
            .filter_map(|i| match i {
                Instruction::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            [
                SUMMARY_TITLE,
                HEADING_GUARDIANS,
                "・父の父",
                HEADING_PRIORITIES,
                HEADING_CONTRACTS,
                "・自己犠牲",
            ]
        );
    }

    #[test]
    fn test_summary_overflow_starts_new_column() {
        let mut record = ChartRecord::new();
        for i in 0..25 {
            record.push_guardian(format!("entry{i}"));
        }
        let canvas = compose(&record);
        let config = ChartConfig::default();
        let x_base = config.summary().left_margin();

        let entry_xs: Vec<f32> = canvas.pages()[9]
            .iter()
            .filter_map(|i| match i {
                Instruction::Text { origin, content, .. } if content.starts_with('・') => {
                    Some(origin.x())
                }
                _ => None,
            })
            .collect();
        assert_eq!(entry_xs.len(), 25);

        // 12 rows per column: entries 0-11 in the first, 12-23 in the
        // second, 24 alone in the third.
        assert_approx_eq!(f32, entry_xs[0], x_base);
        assert_approx_eq!(f32, entry_xs[11], x_base);
        assert_approx_eq!(f32, entry_xs[12], x_base + config.summary().column_offset());
        assert_approx_eq!(
            f32,
            entry_xs[24],
            x_base + 2.0 * config.summary().column_offset()
        );

        // Overflow resets the vertical cursor to the column top.
        let entry_ys: Vec<f32> = canvas.pages()[9]
            .iter()
            .filter_map(|i| match i {
                Instruction::Text { origin, content, .. } if content.starts_with('・') => {
                    Some(origin.y())
                }
                _ => None,
            })
            .collect();
        assert_approx_eq!(f32, entry_ys[12], entry_ys[0]);
        assert!(entry_ys[11] < entry_ys[0]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut record = ChartRecord::new();
        record.set_name(SlotId::SELF, "山田太郎".to_string());
        record.push_guardian("父の父".to_string());
        record.push_priority("母".to_string());

        let first = compose(&record);
        let second = compose(&record);
        assert_eq!(first.instructions(), second.instructions());
    }
}
