//! Configuration types for chart rendering.
//!
//! All dimensional values are in PostScript points; the defaults reproduce
//! the chart's canonical A4-landscape metrics. Every section implements
//! [`serde::Deserialize`] with container-level defaults, so a TOML file may
//! override any subset of fields.
//!
//! # Example
//!
//! ```
//! # use kakeizu::config::ChartConfig;
//! let config = ChartConfig::default();
//! assert!(config.page().size().width() > config.page().size().height());
//! ```

use serde::Deserialize;

use kakeizu_core::geometry::{Insets, MM, Size};

/// Top-level chart configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartConfig {
    /// Page geometry.
    #[serde(default)]
    page: PageConfig,

    /// Font family and sizes.
    #[serde(default)]
    font: FontConfig,

    /// Tree-page layout constants.
    #[serde(default)]
    tree: TreeConfig,

    /// Four-up record page constants.
    #[serde(default)]
    quad: QuadConfig,

    /// Summary page constants.
    #[serde(default)]
    summary: SummaryConfig,
}

impl ChartConfig {
    /// Returns the page configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Returns the font configuration.
    pub fn font(&self) -> &FontConfig {
        &self.font
    }

    /// Returns the tree-page configuration.
    pub fn tree(&self) -> &TreeConfig {
        &self.tree
    }

    /// Returns the four-up page configuration.
    pub fn quad(&self) -> &QuadConfig {
        &self.quad
    }

    /// Returns the summary-page configuration.
    pub fn summary(&self) -> &SummaryConfig {
        &self.summary
    }
}

/// Page dimensions. Defaults to A4 landscape.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    width: f32,
    height: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 841.89,
            height: 595.28,
        }
    }
}

impl PageConfig {
    /// Returns the page size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Font family and the fixed sizes used across the three page types.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    family: String,
    tree_size: f32,
    legend_size: f32,
    quad_name_size: f32,
    watermark_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "IPAMincho".to_string(),
            tree_size: 7.5,
            legend_size: 10.0,
            quad_name_size: 36.0,
            watermark_size: 10.0,
        }
    }
}

impl FontConfig {
    /// Returns the font family name the backend must have registered.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the node-name size on the tree page.
    pub fn tree_size(&self) -> f32 {
        self.tree_size
    }

    /// Returns the legend caption size on the tree page.
    pub fn legend_size(&self) -> f32 {
        self.legend_size
    }

    /// Returns the large centered-name size on four-up pages.
    pub fn quad_name_size(&self) -> f32 {
        self.quad_name_size
    }

    /// Returns the watermark tiling size on four-up pages.
    pub fn watermark_size(&self) -> f32 {
        self.watermark_size
    }
}

/// Layout constants for the tree page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    side_margin: f32,
    top_margin: f32,
    bottom_margin: f32,
    box_width: f32,
    box_height: f32,
    couple_spacing: f32,
    bracket_gap: f32,
    line_width: f32,
    rule_width: f32,
    name_stroke_width: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            side_margin: 15.0 * MM,
            top_margin: 40.0 * MM,
            bottom_margin: 25.0 * MM,
            box_width: 8.0 * MM,
            box_height: 24.0 * MM,
            couple_spacing: 14.0 * MM,
            bracket_gap: 5.0 * MM,
            line_width: 0.6,
            rule_width: 0.5,
            name_stroke_width: 0.5,
        }
    }
}

impl TreeConfig {
    /// Returns the chart margins (top, right, bottom, left).
    pub fn margins(&self) -> Insets {
        Insets::new(
            self.top_margin,
            self.side_margin,
            self.bottom_margin,
            self.side_margin,
        )
    }

    /// Returns the node box size.
    pub fn box_size(&self) -> Size {
        Size::new(self.box_width, self.box_height)
    }

    /// Returns the fixed horizontal distance between the members of a
    /// generation-4 couple.
    pub fn couple_spacing(&self) -> f32 {
        self.couple_spacing
    }

    /// Returns the vertical drop from a parent's node bottom to the
    /// connector bar.
    pub fn bracket_gap(&self) -> f32 {
        self.bracket_gap
    }

    /// Returns the stroke width of node outlines and connectors.
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Returns the stroke width of the guardian side rule.
    pub fn rule_width(&self) -> f32 {
        self.rule_width
    }

    /// Returns the outline width of priority-matched node names.
    pub fn name_stroke_width(&self) -> f32 {
        self.name_stroke_width
    }
}

/// Layout constants for the four-up record pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuadConfig {
    cross_width: f32,
    name_stroke_width: f32,
    underline_width: f32,
    underline_drop: f32,
    watermark_step: f32,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            cross_width: 1.5,
            name_stroke_width: 1.5,
            underline_width: 1.2,
            underline_drop: 0.25,
            watermark_step: 12.0,
        }
    }
}

impl QuadConfig {
    /// Returns the stroke width of the quartering cross.
    pub fn cross_width(&self) -> f32 {
        self.cross_width
    }

    /// Returns the outline width of priority-matched names.
    pub fn name_stroke_width(&self) -> f32 {
        self.name_stroke_width
    }

    /// Returns the stroke width of the guardian underline.
    pub fn underline_width(&self) -> f32 {
        self.underline_width
    }

    /// Returns the underline offset below the baseline, as a fraction of
    /// the name font size.
    pub fn underline_drop(&self) -> f32 {
        self.underline_drop
    }

    /// Returns the vertical step between watermark rows.
    pub fn watermark_step(&self) -> f32 {
        self.watermark_step
    }
}

/// Layout constants for the summary page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    left_margin: f32,
    top_margin: f32,
    title_size: f32,
    title_drop: f32,
    heading_size: f32,
    heading_drop: f32,
    entry_size: f32,
    entry_step: f32,
    section_gap: f32,
    column_rows: usize,
    column_offset: f32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            left_margin: 30.0 * MM,
            top_margin: 40.0 * MM,
            title_size: 14.0,
            title_drop: 15.0 * MM,
            heading_size: 12.0,
            heading_drop: 8.0 * MM,
            entry_size: 10.0,
            entry_step: 6.0 * MM,
            section_gap: 10.0 * MM,
            column_rows: 12,
            column_offset: 70.0 * MM,
        }
    }
}

impl SummaryConfig {
    /// Returns the left text margin.
    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    /// Returns the distance from the page top to the title baseline.
    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    /// Returns the title font size.
    pub fn title_size(&self) -> f32 {
        self.title_size
    }

    /// Returns the vertical drop from the title to the first heading.
    pub fn title_drop(&self) -> f32 {
        self.title_drop
    }

    /// Returns the section-heading font size.
    pub fn heading_size(&self) -> f32 {
        self.heading_size
    }

    /// Returns the vertical drop from a heading to its first entry.
    pub fn heading_drop(&self) -> f32 {
        self.heading_drop
    }

    /// Returns the list-entry font size.
    pub fn entry_size(&self) -> f32 {
        self.entry_size
    }

    /// Returns the vertical step between list entries.
    pub fn entry_step(&self) -> f32 {
        self.entry_step
    }

    /// Returns the vertical gap between sections.
    pub fn section_gap(&self) -> f32 {
        self.section_gap
    }

    /// Returns the maximum entries per column before overflowing right.
    pub fn column_rows(&self) -> usize {
        self.column_rows
    }

    /// Returns the horizontal advance between overflow columns.
    pub fn column_offset(&self) -> f32 {
        self.column_offset
    }
}
