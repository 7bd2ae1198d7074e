//! Kakeizu - a five-generation ancestral chart generator.
//!
//! Parsing, layout, and page composition for kakeizu documents: a
//! fixed 31-slot ancestor tree (self plus four complete generations),
//! built from a small line-oriented input format and rendered as a
//! ten-page document (one tree page, eight four-up record pages, one
//! summary page).

pub mod compose;
pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use kakeizu_core::{canvas, geometry, matcher, record, schema};

pub use error::ChartError;

use log::{debug, info, trace};

use kakeizu_core::{canvas::PageCanvas, record::ChartRecord};

use compose::PageComposer;
use config::ChartConfig;
use layout::TreeLayout;

/// Builder for parsing and rendering ancestral charts.
///
/// # Examples
///
/// ```rust,no_run
/// use kakeizu::{ChartBuilder, config::ChartConfig, export::trace::TraceCanvas};
///
/// let source = "本人 = 山田太郎\n◎守護\n・父の父\n";
///
/// let builder = ChartBuilder::new(ChartConfig::default());
/// let record = builder.parse(source);
///
/// let mut canvas = TraceCanvas::new();
/// builder.render(&record, &mut canvas).expect("failed to render");
/// ```
#[derive(Default)]
pub struct ChartBuilder {
    config: ChartConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Parse source text into a chart record.
    ///
    /// Parsing is total: malformed lines are skipped or preserved as
    /// unknown entries, never rejected, so this cannot fail.
    pub fn parse(&self, source: &str) -> ChartRecord {
        info!("Parsing chart input");
        let record = kakeizu_parser::parse(source);
        trace!(record:?; "Parsed record");
        record
    }

    /// Render a chart record as a full document onto the given canvas.
    ///
    /// Resolves all 31 slot positions, then composes the tree page, the
    /// four-up record pages, and the summary page in order.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Canvas`] when the backend fails; no partial
    /// page sequence is recoverable after that point.
    pub fn render<C: PageCanvas>(
        &self,
        record: &ChartRecord,
        canvas: &mut C,
    ) -> Result<(), ChartError> {
        let layout = TreeLayout::resolve(&self.config);
        debug!("Slot positions resolved");

        PageComposer::new(&self.config, record, &layout).render(canvas)
    }
}
