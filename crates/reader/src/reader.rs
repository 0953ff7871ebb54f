use crate::config::ReaderConfig;
use crate::error::Result;
use deed_filter::{BoundaryExtractor, DeedFilter, FilterMode, FilterResult};
use deed_parser::{CallParser, ParseOutput};
use deed_traverse::{plot, validate_plot, PlotResult, PlotValidation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Full pipeline output for one deed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeedReport {
    pub filter: FilterResult,
    pub parse: ParseOutput,
    pub plot: PlotResult,
    pub validation: PlotValidation,
}

/// Filter, parse and plot behind one handle.
///
/// Holds no per-run state; one reader can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct DeedReader {
    filter: DeedFilter,
    parser: CallParser,
    mode: FilterMode,
}

impl DeedReader {
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            filter: DeedFilter::new(config.filter)?,
            parser: CallParser::new(config.parser)?,
            mode: config.filter_mode,
        })
    }

    /// Attach the AI collaborator used by the `ai` and `hybrid` filter modes
    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn BoundaryExtractor>) -> Self {
        self.filter = self.filter.with_extractor(extractor);
        self
    }

    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Relevance filter in the configured mode
    pub async fn filter(&self, text: &str) -> FilterResult {
        self.filter.filter(text, self.mode).await
    }

    pub async fn filter_with_mode(&self, text: &str, mode: FilterMode) -> FilterResult {
        self.filter.filter(text, mode).await
    }

    /// Parse calls directly, without filtering
    #[must_use]
    pub fn parse(&self, text: &str) -> ParseOutput {
        self.parser.parse_with_summary(text)
    }

    /// Parse and plot directly, without filtering
    #[must_use]
    pub fn plot(&self, text: &str) -> PlotResult {
        plot(&self.parser.parse(text))
    }

    /// Filter, then parse and plot the filtered text
    pub async fn read(&self, text: &str) -> DeedReport {
        let filter = self.filter(text).await;
        self.finish(filter)
    }

    /// [`DeedReader::read`] using only the deterministic filter
    #[must_use]
    pub fn read_rule_based(&self, text: &str) -> DeedReport {
        let filter = self.filter.filter_rule_based(text);
        self.finish(filter)
    }

    fn finish(&self, filter: FilterResult) -> DeedReport {
        let parse = self.parser.parse_with_summary(&filter.filtered_text);
        let plot = plot(&parse.calls);
        let validation = validate_plot(&plot);

        log::info!(
            "deed read: {} calls, {} points, closed: {}",
            parse.summary.total_calls,
            plot.coordinates.len(),
            plot.closure.is_closed()
        );

        DeedReport {
            filter,
            parse,
            plot,
            validation,
        }
    }
}
