//! # Deed Reader
//!
//! One entry point from raw deed text to a closed survey traverse.
//!
//! ## Architecture
//!
//! ```text
//! Deed text
//!     │
//!     ├──> deed-filter    relevance filter (rule-based / ai / hybrid)
//!     │
//!     ├──> deed-parser    clauses -> typed calls (confidence >= 0.5)
//!     │        └─> deed-bearing  quadrant bearing -> azimuth
//!     │
//!     └──> deed-traverse  points, closure, area, exports, validation
//! ```
//!
//! ## Example
//!
//! ```rust
//! use deed_reader::DeedReader;
//!
//! let deed = "Beginning at an iron pin, thence North 0° East 100.00 feet, \
//!             thence South 90° East 100.00 feet, thence South 0° West 100.00 feet, \
//!             thence North 90° West 100.00 feet to the point of beginning";
//!
//! let report = DeedReader::default().read_rule_based(deed);
//! assert_eq!(report.plot.coordinates.len(), 5);
//! assert!(report.validation.is_valid);
//! ```

mod config;
mod error;
mod reader;

pub use config::{ReaderConfig, CONFIG_ENV_VAR};
pub use error::{ReaderError, Result};
pub use reader::{DeedReader, DeedReport};

pub use deed_bearing::{to_azimuth, QuadrantBearing};
pub use deed_filter::{
    BoundaryExtractor, FilterConfig, FilterMethod, FilterMode, FilterResult, SectionType,
};
pub use deed_parser::{Call, CallKind, CallParser, CallSummary, CallType, ParseOutput, ParserConfig};
pub use deed_traverse::{
    export_by_key, transform_coordinates, validate_plot, ClosureResult, ClosureStatus,
    ExportFormat, Exports, PlotResult, PlotValidation, Point, Transformation,
    DEFAULT_SOURCE_SYSTEM, DEFAULT_TARGET_SYSTEM,
};
