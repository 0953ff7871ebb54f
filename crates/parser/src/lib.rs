//! # Deed Parser
//!
//! Turns boundary text into an ordered list of typed survey calls.
//!
//! ## Architecture
//!
//! ```text
//! Boundary text
//!     │
//!     ├──> Normalization (whitespace, quotes, degree marks)
//!     │
//!     ├──> Clause Splitter (`;`, thence, then, from thence, from said)
//!     │
//!     ├──> Classifier chain, first match wins
//!     │    ├─> curve            (radius / delta / chord)
//!     │    ├─> bearing+distance (bearing, feet, passing + end monuments)
//!     │    ├─> monument         (set / found / unspecified)
//!     │    └─> adjoiner         (lands of, bounded by, ...)
//!     │
//!     └──> Confidence gate (>= 0.5) -> Vec<Call>
//! ```
//!
//! Distances are normalized to feet while parsing; bearings are kept verbatim
//! and only converted into azimuths through [`deed_bearing`].
//!
//! ## Example
//!
//! ```rust
//! use deed_parser::{CallKind, CallParser, ParserConfig};
//!
//! let parser = CallParser::new(ParserConfig::default()).unwrap();
//! let calls = parser.parse("Beginning at an iron pin; thence N45°30'E 125.75 feet to a stake");
//!
//! assert_eq!(calls.len(), 2);
//! assert!(matches!(calls[1].kind, CallKind::BearingDistance { .. }));
//! ```

mod classify;
mod config;
mod error;
mod extract;
mod parser;
mod splitter;
mod types;
mod units;

pub use classify::classify_clause;
pub use config::{ParserConfig, ACCEPTANCE_THRESHOLD};
pub use error::{ParserError, Result};
pub use extract::{extract_bearing, extract_monument, extract_passing_monuments, parse_distance};
pub use parser::{CallParser, ParseOutput};
pub use splitter::{normalize_text, split_clauses};
pub use types::{Call, CallKind, CallSummary, CallType, MonumentAction};
pub use units::{Distance, LengthUnit};
