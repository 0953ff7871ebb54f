//! # Deed Filter
//!
//! Isolates the metes and bounds paragraphs of a deed from the legal,
//! recording and restriction prose around them.
//!
//! ## Architecture
//!
//! ```text
//! Deed text
//!     │
//!     ├──> Section analysis (blank-line paragraphs)
//!     │    ├─> weighted keyword hits (strong 3 / medium 2 / weak 1)
//!     │    ├─> surveying pattern bonus (3 per distinct pattern)
//!     │    └─> trigger phrases force `boundary`
//!     │
//!     ├──> Strategy chain (first success wins)
//!     │    ├─> AiRefine   rule-based output refined by the AI collaborator
//!     │    ├─> Ai         raw text through the AI collaborator
//!     │    ├─> RuleBased  boundary-like paragraphs above the relevance threshold
//!     │    └─> Passthrough
//!     │
//!     └──> Post-processing: sentence dedupe, spacing, THENCE/BEGINNING,
//!          completeness repair
//! ```
//!
//! The AI collaborator is injected as a [`BoundaryExtractor`]; every failure,
//! timeout or low-quality answer falls back to the deterministic path.
//!
//! ## Example
//!
//! ```rust
//! use deed_filter::{DeedFilter, FilterMethod};
//!
//! let deed = "The grantor conveys to the grantee for ten dollars.\n\n\
//!             BEGINNING at an iron pin; thence N 45° E 100 feet to a stake.";
//!
//! let result = DeedFilter::default().filter_rule_based(deed);
//! assert_eq!(result.method_used, FilterMethod::RuleBased);
//! assert!(result.filtered_text.starts_with("BEGINNING"));
//! ```

mod ai;
mod config;
mod error;
mod filter;
mod indicators;
mod postprocess;
mod rule_based;
mod section;
mod types;

pub use ai::{build_prompt, extract_with, validate_output, BoundaryExtractor};
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use filter::{DeedFilter, Strategy};
pub use indicators::{count_calls, Tier};
pub use postprocess::{clean_formatting, dedupe_sentences, ensure_completeness};
pub use rule_based::rule_based_filter;
pub use section::{analyze_sections, relevance_score, SectionType, TextSection};
pub use types::{FilterMethod, FilterMode, FilterOutput, FilterResult, FoundKind, SectionFound};
