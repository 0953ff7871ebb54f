//! # Deed Traverse
//!
//! Turns ordered survey calls into plan coordinates, closure diagnostics and
//! CAD/GIS export payloads.
//!
//! ## Architecture
//!
//! ```text
//! Calls (deed-parser)
//!     │
//!     ├──> Traverse: POB at (0,0), one point per placeable bearing/distance call
//!     │    dx = d·sin(az), dy = d·cos(az); coordinates kept to 0.001 ft
//!     │
//!     ├──> Closure: misclosure vector, bearing, 1:N precision, ppm,
//!     │    shoelace area, perimeter (needs 3+ points)
//!     │
//!     └──> Exports: DXF, CSV, ESRI traverse, AutoCAD script, KML
//! ```
//!
//! Everything here is a pure function of its input; nothing is shared between runs.
//!
//! ## Example
//!
//! ```rust
//! use deed_parser::CallParser;
//! use deed_traverse::plot;
//!
//! let calls = CallParser::default().parse(
//!     "thence North 0° East 100.00 feet; thence South 90° East 100.00 feet; \
//!      thence South 0° West 100.00 feet; thence North 90° West 100.00 feet",
//! );
//!
//! let result = plot(&calls);
//! assert_eq!(result.coordinates.len(), 5);
//! assert!(result.closure.is_closed());
//! ```

mod closure;
mod engine;
mod error;
mod export;
mod transform;
mod types;
mod validate;

pub use closure::{
    analyze_closure, closure_status, perimeter, polygon_area, precision_ratio, signed_area,
    CLOSURE_TOLERANCE_FEET, MIN_CLOSURE_POINTS, SQ_FT_PER_ACRE,
};
pub use engine::{compute_traverse, plot, Traverse};
pub use error::{Result, TraverseError};
pub use export::{
    autocad_script, coordinates_csv, dxf, esri_traverse, export_by_key, kml, ExportFormat,
    Exports,
};
pub use transform::{
    transform_coordinates, Transformation, TransformedPoint, DEFAULT_SOURCE_SYSTEM,
    DEFAULT_TARGET_SYSTEM, PASS_THROUGH_METHOD,
};
pub use types::{ClosureResult, ClosureStatus, PlotResult, Point, SkipReason, SkippedCall, POB_LABEL};
pub use validate::{validate_plot, IssueKind, PlotValidation, ValidationIssue, MAX_CLOSURE_ERROR_PPM};
