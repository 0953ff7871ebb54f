use crate::closure::MIN_CLOSURE_POINTS;
use crate::types::{ClosureStatus, PlotResult, SkipReason};
use serde::{Deserialize, Serialize};

/// Closure error above this is worse than 1:200
pub const MAX_CLOSURE_ERROR_PPM: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Closure,
    Precision,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotValidation {
    pub is_valid: bool,
    pub warnings: Vec<ValidationIssue>,
    pub errors: Vec<ValidationIssue>,
    pub suggestions: Vec<String>,
}

/// Quality checks over a finished plot
#[must_use]
pub fn validate_plot(plot: &PlotResult) -> PlotValidation {
    let mut validation = PlotValidation {
        is_valid: true,
        ..Default::default()
    };

    if let ClosureStatus::Analyzed(closure) = &plot.closure {
        if !closure.is_closed {
            validation.warnings.push(ValidationIssue::new(
                IssueKind::Closure,
                format!(
                    "Plot does not close. Closure distance: {:.3} feet",
                    closure.closure_distance_feet
                ),
            ));
        }
        if closure.closure_error_ppm > MAX_CLOSURE_ERROR_PPM {
            validation.warnings.push(ValidationIssue::new(
                IssueKind::Precision,
                format!("Low precision: {}", closure.precision_ratio),
            ));
        }
    }

    if plot.coordinates.len() < MIN_CLOSURE_POINTS {
        validation.errors.push(ValidationIssue::new(
            IssueKind::InsufficientData,
            "Insufficient coordinate points for a valid plot",
        ));
        validation.is_valid = false;
    }

    let unconverted = plot
        .skipped
        .iter()
        .filter(|s| s.reason == SkipReason::NoAzimuth)
        .count();
    if unconverted > 0 {
        validation.suggestions.push(format!(
            "{unconverted} bearing(s) could not be converted; check them against the source deed"
        ));
    }

    validation
}
