//! Vocabularies and surveying patterns used to score paragraphs.

use crate::config::FilterConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Indicator strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strong,
    Medium,
    Weak,
}

impl Tier {
    pub(crate) fn weight(self, config: &FilterConfig) -> f64 {
        match self {
            Self::Strong => config.strong_weight,
            Self::Medium => config.medium_weight,
            Self::Weak => config.weak_weight,
        }
    }
}

const BOUNDARY_TERMS: &[(Tier, &[&str])] = &[
    (
        Tier::Strong,
        &[
            "beginning at", "commencing at", "starting at", "point of beginning", "thence",
            "hence", "from thence", "north", "south", "east", "west", "bearing", "degrees",
            "minutes", "seconds", "feet", "chains", "links", "iron pin", "concrete monument",
            "rebar", "stone", "post", "curve", "arc", "radius", "chord", "delta",
        ],
    ),
    (
        Tier::Medium,
        &[
            "corner", "point", "monument", "marker", "boundary", "line", "property line",
            "along", "following", "parallel", "perpendicular", "adjoining", "abutting",
        ],
    ),
    (
        Tier::Weak,
        &[
            "tract", "parcel", "lot", "piece", "containing", "more or less", "acres",
            "described", "bounded",
        ],
    ),
];

const EXCLUSION_TERMS: &[(Tier, &[&str])] = &[
    (
        Tier::Strong,
        &[
            "grantor", "grantee", "convey", "grant", "sell", "purchase", "consideration",
            "dollars", "$", "heirs", "successors", "assigns", "warranty", "quitclaim", "witness",
            "notary", "recorded", "filing", "clerk", "register", "book", "page",
        ],
    ),
    (
        Tier::Medium,
        &[
            "tax", "assessment", "valuation", "easement", "restriction", "covenant", "condition",
            "utility", "right of way",
        ],
    ),
    (
        Tier::Weak,
        &["subject to", "reserving", "excepting", "together with"],
    ),
];

/// Word-bounded, plural-tolerant, whitespace-flexible matcher for one term
fn term_regex(term: &str) -> Regex {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let starts_word = term.chars().next().is_some_and(char::is_alphanumeric);
    let ends_word = term.chars().last().is_some_and(char::is_alphanumeric);

    let pattern = format!(
        "(?i){}{}{}",
        if starts_word { r"\b" } else { "" },
        body,
        if ends_word { r"(?:s|es)?\b" } else { "" },
    );
    Regex::new(&pattern).expect("indicator term regex")
}

fn compile(terms: &[(Tier, &[&str])]) -> Vec<(Tier, Regex)> {
    terms
        .iter()
        .flat_map(|(tier, words)| words.iter().map(move |word| (*tier, term_regex(word))))
        .collect()
}

static BOUNDARY_INDICATORS: Lazy<Vec<(Tier, Regex)>> = Lazy::new(|| compile(BOUNDARY_TERMS));
static EXCLUSION_INDICATORS: Lazy<Vec<(Tier, Regex)>> = Lazy::new(|| compile(EXCLUSION_TERMS));

pub(crate) static BEARING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:north|south|[ns])\s*\d+(?:\.\d+)?\s*(?:°|degrees?\b)")
        .expect("bearing pattern")
});

pub(crate) static DISTANCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+(?:,\d{3})*(?:\.\d+)?\s*(?:feet|foot|ft|chains?|links?|rods?|poles?|yards?|meters?|varas?)\b",
    )
    .expect("distance pattern")
});

/// Surveying evidence; each distinct match earns the pattern bonus once
static SURVEY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let extra = [
        r"(?i)\b(?:thence|hence)\b",
        r"(?i)\b(?:iron\s+(?:pin|rod|pipe)|concrete\s+monument|rebar|stone|stake|monument|marker)s?\b",
        r"(?i)\b(?:curve|radius)\b",
    ];
    let mut patterns = vec![BEARING_PATTERN.clone(), DISTANCE_PATTERN.clone()];
    patterns.extend(extra.iter().map(|p| Regex::new(p).expect("survey pattern")));
    patterns
});

static TRIGGER_PHRASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bmore\s+particularly\s+described\s+as\s+follows\b|\bbounded\s+and\s+described\s+as\s+follows\b|\bmetes\s+and\s+bounds\s+description\b|\b(?:beginning|commencing|starting)\s+at\b",
    )
    .expect("trigger phrase regex")
});

static RECORDING_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:recorded|recording|book|page|clerk|register|filing|instrument\s+no)\b")
        .expect("recording vocabulary")
});

static LEGAL_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:grantors?|grantees?|convey(?:s|ed)?|heirs|assigns|warrant(?:y|s|ed)?|witness(?:eth)?|notary)\b",
    )
    .expect("legal vocabulary")
});

static RESTRICTION_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:tax(?:es)?|assessments?|easements?|restrictions?|covenants?|right\s+of\s+way|utility)\b",
    )
    .expect("restriction vocabulary")
});

static CALL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // bearing followed by a distance with unit
        r"(?i)\b(?:north|south|[ns])\s*\d+[^;\n]{0,60}?\b(?:east|west|[ew])\b\W{0,3}\s*(?:a\s+distance\s+of\s+)?\d+(?:,\d{3})*(?:\.\d+)?\s*(?:feet|ft|chains?|links?|rods?|poles?|yards?|meters?|varas?)\b",
        r"(?i)\bcurve\b[^;]*?\bradius\b[^;]*?\d",
        r"(?i)\bto\s+(?:an?\s+)?(?:iron\s+pin|concrete\s+monument|rebar|stone)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("call pattern"))
    .collect()
});

static BEGINNING_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bbeginning\b").expect("beginning regex"));

static THENCE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bthence\b").expect("thence regex"));

fn weighted_hits(text: &str, indicators: &[(Tier, Regex)], config: &FilterConfig) -> f64 {
    indicators
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(tier, _)| tier.weight(config))
        .sum()
}

pub(crate) fn boundary_hits(text: &str, config: &FilterConfig) -> f64 {
    weighted_hits(text, &BOUNDARY_INDICATORS, config)
}

pub(crate) fn exclusion_hits(text: &str, config: &FilterConfig) -> f64 {
    weighted_hits(text, &EXCLUSION_INDICATORS, config)
}

pub(crate) fn distinct_survey_patterns(text: &str) -> usize {
    SURVEY_PATTERNS.iter().filter(|p| p.is_match(text)).count()
}

pub(crate) fn has_trigger_phrase(text: &str) -> bool {
    TRIGGER_PHRASES.is_match(text)
}

pub(crate) fn is_recording(text: &str) -> bool {
    RECORDING_TERMS.is_match(text)
}

pub(crate) fn is_legal(text: &str) -> bool {
    LEGAL_TERMS.is_match(text)
}

pub(crate) fn is_restriction(text: &str) -> bool {
    RESTRICTION_TERMS.is_match(text)
}

/// Number of survey-call shaped matches in `text`
#[must_use]
pub fn count_calls(text: &str) -> usize {
    CALL_PATTERNS.iter().map(|p| p.find_iter(text).count()).sum()
}

/// Which parts of a complete boundary description are present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Completeness {
    pub beginning: bool,
    pub thence: bool,
    pub distance: bool,
    pub bearing: bool,
}

impl Completeness {
    pub(crate) fn of(text: &str) -> Self {
        Self {
            beginning: BEGINNING_WORD.is_match(text),
            thence: THENCE_WORD.is_match(text),
            distance: DISTANCE_PATTERN.is_match(text),
            bearing: BEARING_PATTERN.is_match(text),
        }
    }

    pub(crate) const fn is_complete(self) -> bool {
        self.beginning && self.thence && self.distance && self.bearing
    }
}
