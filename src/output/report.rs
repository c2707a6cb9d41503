use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::date::TimeIncrement;
use crate::domain::{ChartKind, Domain};
use crate::number::FormatTag;
use crate::stats::{DeviationMark, SummaryStatistics};

/// Result of a single command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Domain(DomainReport),
    Increment(IncrementReport),
    Format(FormatReport),
    Label(LabelReport),
    Moe(MoeReport),
    Deviations(DeviationsReport),
    Prepare(PrepareReport),
    ConfigShow(ConfigShowReport),
    ConfigValidate(ConfigValidateReport),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReport {
    pub chart: ChartKind,
    pub format: FormatTag,
    pub clamp_at_zero: bool,
    pub diverging: bool,
    pub domain: Domain,
    /// Condensed tick labels for both ends of the domain.
    pub labels: [String; 2],
    pub summary: SummaryStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncrementReport {
    pub increment: TimeIncrement,
    /// Parsed dates in chart order (`YYYY-MM-DD`).
    pub dates: Vec<String>,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    pub input: String,
    pub format: FormatTag,
    pub condensed: bool,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelReport {
    pub code: String,
    /// `None` when the code is not a recognised time code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment: Option<TimeIncrement>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoeReport {
    pub count: usize,
    pub moe: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationsReport {
    pub mean: f64,
    pub bound: f64,
    pub step: f64,
    pub marks: Vec<DeviationMark>,
}

/// One row of a prepared chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedItem {
    pub description: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moe_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    pub element_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepareReport {
    pub chart: ChartKind,
    pub format: FormatTag,
    /// Items with a numeric value.
    pub count: usize,
    /// Items without a numeric value, left out of the domain.
    pub skipped: usize,
    pub domain: Domain,
    pub diverging: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment: Option<TimeIncrement>,
    /// Time axis in epoch milliseconds, for dated items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_domain: Option<Domain>,
    pub decimal_precision: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregated_moe: Option<f64>,
    pub items: Vec<PreparedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigShowReport {
    /// `None` when built-in defaults are in effect.
    pub source: Option<PathBuf>,
    pub config: Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigValidateReport {
    pub path: PathBuf,
    pub valid: bool,
}
