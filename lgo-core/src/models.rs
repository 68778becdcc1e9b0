//! Row types returned by the outcomes backend.
//!
//! Field names follow the backend's column headers, so every struct maps
//! them with `#[serde(rename = ...)]`. Rows are immutable once decoded and
//! live only as long as the response they came from.

use serde::{Deserialize, Serialize};

/// Which way a measure improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Parse the backend's free-text direction ("Lower is better", ...).
    ///
    /// Anything that does not mention "lower" counts as higher-is-better,
    /// including a missing value.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.to_lowercase().contains("lower") => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::HigherIsBetter => "Higher is better",
            Direction::LowerIsBetter => "Lower is better",
        }
    }
}

/// One geography's aggregated value for the ranking chart.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ParetoRow {
    #[serde(rename = "Geographical Description")]
    pub geography: String,
    #[serde(rename = "Measure_Value")]
    pub value: f64,
    #[serde(rename = "Percentile", default)]
    pub percentile: Option<f64>,
    #[serde(rename = "Council region", default)]
    pub region: Option<String>,
}

/// One measure observation for a local authority (or England when no
/// authority is chosen).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LaOutcomeRow {
    #[serde(rename = "Geographical Description", default)]
    pub geography: Option<String>,
    #[serde(rename = "Measure Group", default)]
    pub measure_group: Option<String>,
    #[serde(rename = "Measure Group Description")]
    pub description: String,
    #[serde(rename = "Measure_Value")]
    pub value: f64,
    #[serde(rename = "Percentile", default)]
    pub percentile: Option<f64>,
    #[serde(rename = "Percentile_National", default)]
    pub percentile_national: Option<f64>,
    #[serde(rename = "Percentile_Regional", default)]
    pub percentile_regional: Option<f64>,
    #[serde(rename = "Direction", default)]
    pub direction: Option<String>,
    #[serde(rename = "Disaggregation Level", default)]
    pub disaggregation_level: Option<String>,
}

impl LaOutcomeRow {
    /// National percentile, falling back to the older unqualified column.
    pub fn national_percentile(&self) -> Option<f64> {
        self.percentile_national.or(self.percentile)
    }

    pub fn direction(&self) -> Direction {
        Direction::parse(self.direction.as_deref())
    }
}

/// A single (year, value) observation in a trend series.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TrendPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    /// `None` when the backend has the year but no usable value.
    #[serde(rename = "Measure_Value", default)]
    pub value: Option<f64>,
    #[serde(rename = "Region", default)]
    pub region: Option<String>,
}

/// Body of `/trend-data`. Each scope is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TrendResponse {
    #[serde(default)]
    pub england: Option<Vec<TrendPoint>>,
    #[serde(default)]
    pub region: Option<Vec<TrendPoint>>,
    #[serde(default)]
    pub la: Option<Vec<TrendPoint>>,
}

/// Body of `/mistral-summary`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SummaryResponse {
    pub summary: String,
}
