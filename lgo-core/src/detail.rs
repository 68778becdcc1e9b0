//! Local-authority detail table shaping.

use crate::models::LaOutcomeRow;
use crate::percentile::{percentile_badge, PercentileBadge};
use serde::Serialize;

/// Aggregate disaggregation level. Rows at any other level are breakdowns.
pub const TOTAL_LEVEL: &str = "Total";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub measure: String,
    pub value: String,
    pub national: Option<PercentileBadge>,
    pub regional: Option<PercentileBadge>,
    pub direction: String,
}

/// Is this row the aggregate figure?
///
/// Case-insensitive match on "Total". A missing or blank level also counts,
/// since aggregate-only responses omit the column.
pub fn is_total_level(level: Option<&str>) -> bool {
    match level.map(str::trim) {
        None | Some("") => true,
        Some(l) => l.eq_ignore_ascii_case(TOTAL_LEVEL),
    }
}

/// Proportions render as a rounded percentage, everything else with two
/// decimals.
pub fn format_value(description: &str, value: f64) -> String {
    let is_proportion = description
        .trim_start()
        .get(..10)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("proportion"));
    if is_proportion {
        // `+ 0.0` turns -0 into 0
        format!("{}%", value.round() + 0.0)
    } else {
        format!("{:.2}", value)
    }
}

pub fn build_detail_rows(rows: &[LaOutcomeRow]) -> Vec<DetailRow> {
    rows.iter()
        .filter(|r| is_total_level(r.disaggregation_level.as_deref()))
        .map(|r| {
            let direction = r.direction();
            DetailRow {
                measure: r.description.clone(),
                value: format_value(&r.description, r.value),
                national: r
                    .national_percentile()
                    .map(|p| percentile_badge(p, direction)),
                regional: r.percentile_regional.map(|p| percentile_badge(p, direction)),
                direction: direction.label().to_string(),
            }
        })
        .collect()
}

/// Whether any row carries a regional percentile (controls the extra column).
pub fn has_regional_column(rows: &[DetailRow]) -> bool {
    rows.iter().any(|r| r.regional.is_some())
}
