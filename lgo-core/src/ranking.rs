//! Ranking chart shaping ("Pareto" view).
//!
//! Geographies are ranked by value, highest first. This is a plain
//! descending bar chart, not a cumulative-frequency Pareto chart.

use crate::models::ParetoRow;
use crate::percentile::Rgb;
use serde::Serialize;
use std::cmp::Ordering;

pub const HIGHLIGHT_COLOR: Rgb = Rgb(255, 99, 132);
pub const HIGHLIGHT_ALPHA: f32 = 0.8;
pub const BAR_COLOR: Rgb = Rgb(54, 162, 235);
pub const BAR_ALPHA: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedBar {
    pub label: String,
    pub value: f64,
    pub highlighted: bool,
}

/// Everything the ranking chart and the highlight selector need.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedChart {
    pub bars: Vec<RankedBar>,
    /// Distinct geography names, sorted for the highlight dropdown.
    pub highlight_candidates: Vec<String>,
    /// The previous highlight if it survived, else `None`.
    pub highlight: Option<String>,
}

/// JSON shape consumed by `renderRankingChart` in `ranking-chart.js`.
#[derive(Debug, Serialize)]
struct BarDatum<'a> {
    label: &'a str,
    value: f64,
    color: String,
}

impl RankedChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }

    /// Serialize bars with their CSS colors for the D3 renderer.
    pub fn to_chart_json(&self) -> String {
        let data: Vec<BarDatum> = self
            .bars
            .iter()
            .map(|b| BarDatum {
                label: &b.label,
                value: b.value,
                color: if b.highlighted {
                    HIGHLIGHT_COLOR.to_css_alpha(HIGHLIGHT_ALPHA)
                } else {
                    BAR_COLOR.to_css_alpha(BAR_ALPHA)
                },
            })
            .collect();
        serde_json::to_string(&data).unwrap_or_default()
    }
}

/// Rank rows descending by value and resolve the highlight against the new
/// result set.
pub fn rank_rows(rows: &[ParetoRow], previous_highlight: Option<&str>) -> RankedChart {
    let mut sorted: Vec<&ParetoRow> = rows.iter().collect();
    // `sort_by` is stable, so ties keep backend order
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    let highlight_candidates = highlight_candidates(rows);
    let highlight = previous_highlight
        .filter(|h| highlight_candidates.iter().any(|c| c == h))
        .map(str::to_string);

    let bars = sorted
        .into_iter()
        .map(|row| RankedBar {
            label: row.geography.clone(),
            value: row.value,
            highlighted: highlight.as_deref() == Some(row.geography.as_str()),
        })
        .collect();

    RankedChart {
        bars,
        highlight_candidates,
        highlight,
    }
}

/// Distinct geography names, case-insensitive order with a byte-order
/// tie-break so the result is deterministic.
pub fn highlight_candidates(rows: &[ParetoRow]) -> Vec<String> {
    let mut names: Vec<String> = rows.iter().map(|r| r.geography.clone()).collect();
    names.sort_by(|a, b| compare_names(a, b));
    names.dedup();
    names
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, value: f64) -> ParetoRow {
        ParetoRow {
            geography: name.to_string(),
            value,
            percentile: None,
            region: None,
        }
    }

    #[test]
    fn ranks_descending() {
        let rows = vec![row("A", 10.0), row("B", 50.0), row("C", 30.0)];
        let chart = rank_rows(&rows, None);
        assert_eq!(chart.values(), vec![50.0, 30.0, 10.0]);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "C", "A"]);
    }

    #[test]
    fn ties_keep_backend_order() {
        let rows = vec![
            row("First", 20.0),
            row("Top", 99.0),
            row("Second", 20.0),
            row("Third", 20.0),
        ];
        let chart = rank_rows(&rows, None);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn candidates_are_deduplicated_and_sorted_case_insensitively() {
        let rows = vec![
            row("york", 1.0),
            row("Barnsley", 2.0),
            row("Leeds", 3.0),
            row("Barnsley", 4.0),
        ];
        assert_eq!(
            highlight_candidates(&rows),
            vec!["Barnsley".to_string(), "Leeds".to_string(), "york".to_string()]
        );
    }

    #[test]
    fn highlight_survives_when_still_present() {
        let rows = vec![row("Leeds", 3.0), row("York", 5.0)];
        let chart = rank_rows(&rows, Some("Leeds"));
        assert_eq!(chart.highlight.as_deref(), Some("Leeds"));
        let flagged: Vec<_> = chart
            .bars
            .iter()
            .filter(|b| b.highlighted)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(flagged, vec!["Leeds"]);
    }

    #[test]
    fn highlight_resets_when_missing() {
        let rows = vec![row("Leeds", 3.0), row("York", 5.0)];
        let chart = rank_rows(&rows, Some("Hull"));
        assert_eq!(chart.highlight, None);
        assert!(chart.bars.iter().all(|b| !b.highlighted));
    }

    #[test]
    fn chart_json_carries_two_fixed_colors() {
        let rows = vec![row("Leeds", 3.0), row("York", 5.0)];
        let chart = rank_rows(&rows, Some("Leeds"));
        let json: serde_json::Value = serde_json::from_str(&chart.to_chart_json()).unwrap();
        assert_eq!(json[0]["label"], "York");
        assert_eq!(json[0]["color"], "rgba(54, 162, 235, 0.6)");
        assert_eq!(json[1]["label"], "Leeds");
        assert_eq!(json[1]["color"], "rgba(255, 99, 132, 0.8)");
    }

    #[test]
    fn empty_rows_give_empty_chart() {
        let chart = rank_rows(&[], Some("Leeds"));
        assert!(chart.is_empty());
        assert!(chart.highlight_candidates.is_empty());
        assert_eq!(chart.highlight, None);
    }
}
