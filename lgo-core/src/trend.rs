//! Trend chart shaping: aligning up to three series on one year axis.

use crate::models::{TrendPoint, TrendResponse};
use crate::percentile::Rgb;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Fraction of the observed range added above and below the data.
pub const Y_PADDING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendScope {
    National,
    Regional,
    Local,
}

impl TrendScope {
    pub fn color(&self) -> Rgb {
        match self {
            TrendScope::National => Rgb(33, 37, 41),
            TrendScope::Regional => Rgb(54, 162, 235),
            TrendScope::Local => Rgb(255, 99, 132),
        }
    }
}

/// One series aligned to the chart's year axis. `None` is a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    pub scope: TrendScope,
    pub label: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChart {
    pub years: Vec<i32>,
    pub series: Vec<AlignedSeries>,
    pub y_min: f64,
    pub y_max: f64,
}

impl TrendChart {
    /// Build the chart from a `/trend-data` body.
    ///
    /// `la_label` names the local-authority line; the regional line takes
    /// its name from the first point's `Region` field when present.
    /// Returns `None` when no series has a single value.
    pub fn build(response: &TrendResponse, la_label: Option<&str>) -> Option<TrendChart> {
        let mut raw: Vec<(TrendScope, String, BTreeMap<i32, Option<f64>>)> = Vec::new();

        if let Some(points) = non_empty_points(&response.england) {
            raw.push((TrendScope::National, "England".to_string(), by_year(points)));
        }
        if let Some(points) = non_empty_points(&response.region) {
            let label = points
                .iter()
                .find_map(|p| p.region.clone())
                .unwrap_or_else(|| "Region".to_string());
            raw.push((TrendScope::Regional, label, by_year(points)));
        }
        if let Some(points) = non_empty_points(&response.la) {
            let label = la_label.unwrap_or("Local authority").to_string();
            raw.push((TrendScope::Local, label, by_year(points)));
        }

        let years: Vec<i32> = raw
            .iter()
            .flat_map(|(_, _, m)| m.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let series: Vec<AlignedSeries> = raw
            .into_iter()
            .map(|(scope, label, by_year)| AlignedSeries {
                scope,
                label,
                color: scope.color().to_css(),
                values: years
                    .iter()
                    .map(|y| by_year.get(y).copied().flatten())
                    .collect(),
            })
            .collect();

        let (y_min, y_max) = y_bounds(&series)?;
        Some(TrendChart {
            years,
            series,
            y_min,
            y_max,
        })
    }

    pub fn series(&self, scope: TrendScope) -> Option<&AlignedSeries> {
        self.series.iter().find(|s| s.scope == scope)
    }

    pub fn to_chart_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn non_empty_points(points: &Option<Vec<TrendPoint>>) -> Option<&[TrendPoint]> {
    points.as_deref().filter(|p| !p.is_empty())
}

/// Later duplicates of a year replace earlier ones.
fn by_year(points: &[TrendPoint]) -> BTreeMap<i32, Option<f64>> {
    points
        .iter()
        .map(|p| (p.year, p.value.filter(|v| v.is_finite())))
        .collect()
}

/// Observed min/max across every series, padded on both ends.
pub fn y_bounds(series: &[AlignedSeries]) -> Option<(f64, f64)> {
    let mut values = series.iter().flat_map(|s| s.values.iter().flatten().copied());
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let range = max - min;
    let pad = if range > 0.0 {
        range * Y_PADDING
    } else if min != 0.0 {
        min.abs() * Y_PADDING
    } else {
        1.0
    };
    Some((min - pad, max + pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(data: &[(i32, Option<f64>)]) -> Option<Vec<TrendPoint>> {
        Some(
            data.iter()
                .map(|(year, value)| TrendPoint {
                    year: *year,
                    value: *value,
                    region: None,
                })
                .collect(),
        )
    }

    #[test]
    fn year_axis_is_sorted_union_with_gaps() {
        let resp = TrendResponse {
            england: points(&[(2019, Some(60.0)), (2021, Some(64.0))]),
            region: None,
            la: points(&[(2020, Some(55.0)), (2021, Some(58.0))]),
        };
        let chart = TrendChart::build(&resp, Some("Leeds")).unwrap();

        assert_eq!(chart.years, vec![2019, 2020, 2021]);
        let national = chart.series(TrendScope::National).unwrap();
        assert_eq!(national.values, vec![Some(60.0), None, Some(64.0)]);
        let local = chart.series(TrendScope::Local).unwrap();
        assert_eq!(local.label, "Leeds");
        assert_eq!(local.values, vec![None, Some(55.0), Some(58.0)]);
        assert!(chart.series(TrendScope::Regional).is_none());
    }

    #[test]
    fn unsorted_input_years_are_ordered() {
        let resp = TrendResponse {
            england: points(&[(2022, Some(3.0)), (2018, Some(1.0)), (2020, Some(2.0))]),
            ..Default::default()
        };
        let chart = TrendChart::build(&resp, None).unwrap();
        assert_eq!(chart.years, vec![2018, 2020, 2022]);
        assert_eq!(
            chart.series[0].values,
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn null_values_are_gaps_not_zeros() {
        let resp = TrendResponse {
            england: points(&[(2019, Some(10.0)), (2020, None), (2021, Some(12.0))]),
            ..Default::default()
        };
        let chart = TrendChart::build(&resp, None).unwrap();
        assert_eq!(chart.series[0].values[1], None);
        assert!(chart.y_min > 9.0, "a zero-filled gap would drag y_min down");
    }

    #[test]
    fn y_bounds_pad_five_percent() {
        let resp = TrendResponse {
            england: points(&[(2019, Some(100.0))]),
            region: points(&[(2019, Some(200.0))]),
            la: None,
        };
        let chart = TrendChart::build(&resp, None).unwrap();
        assert!((chart.y_min - 95.0).abs() < 1e-9);
        assert!((chart.y_max - 205.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_still_gets_padding() {
        let resp = TrendResponse {
            england: points(&[(2019, Some(40.0)), (2020, Some(40.0))]),
            ..Default::default()
        };
        let chart = TrendChart::build(&resp, None).unwrap();
        assert!((chart.y_min - 38.0).abs() < 1e-9);
        assert!((chart.y_max - 42.0).abs() < 1e-9);
    }

    #[test]
    fn region_label_comes_from_points() {
        let resp = TrendResponse {
            region: Some(vec![TrendPoint {
                year: 2020,
                value: Some(1.0),
                region: Some("Yorkshire and The Humber".to_string()),
            }]),
            ..Default::default()
        };
        let chart = TrendChart::build(&resp, None).unwrap();
        assert_eq!(chart.series[0].label, "Yorkshire and The Humber");
    }

    #[test]
    fn no_values_means_no_chart() {
        assert!(TrendChart::build(&TrendResponse::default(), None).is_none());

        let resp = TrendResponse {
            england: Some(Vec::new()),
            la: points(&[(2020, None)]),
            ..Default::default()
        };
        assert!(TrendChart::build(&resp, None).is_none());
    }

    #[test]
    fn chart_json_uses_camel_case_bounds_and_nulls() {
        let resp = TrendResponse {
            england: points(&[(2019, Some(1.0)), (2020, None)]),
            ..Default::default()
        };
        let chart = TrendChart::build(&resp, None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&chart.to_chart_json()).unwrap();
        assert!(json.get("yMin").is_some());
        assert!(json["series"][0]["values"][1].is_null());
        assert_eq!(json["series"][0]["scope"], "national");
    }
}
