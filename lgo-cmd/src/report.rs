//! Plain-text and CSV renderings of shaped dashboard data.

use lgo_core::detail::{has_regional_column, DetailRow};
use lgo_core::disaggregation::DisaggregationOptions;
use lgo_core::ranking::RankedChart;
use lgo_core::trend::TrendChart;
use std::fmt::Write as _;
use std::io::Write;

/// Numbered ranking, highest first; the highlighted council is starred.
pub fn format_ranking(chart: &RankedChart) -> String {
    if chart.is_empty() {
        return "No data available for this selection.\n".to_string();
    }
    let width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, bar) in chart.bars.iter().enumerate() {
        let marker = if bar.highlighted { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker}{:>4}  {:<width$}  {:>12.2}",
            idx + 1,
            bar.label,
            bar.value,
        );
    }
    out
}

/// CSV columns: `rank,geography,value,highlighted`
pub fn write_ranking_csv<W: Write>(writer: W, chart: &RankedChart) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["rank", "geography", "value", "highlighted"])?;
    for (idx, bar) in chart.bars.iter().enumerate() {
        wtr.write_record([
            (idx + 1).to_string(),
            bar.label.clone(),
            bar.value.to_string(),
            bar.highlighted.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn format_disaggregations(options: &DisaggregationOptions) -> String {
    let mut out = String::new();
    if !options.enabled {
        let _ = writeln!(out, "(disabled)");
    }
    for entry in &options.entries {
        let is_default = entry.selectable && entry.value == options.selected;
        let _ = writeln!(
            out,
            "{} {}",
            if is_default { "*" } else { " " },
            entry.label
        );
    }
    out
}

pub fn format_detail(rows: &[DetailRow]) -> String {
    if rows.is_empty() {
        return "No data available.\n".to_string();
    }
    let regional = has_regional_column(rows);
    let dash = || "-".to_string();

    let mut out = String::new();
    for row in rows {
        let national = row.national.as_ref().map(|b| b.label.clone()).unwrap_or_else(dash);
        let _ = write!(out, "{:<8} {:>7}  ", row.value, national);
        if regional {
            let reg = row.regional.as_ref().map(|b| b.label.clone()).unwrap_or_else(dash);
            let _ = write!(out, "{:>7}  ", reg);
        }
        let _ = writeln!(out, "{}  ({})", row.measure, row.direction);
    }
    out
}

/// Year-by-series table; gaps print as `-`.
pub fn format_trend(chart: &TrendChart) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<6}", "Year");
    for series in &chart.series {
        let _ = write!(out, "  {:>14}", truncate_label(&series.label, 14));
    }
    out.push('\n');

    for (i, year) in chart.years.iter().enumerate() {
        let _ = write!(out, "{:<6}", year);
        for series in &chart.series {
            match series.values[i] {
                Some(v) => {
                    let _ = write!(out, "  {:>14.2}", v);
                }
                None => {
                    let _ = write!(out, "  {:>14}", "-");
                }
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "y-axis: {:.2} to {:.2}", chart.y_min, chart.y_max);
    out
}

fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        label.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgo_core::models::{ParetoRow, TrendPoint, TrendResponse};
    use lgo_core::ranking::rank_rows;

    fn chart() -> RankedChart {
        let rows = vec![
            ParetoRow {
                geography: "Leeds".to_string(),
                value: 10.0,
                percentile: None,
                region: None,
            },
            ParetoRow {
                geography: "York".to_string(),
                value: 50.0,
                percentile: None,
                region: None,
            },
        ];
        rank_rows(&rows, Some("Leeds"))
    }

    #[test]
    fn ranking_text_is_numbered_and_starred() {
        let text = format_ranking(&chart());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    1  York"));
        assert!(lines[1].starts_with("*   2  Leeds"));
    }

    #[test]
    fn ranking_csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_ranking_csv(&mut buf, &chart()).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(
            csv,
            "rank,geography,value,highlighted\n1,York,50,false\n2,Leeds,10,true\n"
        );
    }

    #[test]
    fn empty_disaggregations_print_disabled_placeholder() {
        let text = format_disaggregations(&DisaggregationOptions::from_categories(Vec::new()));
        assert_eq!(text, "(disabled)\n  No data available\n");
    }

    #[test]
    fn default_disaggregation_is_starred() {
        let text = format_disaggregations(&DisaggregationOptions::from_categories(vec![
            "65+".to_string(),
            "Total".to_string(),
        ]));
        assert_eq!(text, "  All categories\n  65+\n* Total\n");
    }

    #[test]
    fn trend_table_marks_gaps() {
        let resp = TrendResponse {
            england: Some(vec![
                TrendPoint {
                    year: 2019,
                    value: Some(1.0),
                    region: None,
                },
                TrendPoint {
                    year: 2021,
                    value: Some(3.0),
                    region: None,
                },
            ]),
            region: None,
            la: Some(vec![TrendPoint {
                year: 2020,
                value: Some(2.0),
                region: None,
            }]),
        };
        let chart = TrendChart::build(&resp, Some("Leeds")).unwrap();
        let text = format_trend(&chart);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("2020"));
        let cells: Vec<_> = lines[2].split_whitespace().collect();
        assert_eq!(cells, vec!["2020", "-", "2.00"]);
        assert_eq!(lines[4], "y-axis: 0.90 to 3.10");
    }

    #[test]
    fn empty_detail_prints_no_data() {
        assert_eq!(format_detail(&[]), "No data available.\n");
    }
}
