//! Local-authority detail table.

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::{AppState, WidgetStatus};
use dioxus::prelude::*;
use lgo_core::detail::has_regional_column;
use lgo_core::percentile::PercentileBadge;

/// Detail table for the highlighted local authority (England when none).
/// Rows are already filtered and formatted by `lgo_core::detail`.
#[component]
pub fn DetailTable() -> Element {
    let state = use_context::<AppState>();
    let status = (state.detail_status)();
    let rows = state.detail_rows.read().clone();
    let show_regional = has_regional_column(&rows);

    match status {
        WidgetStatus::Loading => rsx! {
            LoadingSpinner { message: "Loading local authority data...".to_string() }
        },
        WidgetStatus::Failed(message) => rsx! {
            ErrorDisplay { message: message }
        },
        WidgetStatus::Idle => rsx! {},
        WidgetStatus::Empty => rsx! {
            p {
                style: "color: #4B5563; font-size: 14px;",
                "No data available."
            }
        },
        WidgetStatus::Ready => rsx! {
            table {
                style: "min-width: 100%; text-align: left; border-collapse: collapse; border: 1px solid #E5E7EB; margin-top: 24px;",
                thead {
                    style: "background: #F3F4F6;",
                    tr {
                        th { style: "padding: 8px 16px; font-size: 14px;", "Measure" }
                        th { style: "padding: 8px 16px; font-size: 14px;", "Value" }
                        th { style: "padding: 8px 16px; font-size: 14px;", "National Percentile" }
                        if show_regional {
                            th { style: "padding: 8px 16px; font-size: 14px;", "Regional Percentile" }
                        }
                        th { style: "padding: 8px 16px; font-size: 14px;", "Better Direction" }
                    }
                }
                tbody {
                    for (idx, row) in rows.iter().enumerate() {
                        tr {
                            key: "{idx}",
                            style: "border-bottom: 1px solid #E5E7EB;",
                            td { style: "padding: 8px 16px; font-size: 14px;", "{row.measure}" }
                            td { style: "padding: 8px 16px; font-size: 14px;", "{row.value}" }
                            {percentile_cell(row.national.as_ref())}
                            if show_regional {
                                {percentile_cell(row.regional.as_ref())}
                            }
                            td { style: "padding: 8px 16px; font-size: 14px;", "{row.direction}" }
                        }
                    }
                }
            }
        },
    }
}

/// Percentile cell colored on the red/amber/green scale.
fn percentile_cell(badge: Option<&PercentileBadge>) -> Element {
    match badge {
        Some(b) => {
            let style = format!(
                "padding: 8px 16px; font-size: 14px; font-weight: 600; color: #fff; background: {};",
                b.color.to_css()
            );
            rsx! {
                td { style: "{style}", "{b.label}" }
            }
        }
        None => rsx! {
            td { style: "padding: 8px 16px; font-size: 14px; color: #9CA3AF;", "-" }
        },
    }
}
