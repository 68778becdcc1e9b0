//! Local Government Outcomes Dashboard
//!
//! Ranks councils on a chosen outcome measure, plots the measure's trend for
//! England, the region and the highlighted council, and lists every measure
//! for the highlighted council with colored percentile cells.
//!
//! Data flow:
//! 1. `build.rs` copies `measure_groups.csv` and `councils.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds them; on mount they populate the selectors.
//! 3. A measure change refreshes the disaggregation options first. Only once
//!    they are resolved for that measure does the ranking chart fetch
//!    `/pareto-data`.
//! 4. The highlight drives `/la-outcomes` (detail table) and, together with
//!    the measure, `/trend-data`. The trend chart waits on the same
//!    disaggregation gate as the ranking chart.
//!
//! Each fetch takes a ticket from the `DashboardController`; a response that
//! is no longer the latest for its widget is dropped.

use dioxus::prelude::*;
use lgo_chart_ui::api;
use lgo_chart_ui::components::{
    ChartContainer, ChartHeader, DetailTable, DisaggregationSelector, ErrorDisplay,
    HighlightSelector, LoadingSpinner, MeasureSelector, RegionSelector, SummaryPanel,
};
use lgo_chart_ui::controller::{RANKING_CHART_ID, TREND_CHART_ID};
use lgo_chart_ui::js_bridge;
use lgo_chart_ui::state::{AppState, WidgetStatus};
use lgo_core::catalog::Catalog;
use lgo_core::detail::build_detail_rows;
use lgo_core::disaggregation::DisaggregationOptions;
use lgo_core::models::{LaOutcomeRow, ParetoRow, TrendResponse};
use lgo_core::query::{Endpoint, Selection};
use lgo_core::ranking::rank_rows;
use lgo_core::sequence::Widget;
use lgo_core::trend::TrendChart;

/// Measure group descriptions for the measure dropdown.
const MEASURES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/measure_groups.csv"));
/// Councils and their regions.
const COUNCILS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/councils.csv"));

/// Backend base URL; the dashboard is served by the same origin.
const BASE_URL: &str = "";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("lgo-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the catalog on mount
    use_effect(move || {
        match Catalog::from_csv(MEASURES_CSV, COUNCILS_CSV) {
            Ok(catalog) => {
                if let Some(measure) = catalog.default_measure() {
                    state.measure.set(measure.to_string());
                }
                state.catalog.set(catalog);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load measure catalog: {}", e)));
            }
        }
        js_bridge::init_charts();
    });

    use_drop(move || {
        state.controller.write().dispose_all();
    });

    // Measure changed: refresh disaggregation options before anything draws
    use_effect(move || {
        let measure = (state.measure)();
        if measure.is_empty() {
            return;
        }
        let ticket = state.controller.write().begin(Widget::Disaggregation);

        spawn(async move {
            let endpoint = Endpoint::DisaggregationOptions {
                measure: measure.clone(),
            };
            let result = api::fetch_endpoint::<Vec<String>>(BASE_URL, &endpoint).await;
            if !state.controller.peek().accepts(&ticket) {
                return;
            }

            // On failure the control is disabled and the ranking runs unfiltered
            let (options, error) = DisaggregationOptions::from_fetch(result);
            if let Some(e) = &error {
                log::warn!("No disaggregation options for {}: {}", measure, e);
            }
            state
                .disaggregation_error
                .set(error.map(|e| format!("Failed to load breakdown options: {}", e)));
            state.disaggregation.set(options.selected.clone());
            state.disaggregation_options.set(options);
            // Marks the options as valid for this measure, which wakes the ranking effect
            state.disaggregation_measure.set(Some(measure));
        });
    });

    // Ranking chart: any selection change once disaggregation is resolved
    use_effect(move || {
        let selection = Selection {
            measure: (state.measure)(),
            disaggregation: (state.disaggregation)(),
            regions: (state.regions)(),
            highlight: (state.highlight)(),
        };
        let resolved = (state.disaggregation_measure)();
        if !selection.is_resolved(resolved.as_deref()) {
            return;
        }

        let ticket = state.controller.write().begin(Widget::Ranking);
        state.ranking_status.set(WidgetStatus::Loading);

        spawn(async move {
            let result =
                api::fetch_endpoint::<Vec<ParetoRow>>(BASE_URL, &selection.pareto_endpoint()).await;
            if !state.controller.peek().accepts(&ticket) {
                return;
            }

            match result {
                Ok(rows) => {
                    let chart = rank_rows(&rows, selection.highlight.as_deref());
                    state
                        .highlight_candidates
                        .set(chart.highlight_candidates.clone());

                    if chart.is_empty() {
                        state.controller.write().dispose(Widget::Ranking);
                        state.ranking_status.set(WidgetStatus::Empty);
                    } else {
                        state
                            .controller
                            .write()
                            .render_ranking(&chart, &selection.measure);
                        state.ranking_status.set(WidgetStatus::Ready);
                    }

                    if chart.highlight != selection.highlight {
                        state.highlight.set(chart.highlight);
                    }
                }
                Err(e) => {
                    state.controller.write().dispose(Widget::Ranking);
                    state.ranking_status.set(WidgetStatus::Failed(e.to_string()));
                }
            }
        });
    });

    // Detail table follows the highlight (England when none)
    use_effect(move || {
        let selection = Selection {
            highlight: (state.highlight)(),
            ..Selection::default()
        };
        let ticket = state.controller.write().begin(Widget::Detail);
        state.detail_status.set(WidgetStatus::Loading);

        spawn(async move {
            let result =
                api::fetch_endpoint::<Vec<LaOutcomeRow>>(BASE_URL, &selection.detail_endpoint())
                    .await;
            if !state.controller.peek().accepts(&ticket) {
                return;
            }

            match result {
                Ok(rows) => {
                    let detail = build_detail_rows(&rows);
                    state.detail_status.set(if detail.is_empty() {
                        WidgetStatus::Empty
                    } else {
                        WidgetStatus::Ready
                    });
                    state.detail_rows.set(detail);
                }
                Err(e) => {
                    state.detail_rows.set(Vec::new());
                    state.detail_status.set(WidgetStatus::Failed(e.to_string()));
                }
            }
        });
    });

    // Trend chart follows the measure and the highlight, once the measure's
    // disaggregation options are in
    use_effect(move || {
        let selection = Selection {
            measure: (state.measure)(),
            highlight: (state.highlight)(),
            ..Selection::default()
        };
        let resolved = (state.disaggregation_measure)();
        if !selection.is_resolved(resolved.as_deref()) {
            return;
        }
        let ticket = state.controller.write().begin(Widget::Trend);
        state.trend_status.set(WidgetStatus::Loading);

        spawn(async move {
            let result =
                api::fetch_endpoint::<TrendResponse>(BASE_URL, &selection.trend_endpoint()).await;
            if !state.controller.peek().accepts(&ticket) {
                return;
            }

            match result {
                Ok(resp) => match TrendChart::build(&resp, selection.highlight.as_deref()) {
                    Some(chart) => {
                        state
                            .controller
                            .write()
                            .render_trend(&chart, &selection.measure);
                        state.trend_status.set(WidgetStatus::Ready);
                    }
                    None => {
                        state.controller.write().dispose(Widget::Trend);
                        state.trend_status.set(WidgetStatus::Empty);
                    }
                },
                Err(e) => {
                    state.controller.write().dispose(Widget::Trend);
                    state.trend_status.set(WidgetStatus::Failed(e.to_string()));
                }
            }
        });
    });

    let measure = (state.measure)();
    let highlight_label = (state.highlight)().unwrap_or_else(|| "England".to_string());
    let ranking_status = (state.ranking_status)();
    let trend_status = (state.trend_status)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "margin: 0 0 12px 0; font-size: 22px; color: #1F2937;",
                "Local Government Outcomes"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if state.catalog.read().measures.is_empty() {
                LoadingSpinner { message: "Loading measures...".to_string() }
            } else {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 8px 24px;",
                    MeasureSelector {}
                    DisaggregationSelector {}
                    HighlightSelector {}
                }
                if let Some(err) = (state.disaggregation_error)() {
                    ErrorDisplay { message: err }
                }
                RegionSelector {}

                // Ranking
                div {
                    style: "margin-top: 16px;",
                    ChartHeader {
                        title: "Council ranking".to_string(),
                        subtitle: measure.clone(),
                    }
                    if let WidgetStatus::Failed(msg) = &ranking_status {
                        ErrorDisplay { message: msg.clone() }
                    }
                    ChartContainer {
                        id: RANKING_CHART_ID.to_string(),
                        loading: ranking_status.is_loading(),
                        empty_message: empty_message(&ranking_status, "No data available for this selection."),
                        min_height: 460,
                    }
                }

                // Trend
                div {
                    style: "margin-top: 24px;",
                    ChartHeader {
                        title: "Trend".to_string(),
                        subtitle: measure.clone(),
                    }
                    if let WidgetStatus::Failed(msg) = &trend_status {
                        ErrorDisplay { message: msg.clone() }
                    }
                    ChartContainer {
                        id: TREND_CHART_ID.to_string(),
                        loading: trend_status.is_loading(),
                        empty_message: empty_message(&trend_status, "No trend data available."),
                        min_height: 360,
                    }
                }

                // Detail table
                div {
                    style: "margin-top: 24px;",
                    ChartHeader {
                        title: format!("Outcomes for {}", highlight_label),
                        subtitle: "Aggregate (Total) figures, percentiles colored red to green".to_string(),
                    }
                    DetailTable {}
                }

                // AI summary
                div {
                    style: "margin-top: 24px; padding-top: 12px; border-top: 1px solid #E5E7EB;",
                    ChartHeader {
                        title: "Council summary".to_string(),
                    }
                    SummaryPanel { base_url: BASE_URL.to_string() }
                }
            }
        }
    }
}

/// Empty-state text for a chart container; blank unless there is nothing to draw.
fn empty_message(status: &WidgetStatus, message: &str) -> String {
    match status {
        WidgetStatus::Empty => message.to_string(),
        _ => String::new(),
    }
}
