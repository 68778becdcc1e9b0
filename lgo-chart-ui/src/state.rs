//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::controller::DashboardController;
use dioxus::prelude::*;
use lgo_core::catalog::Catalog;
use lgo_core::detail::DetailRow;
use lgo_core::disaggregation::DisaggregationOptions;

/// Lifecycle of one widget's data.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetStatus {
    Idle,
    Loading,
    /// Fetch succeeded with nothing to show
    Empty,
    Ready,
    Failed(String),
}

impl WidgetStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetStatus::Loading)
    }
}

/// AI summary panel state.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryState {
    Idle,
    Loading,
    Ready(String),
    Failed,
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Measures, councils and regions for the selectors
    pub catalog: Signal<Catalog>,
    /// Error message for app-level failures (catalog parsing)
    pub error_msg: Signal<Option<String>>,

    /// Currently selected measure group description
    pub measure: Signal<String>,
    /// Selected regions, in catalog order
    pub regions: Signal<Vec<String>>,
    /// Selected disaggregation; `None` is the no-filter placeholder
    pub disaggregation: Signal<Option<String>>,
    /// Options currently offered by the disaggregation control
    pub disaggregation_options: Signal<DisaggregationOptions>,
    /// Why the last disaggregation fetch failed, if it did
    pub disaggregation_error: Signal<Option<String>>,
    /// Measure the disaggregation options were resolved for
    pub disaggregation_measure: Signal<Option<String>>,
    /// Highlighted local authority
    pub highlight: Signal<Option<String>>,
    /// Highlight dropdown entries, rebuilt from each ranking result
    pub highlight_candidates: Signal<Vec<String>>,

    pub ranking_status: Signal<WidgetStatus>,
    pub trend_status: Signal<WidgetStatus>,
    pub detail_status: Signal<WidgetStatus>,
    pub detail_rows: Signal<Vec<DetailRow>>,

    /// Council chosen for the AI summary
    pub council: Signal<Option<String>>,
    pub summary: Signal<SummaryState>,

    /// Owner of live chart handles and in-flight request tickets
    pub controller: Signal<DashboardController>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            catalog: Signal::new(Catalog::default()),
            error_msg: Signal::new(None),
            measure: Signal::new(String::new()),
            regions: Signal::new(Vec::new()),
            disaggregation: Signal::new(None),
            disaggregation_options: Signal::new(DisaggregationOptions::default()),
            disaggregation_error: Signal::new(None),
            disaggregation_measure: Signal::new(None),
            highlight: Signal::new(None),
            highlight_candidates: Signal::new(Vec::new()),
            ranking_status: Signal::new(WidgetStatus::Idle),
            trend_status: Signal::new(WidgetStatus::Idle),
            detail_status: Signal::new(WidgetStatus::Idle),
            detail_rows: Signal::new(Vec::new()),
            council: Signal::new(None),
            summary: Signal::new(SummaryState::Idle),
            controller: Signal::new(DashboardController::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
