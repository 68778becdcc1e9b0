//! The dashboard controller: sole owner of the live chart instances.
//!
//! Charts are never patched in place. Every render disposes of whatever the
//! slot held and draws from scratch, so nothing from a previous selection
//! (such as an old highlight) can linger in the widget.

use crate::js_bridge;
use lgo_core::ranking::RankedChart;
use lgo_core::sequence::{RequestSequencer, Ticket, Widget};
use lgo_core::trend::TrendChart;
use std::collections::HashMap;

/// DOM id of the ranking chart container.
pub const RANKING_CHART_ID: &str = "lgo-ranking-chart";
/// DOM id of the trend chart container.
pub const TREND_CHART_ID: &str = "lgo-trend-chart";

/// A chart currently drawn into a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    pub container_id: String,
}

#[derive(Debug, Default)]
pub struct DashboardController {
    charts: HashMap<Widget, ChartHandle>,
    requests: RequestSequencer,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `widget`, superseding any still in flight.
    pub fn begin(&mut self, widget: Widget) -> Ticket {
        self.requests.issue(widget)
    }

    /// Whether a completed request may still update its widget.
    pub fn accepts(&self, ticket: &Ticket) -> bool {
        let current = self.requests.is_current(ticket);
        if !current {
            log::debug!("[LGO] dropping stale {:?} response", ticket.widget());
        }
        current
    }

    pub fn render_ranking(&mut self, chart: &RankedChart, title: &str) {
        self.dispose(Widget::Ranking);
        let config = serde_json::json!({
            "title": title,
            "xAxisLabel": "Council",
            "yAxisLabel": "Value",
            "height": 460,
        });
        js_bridge::render_ranking_chart(
            RANKING_CHART_ID,
            &chart.to_chart_json(),
            &serde_json::to_string(&config).unwrap_or_default(),
        );
        self.charts.insert(
            Widget::Ranking,
            ChartHandle {
                container_id: RANKING_CHART_ID.to_string(),
            },
        );
    }

    pub fn render_trend(&mut self, chart: &TrendChart, title: &str) {
        self.dispose(Widget::Trend);
        let config = serde_json::json!({
            "title": title,
            "yAxisLabel": "Value",
            "height": 360,
        });
        js_bridge::render_trend_chart(
            TREND_CHART_ID,
            &chart.to_chart_json(),
            &serde_json::to_string(&config).unwrap_or_default(),
        );
        self.charts.insert(
            Widget::Trend,
            ChartHandle {
                container_id: TREND_CHART_ID.to_string(),
            },
        );
    }

    /// Drop whatever is in flight for `widget` without starting a new request.
    pub fn cancel(&mut self, widget: Widget) {
        self.requests.cancel(widget);
    }

    /// Tear down the chart in `widget`'s slot, if any.
    pub fn dispose(&mut self, widget: Widget) {
        if let Some(handle) = self.charts.remove(&widget) {
            js_bridge::destroy_chart(&handle.container_id);
        }
    }

    /// Tear down every chart and invalidate all in-flight requests.
    pub fn dispose_all(&mut self) {
        for (_, handle) in self.charts.drain() {
            js_bridge::destroy_chart(&handle.container_id);
        }
        for widget in [
            Widget::Disaggregation,
            Widget::Ranking,
            Widget::Trend,
            Widget::Detail,
            Widget::Summary,
        ] {
            self.requests.cancel(widget);
        }
    }
}
