//! AI-generated council summary.

use crate::api;
use crate::components::LoadingSpinner;
use crate::state::{AppState, SummaryState};
use dioxus::prelude::*;
use lgo_core::models::SummaryResponse;
use lgo_core::query::Endpoint;
use lgo_core::sequence::Widget;

/// Fixed text shown when the summary request fails.
pub const SUMMARY_FAILED: &str = "Failed to generate summary.";

#[derive(Props, Clone, PartialEq)]
pub struct SummaryPanelProps {
    /// Backend base URL (empty for same origin)
    pub base_url: String,
}

/// Council picker plus a button that requests a generated summary.
#[component]
pub fn SummaryPanel(props: SummaryPanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let councils = state.catalog.read().council_names();
    let selected = (state.council)();
    let summary = (state.summary)();
    let busy = summary == SummaryState::Loading;

    let on_council_change = move |evt: Event<FormData>| {
        let value = evt.value();
        // A summary still in flight belongs to the previous council
        state.controller.write().cancel(Widget::Summary);
        state
            .council
            .set(if value.is_empty() { None } else { Some(value) });
        state.summary.set(SummaryState::Idle);
    };

    let base_url = props.base_url.clone();
    let on_generate = move |_evt: Event<MouseData>| {
        let Some(council) = state.council.peek().clone() else {
            return;
        };
        let ticket = state.controller.write().begin(Widget::Summary);
        state.summary.set(SummaryState::Loading);
        let base_url = base_url.clone();
        spawn(async move {
            let endpoint = Endpoint::Summary { council };
            let result = api::fetch_endpoint::<SummaryResponse>(&base_url, &endpoint).await;
            if !state.controller.peek().accepts(&ticket) {
                return;
            }
            match result {
                Ok(resp) => state.summary.set(SummaryState::Ready(resp.summary)),
                Err(_) => state.summary.set(SummaryState::Failed),
            }
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "council-select",
                style: "font-weight: bold;",
                "Council: "
            }
            select {
                id: "council-select",
                onchange: on_council_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select a council..."
                }
                for name in councils.iter() {
                    option {
                        value: "{name}",
                        selected: selected.as_deref() == Some(name.as_str()),
                        "{name}"
                    }
                }
            }
            button {
                disabled: selected.is_none() || busy,
                onclick: on_generate,
                "Generate summary"
            }
        }
        {match summary {
            SummaryState::Idle => rsx! {},
            SummaryState::Loading => rsx! {
                LoadingSpinner { message: "Generating summary...".to_string() }
            },
            SummaryState::Ready(text) => rsx! {
                div {
                    style: "padding: 12px 16px; background: #F9FAFB; border: 1px solid #E5E7EB; border-radius: 4px; white-space: pre-wrap; font-size: 14px;",
                    "{text}"
                }
            },
            SummaryState::Failed => rsx! {
                p {
                    style: "color: #C62828; font-size: 14px;",
                    "{SUMMARY_FAILED}"
                }
            },
        }}
    }
}
