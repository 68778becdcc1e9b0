//! Dropdown selector for the disaggregation category.

use crate::state::AppState;
use dioxus::prelude::*;

/// Disaggregation dropdown. Options come from `AppState::disaggregation_options`;
/// placeholders carry an empty value and map back to `None`.
#[component]
pub fn DisaggregationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.disaggregation_options.read().clone();
    let selected = (state.disaggregation)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let choice = if value.is_empty() {
            None
        } else if state.disaggregation_options.peek().contains(&value) {
            Some(value)
        } else {
            return;
        };
        state.disaggregation.set(choice);
    };

    let style = if options.enabled {
        "background: #fff;"
    } else {
        "background: #F3F4F6; color: #9CA3AF;"
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "disagg-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Breakdown: "
            }
            select {
                id: "disagg-select",
                style: "{style}",
                disabled: !options.enabled,
                onchange: on_change,
                for entry in options.entries.iter() {
                    option {
                        value: "{entry.value.clone().unwrap_or_default()}",
                        disabled: !entry.selectable,
                        selected: entry.value == selected,
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
