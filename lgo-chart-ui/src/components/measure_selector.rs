//! Dropdown selector for choosing a measure group.

use crate::state::AppState;
use dioxus::prelude::*;

/// Measure dropdown. Changing it triggers a disaggregation refresh, which in
/// turn re-renders the charts.
#[component]
pub fn MeasureSelector() -> Element {
    let mut state = use_context::<AppState>();
    let measures = state.catalog.read().measures.clone();
    let selected = (state.measure)();

    let on_change = move |evt: Event<FormData>| {
        state.measure.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "measure-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Measure: "
            }
            select {
                id: "measure-select",
                style: "max-width: 100%;",
                onchange: on_change,
                for measure in measures.iter() {
                    option {
                        value: "{measure}",
                        selected: *measure == selected,
                        "{measure}"
                    }
                }
            }
        }
    }
}
