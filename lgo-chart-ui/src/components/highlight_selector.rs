//! Dropdown selector for the highlighted local authority.

use crate::state::AppState;
use dioxus::prelude::*;

/// Highlight dropdown. Its entries are rebuilt from every ranking result.
#[component]
pub fn HighlightSelector() -> Element {
    let mut state = use_context::<AppState>();
    let candidates = state.highlight_candidates.read().clone();
    let selected = (state.highlight)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state
            .highlight
            .set(if value.is_empty() { None } else { Some(value) });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "highlight-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Highlight: "
            }
            select {
                id: "highlight-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "None"
                }
                for name in candidates.iter() {
                    option {
                        value: "{name}",
                        selected: selected.as_deref() == Some(name.as_str()),
                        "{name}"
                    }
                }
            }
        }
    }
}
