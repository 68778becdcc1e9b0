//! Multi-select of council regions, rendered as a checkbox list.

use crate::state::AppState;
use dioxus::prelude::*;

/// Region filter. The selection is kept in catalog order regardless of the
/// order boxes were ticked in. No regions ticked means all regions.
#[component]
pub fn RegionSelector() -> Element {
    let state = use_context::<AppState>();
    let regions = state.catalog.read().regions.clone();
    let selected = (state.regions)();

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #E0E0E0; border-radius: 4px; padding: 8px 12px;",
            legend {
                style: "font-weight: bold;",
                "Regions"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px 16px;",
                for region in regions.iter() {
                    RegionCheckbox {
                        key: "{region}",
                        region: region.clone(),
                        checked: selected.contains(region),
                    }
                }
            }
        }
    }
}

#[component]
fn RegionCheckbox(region: String, checked: bool) -> Element {
    let mut state = use_context::<AppState>();
    let toggled = region.clone();

    let on_change = move |_evt: Event<FormData>| {
        let mut chosen = state.regions.peek().clone();
        if chosen.contains(&toggled) {
            chosen.retain(|r| r != &toggled);
        } else {
            chosen.push(toggled.clone());
        }
        let ordered: Vec<String> = state
            .catalog
            .peek()
            .regions
            .iter()
            .filter(|r| chosen.contains(r))
            .cloned()
            .collect();
        state.regions.set(ordered);
    };

    rsx! {
        label {
            style: "font-size: 13px; white-space: nowrap;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: on_change,
            }
            " {region}"
        }
    }
}
