//! Disaggregation dropdown policy.
//!
//! The valid categories depend on the measure, so the option list is rebuilt
//! from `/disaggregation-options` every time the measure changes.

use crate::detail::TOTAL_LEVEL;
use crate::error::FetchError;

pub const NO_FILTER_LABEL: &str = "All categories";
pub const NO_DATA_LABEL: &str = "No data available";

/// One `<option>` in the disaggregation control.
#[derive(Debug, Clone, PartialEq)]
pub struct DisaggregationEntry {
    /// `None` for placeholders; they never become a query filter.
    pub value: Option<String>,
    pub label: String,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisaggregationOptions {
    pub entries: Vec<DisaggregationEntry>,
    pub enabled: bool,
    /// Default selection; `None` is the no-filter placeholder.
    pub selected: Option<String>,
}

impl Default for DisaggregationOptions {
    fn default() -> Self {
        Self::from_categories(Vec::new())
    }
}

impl DisaggregationOptions {
    /// Resolve the backend's category list into control state.
    ///
    /// With categories: a no-filter placeholder followed by each category,
    /// defaulting to "Total" when offered. Without: a disabled control with
    /// a single non-selectable "no data" entry.
    pub fn from_categories(categories: Vec<String>) -> Self {
        if categories.is_empty() {
            return Self {
                entries: vec![DisaggregationEntry {
                    value: None,
                    label: NO_DATA_LABEL.to_string(),
                    selectable: false,
                }],
                enabled: false,
                selected: None,
            };
        }

        let selected = categories
            .iter()
            .find(|c| c.as_str() == TOTAL_LEVEL)
            .cloned();

        let mut entries = Vec::with_capacity(categories.len() + 1);
        entries.push(DisaggregationEntry {
            value: None,
            label: NO_FILTER_LABEL.to_string(),
            selectable: true,
        });
        entries.extend(categories.into_iter().map(|c| DisaggregationEntry {
            label: c.clone(),
            value: Some(c),
            selectable: true,
        }));

        Self {
            entries,
            enabled: true,
            selected,
        }
    }

    /// Resolve a fetch outcome. A failed fetch still yields the disabled
    /// control, so the ranking can proceed unfiltered, but the error is
    /// handed back for display.
    pub fn from_fetch(result: Result<Vec<String>, FetchError>) -> (Self, Option<FetchError>) {
        match result {
            Ok(categories) => (Self::from_categories(categories), None),
            Err(e) => (Self::from_categories(Vec::new()), Some(e)),
        }
    }

    /// Whether `value` is a real option of this list.
    pub fn contains(&self, value: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.selectable && e.value.as_deref() == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_disables_control() {
        let opts = DisaggregationOptions::from_categories(Vec::new());
        assert!(!opts.enabled);
        assert_eq!(opts.entries.len(), 1);
        assert_eq!(opts.entries[0].label, NO_DATA_LABEL);
        assert!(!opts.entries[0].selectable);
        assert_eq!(opts.entries[0].value, None);
        assert_eq!(opts.selected, None);
    }

    #[test]
    fn defaults_to_total_when_offered() {
        let opts = DisaggregationOptions::from_categories(cats(&["18-64", "65+", "Total"]));
        assert!(opts.enabled);
        assert_eq!(opts.selected.as_deref(), Some("Total"));
        assert_eq!(opts.entries.len(), 4);
        assert_eq!(opts.entries[0].label, NO_FILTER_LABEL);
        assert_eq!(opts.entries[0].value, None);
        assert_eq!(opts.entries[3].value.as_deref(), Some("Total"));
    }

    #[test]
    fn falls_back_to_no_filter_without_total() {
        let opts = DisaggregationOptions::from_categories(cats(&["Female", "Male"]));
        assert_eq!(opts.selected, None);
        assert!(opts.contains("Male"));
        assert!(!opts.contains("Total"));
    }

    #[test]
    fn failed_fetch_is_reported_apart_from_empty_list() {
        let (empty, err) = DisaggregationOptions::from_fetch(Ok(Vec::new()));
        assert!(!empty.enabled);
        assert_eq!(err, None);

        let failure = FetchError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        let (opts, err) = DisaggregationOptions::from_fetch(Err(failure.clone()));
        assert!(!opts.enabled);
        assert_eq!(opts.selected, None);
        assert_eq!(err, Some(failure));
    }
}
