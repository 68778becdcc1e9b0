//! Translating the dashboard selection into backend requests.
//!
//! Every request the dashboard makes is an [`Endpoint`]. The WASM client and
//! the native CLI both call [`Endpoint::url`], so query encoding is shared.

/// Ordered key/value pairs for a query string.
///
/// Repeated keys are allowed (`regions[]` appears once per region).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Push only when the value is present and not blank.
    pub fn push_non_empty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = non_empty(value) {
            self.push(key, v);
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode into `k=v&k=v` form (no leading `?`).
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Treat `None`, `""` and whitespace-only strings alike.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Snapshot of the UI controls, read right before a query is issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub measure: String,
    /// `None` means the "no filter" placeholder is selected.
    pub disaggregation: Option<String>,
    /// Selected regions in the order the UI lists them.
    pub regions: Vec<String>,
    pub highlight: Option<String>,
}

impl Selection {
    pub fn pareto_endpoint(&self) -> Endpoint {
        Endpoint::Pareto {
            measure: self.measure.clone(),
            disaggregation: non_empty(self.disaggregation.as_deref()).map(str::to_string),
            regions: self.regions.clone(),
        }
    }

    pub fn detail_endpoint(&self) -> Endpoint {
        Endpoint::LaOutcomes {
            la: non_empty(self.highlight.as_deref()).map(str::to_string),
        }
    }

    pub fn trend_endpoint(&self) -> Endpoint {
        Endpoint::Trend {
            measure: self.measure.clone(),
            la: non_empty(self.highlight.as_deref()).map(str::to_string),
        }
    }

    /// Whether charts for this measure may be drawn, given the measure the
    /// disaggregation options were last resolved for.
    pub fn is_resolved(&self, disaggregation_measure: Option<&str>) -> bool {
        !self.measure.is_empty() && disaggregation_measure == Some(self.measure.as_str())
    }
}

/// A read-only backend request.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Pareto {
        measure: String,
        disaggregation: Option<String>,
        regions: Vec<String>,
    },
    DisaggregationOptions {
        measure: String,
    },
    LaOutcomes {
        la: Option<String>,
    },
    Trend {
        measure: String,
        la: Option<String>,
    },
    Summary {
        council: String,
    },
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Pareto { .. } => "/pareto-data",
            Endpoint::DisaggregationOptions { .. } => "/disaggregation-options",
            Endpoint::LaOutcomes { .. } => "/la-outcomes",
            Endpoint::Trend { .. } => "/trend-data",
            Endpoint::Summary { .. } => "/mistral-summary",
        }
    }

    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match self {
            Endpoint::Pareto {
                measure,
                disaggregation,
                regions,
            } => {
                params.push("measure", measure.as_str());
                params.push_non_empty("disagg", disaggregation.as_deref());
                for region in regions {
                    params.push("regions[]", region.as_str());
                }
            }
            Endpoint::DisaggregationOptions { measure } => {
                params.push("measure", measure.as_str());
            }
            Endpoint::LaOutcomes { la } => {
                params.push_non_empty("la", la.as_deref());
            }
            Endpoint::Trend { measure, la } => {
                params.push("measure", measure.as_str());
                params.push_non_empty("la", la.as_deref());
            }
            Endpoint::Summary { council } => {
                params.push("council", council.as_str());
            }
        }
        params
    }

    /// Full URL relative to `base_url` (use `""` for same-origin requests).
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let query = self.query();
        if query.is_empty() {
            format!("{}{}", base, self.path())
        } else {
            format!("{}{}?{}", base, self.path(), query.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection {
            measure: "Proportion of people who use services".to_string(),
            disaggregation: Some("Total".to_string()),
            regions: vec!["London".to_string(), "North East".to_string()],
            highlight: None,
        }
    }

    #[test]
    fn pareto_query_keeps_region_order() {
        let params = selection().pareto_endpoint().query();
        let keys: Vec<_> = params.pairs().iter().map(|(k, v)| (*k, v.as_str())).collect();
        assert_eq!(
            keys,
            vec![
                ("measure", "Proportion of people who use services"),
                ("disagg", "Total"),
                ("regions[]", "London"),
                ("regions[]", "North East"),
            ]
        );
    }

    #[test]
    fn empty_disaggregation_is_omitted() {
        let mut sel = selection();
        sel.disaggregation = Some(String::new());
        let params = sel.pareto_endpoint().query();
        assert!(params.pairs().iter().all(|(k, _)| *k != "disagg"));

        sel.disaggregation = None;
        let params = sel.pareto_endpoint().query();
        assert!(params.pairs().iter().all(|(k, _)| *k != "disagg"));
    }

    #[test]
    fn url_is_percent_encoded() {
        let sel = Selection {
            measure: "A & B".to_string(),
            disaggregation: None,
            regions: vec!["East of England".to_string()],
            highlight: None,
        };
        assert_eq!(
            sel.pareto_endpoint().url(""),
            "/pareto-data?measure=A%20%26%20B&regions%5B%5D=East%20of%20England"
        );
    }

    #[test]
    fn la_outcomes_without_authority_has_no_query() {
        let ep = Endpoint::LaOutcomes { la: None };
        assert_eq!(ep.url("http://localhost:5000/"), "http://localhost:5000/la-outcomes");

        let ep = Endpoint::LaOutcomes {
            la: Some("Leeds".to_string()),
        };
        assert_eq!(ep.url(""), "/la-outcomes?la=Leeds");
    }

    #[test]
    fn trend_endpoint_follows_highlight() {
        let mut sel = selection();
        assert_eq!(
            sel.trend_endpoint(),
            Endpoint::Trend {
                measure: sel.measure.clone(),
                la: None
            }
        );

        sel.highlight = Some("Leeds".to_string());
        assert_eq!(
            sel.trend_endpoint().url(""),
            "/trend-data?measure=Proportion%20of%20people%20who%20use%20services&la=Leeds"
        );
    }

    #[test]
    fn charts_wait_for_options_of_the_same_measure() {
        let sel = selection();
        assert!(!sel.is_resolved(None));
        assert!(!sel.is_resolved(Some("Some previous measure")));
        assert!(sel.is_resolved(Some("Proportion of people who use services")));

        let blank = Selection::default();
        assert!(!blank.is_resolved(Some("")));
    }
}
