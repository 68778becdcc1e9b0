//! Reusable Dioxus RSX components for the outcomes dashboard.

mod chart_container;
mod chart_header;
mod detail_table;
mod disaggregation_selector;
mod error_display;
mod highlight_selector;
mod loading_spinner;
mod measure_selector;
mod region_selector;
mod summary_panel;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use detail_table::DetailTable;
pub use disaggregation_selector::DisaggregationSelector;
pub use error_display::ErrorDisplay;
pub use highlight_selector::HighlightSelector;
pub use loading_spinner::LoadingSpinner;
pub use measure_selector::MeasureSelector;
pub use region_selector::RegionSelector;
pub use summary_panel::SummaryPanel;
