//! Data model and chart/table shaping for local government outcome measures.
//!
//! This crate holds everything the dashboard does that does not touch the
//! browser: translating the current selection into backend queries, decoding
//! responses, ranking geographies, aligning trend series on a shared year
//! axis, and formatting percentiles for the detail table.
//!
//! The Dioxus front end (`lgo-chart-ui`) and the native CLI (`lgo-cmd`) both
//! build on these modules, so the shaping rules are tested once, natively.

pub mod catalog;
pub mod detail;
pub mod disaggregation;
pub mod error;
pub mod models;
pub mod percentile;
pub mod query;
pub mod ranking;
pub mod response;
pub mod sequence;
pub mod trend;
