//! Shared Dioxus components, fetch client and D3.js bridge for the
//! outcomes dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `api`: browser `fetch` returning typed bodies or a `FetchError`
//! - `controller`: `DashboardController`, the single owner of live charts
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, tables)

pub mod api;
pub mod components;
pub mod controller;
pub mod js_bridge;
pub mod state;
