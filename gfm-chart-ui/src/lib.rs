//! Shared Dioxus components and plotly.js bridge for the fruits dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for plotly.js calls via `js_sys::eval()`
//! - `fetch`: browser `fetch()` for the remote gapminder CSV
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (header, selector, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;

/// Page stylesheet, injected once by the app root.
pub const DASHBOARD_CSS: &str = include_str!("../assets/css/dashboard.css");
