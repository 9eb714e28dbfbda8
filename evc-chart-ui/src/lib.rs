//! Shared Dioxus components and D3.js bridge for the charging station dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js map and table via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (containers, detail panel, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
