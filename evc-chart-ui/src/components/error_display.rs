//! Error banner shown in place of the dashboard body.

use dioxus::prelude::*;
use evc_data::config::{COLOR_ACCENT, COLOR_TITLE};

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Light panel with a violet rule, readable on the dark page background.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px auto; max-width: 720px; padding: 12px 16px; background: {COLOR_TITLE}; color: {COLOR_ACCENT}; border-left: 6px solid {COLOR_ACCENT}; font-size: 18px;",
            strong { "Could not show the stations: " }
            "{props.message}"
        }
    }
}
