//! Section heading in the dashboard palette.

use dioxus::prelude::*;
use evc_data::config::COLOR_ACCENT;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Heading color; defaults to the accent violet.
    #[props(default = COLOR_ACCENT.to_string())]
    pub color: String,
}

/// `h2` heading for a dashboard section.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "color: {props.color};",
            "{props.title}"
        }
    }
}
