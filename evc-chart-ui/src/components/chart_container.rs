//! Mount point for a D3.js-rendered map or table.

use dioxus::prelude::*;
use evc_data::config::COLOR_TEXT;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the JS render function looks up
    pub id: String,
    /// Show a placeholder until the first render lands
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

/// An empty `div` owned by D3. Dioxus never renders children into it, so
/// re-renders of the surrounding layout leave the drawn chart untouched.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            style: "position: relative; width: 100%; min-height: {props.min_height}px;",
            if props.loading {
                span {
                    style: "position: absolute; top: 45%; width: 100%; text-align: center; color: {COLOR_TEXT};",
                    "Drawing..."
                }
            }
            div { id: "{props.id}" }
        }
    }
}
