//! One label/value line of the "Selected station" panel.

use dioxus::prelude::*;
use evc_data::config::COLOR_TEXT;

#[derive(Props, Clone, PartialEq)]
pub struct DetailRowProps {
    /// Bold label in the left column, e.g. "Operator:"
    pub label: String,
    /// DOM id of the value paragraph
    pub value_id: String,
    pub value: String,
}

/// A 30% / 70% flex row: bold label on the left, value on the right.
#[component]
pub fn DetailRow(props: DetailRowProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row;",
            div {
                style: "width: 30%; padding: 0px;",
                p {
                    style: "font-size: 18px; font-weight: bold; color: {COLOR_TEXT};",
                    "{props.label}"
                }
            }
            div {
                style: "width: 70%; padding: 0px;",
                p {
                    id: "{props.value_id}",
                    style: "font-size: 18px; color: {COLOR_TEXT};",
                    "{props.value}"
                }
            }
        }
    }
}
