//! Placeholder shown while the station CSV is loaded.

use dioxus::prelude::*;
use evc_data::config::COLOR_TEXT;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        p {
            style: "text-align: center; padding: 40px; font-size: 18px; color: {COLOR_TEXT};",
            "Loading charging stations..."
        }
    }
}
