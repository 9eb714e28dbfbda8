//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod detail_row;
mod error_display;
mod loading_spinner;
mod station_panel;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use detail_row::DetailRow;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use station_panel::StationPanel;
