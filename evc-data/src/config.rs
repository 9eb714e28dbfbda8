//! Dashboard palette and table settings.

/// Page background.
pub const COLOR_BACKGROUND: &str = "#1e2864";
/// Page title; also the map's paper background.
pub const COLOR_TITLE: &str = "#daceb6";
/// Section headings and the selected marker.
pub const COLOR_ACCENT: &str = "#82358b";
/// Body text and table borders.
pub const COLOR_TEXT: &str = "#b6ac98";
/// Unselected markers and the table header.
pub const COLOR_HIGHLIGHT: &str = "#e0ba3b";
pub const COLOR_HEADER_TEXT: &str = "#000000";

/// Rows per page in the stations-by-state table.
pub const PAGE_SIZE: usize = 16;

/// Column headings of the stations-by-state table.
pub const STATE_COLUMN_LABEL: &str = "State";
pub const COUNT_COLUMN_LABEL: &str = "Charging Stations";
