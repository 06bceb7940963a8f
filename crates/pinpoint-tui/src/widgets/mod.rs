//! Ratatui widgets for the pinpoint TUI.

pub mod map_pane;
pub mod results;
pub mod search_bar;
pub mod status;
