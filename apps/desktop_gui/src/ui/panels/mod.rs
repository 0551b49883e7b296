//! Panels composing the board: header, filter bar, employer list, and map.

pub mod filter_panel;
pub mod header;
pub mod list_view;
pub mod map_view;
