//! UI layer for the job board: app shell, panels, and theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::JobBoardApp;
