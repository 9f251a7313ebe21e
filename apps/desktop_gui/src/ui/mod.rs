//! UI layer for the desktop site: app shell, view panels, widgets and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::SiteApp;
