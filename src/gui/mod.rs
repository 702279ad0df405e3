//! GUI module - User interface components

mod app;
mod nav_panel;
mod page_view;

pub use app::DashboardApp;
pub use nav_panel::{NavAction, NavPanel};
pub use page_view::{PageContext, PageView};
