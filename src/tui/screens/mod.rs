//! TUI screens

mod browser;
mod dashboard;
mod viewer;

pub use browser::BrowserScreen;
pub use dashboard::DashboardScreen;
pub use viewer::ViewerScreen;
