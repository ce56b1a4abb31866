//! TUI widgets for the portfolio page

pub mod page;
pub mod hero;
pub mod about;
pub mod projects;
pub mod skills;
pub mod contact;
pub mod nav_bar;
pub mod status_bar;

pub use page::PageWidget;
pub use nav_bar::NavBarWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
