//! Terminal user interface for the portfolio page
//!
//! Built with ratatui, providing:
//! - A scrollable virtual page of sections
//! - The animated identity word in the hero section
//! - Filterable project cards with fade-in
//! - Skill bars that grow on first view
//! - Menu and help overlays

pub mod theme;
pub mod layout;
pub mod widgets;
pub mod render;

pub use theme::PageTheme;
pub use render::render;
