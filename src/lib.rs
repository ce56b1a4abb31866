//! Interactive terminal portfolio page.
//!
//! A single scrollable page (hero, about, projects, skills, contact) rendered
//! with ratatui. The hero section carries a rotating identity word that keeps
//! the project filter in sync with the displayed role.

pub mod page;

pub use page::AppState;
