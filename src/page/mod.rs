//! Portfolio page: state, content, and terminal UI
//!
//! # Modules
//!
//! - `content` - static portfolio content and validation
//! - `identity` - the rotating identity word and its filter sync
//! - `filter` - project card visibility filter
//! - `motion` - scroll easing and scroll-triggered animations
//! - `ui` - terminal user interface with ratatui
//! - `app` - top-level application state
//! - `events` - key event handling

pub mod content;
pub mod identity;
pub mod filter;
pub mod motion;
pub mod ui;
pub mod app;
pub mod events;

pub use app::AppState;
