//! Project card visibility filter
//!
//! An independent collaborator: the identity rotator pushes role names into
//! it through [`FilterSink`], and the projects section's own keys drive it
//! directly. It decides which cards are shown and restarts the fade-in
//! animation whenever the active value changes.

use std::time::{Duration, Instant};

use crate::page::content::{FILTER_ALL, Project};
use crate::page::identity::FilterSink;

/// How long newly shown cards fade in.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Holds the active filter value and the fade-in state of the card grid.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    active: String,
    /// Set by `set_filter`, consumed by `tick` to stamp the fade start.
    dirty: bool,
    fade_started: Option<Instant>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
            dirty: false,
            fade_started: None,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn show_all(&mut self) {
        self.set_filter(FILTER_ALL);
    }

    /// Whether `project` is shown under the current filter.
    ///
    /// "all" shows only finished work; a specific category shows every card
    /// in that category, placeholders included.
    pub fn is_visible(&self, project: &Project) -> bool {
        if self.active == FILTER_ALL {
            !project.coming_soon
        } else {
            project.category == self.active
        }
    }

    /// Stamp a pending filter change so the fade-in runs from `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.dirty {
            self.dirty = false;
            self.fade_started = Some(now);
        }
    }

    /// Fade-in progress of the visible cards, 0.0 to 1.0.
    pub fn fade_progress(&self, now: Instant) -> f32 {
        match self.fade_started {
            None => 1.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSink for ProjectFilter {
    fn set_filter(&mut self, value: &str) {
        if self.active != value {
            self.active = value.to_string();
            self.dirty = true;
        }
    }
}
