//! Main application state and logic

use std::time::Instant;

use crate::page::content::{ContentError, Profile};
use crate::page::filter::ProjectFilter;
use crate::page::identity::{FilterSink, IdentityRotator};
use crate::page::motion::{
    NAV_EMPHASIS_ROWS, PressFlash, REVEAL_LEAD_ROWS, Reveal, SKILL_VISIBLE_RATIO, SkillAnimation,
    SmoothScroll,
};
use crate::page::ui::layout::AppLayout;
use crate::page::ui::render::Overlay;
use crate::page::ui::theme::PageTheme;
use crate::page::ui::widgets::page::section_extents;

/// The page's sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }
}

/// Main application state
pub struct AppState {
    // Content
    pub profile: Profile,

    // Core page state
    pub rotator: IdentityRotator,
    pub filter: ProjectFilter,

    // Scroll and scroll-triggered animation
    pub scroll: SmoothScroll,
    pub reveals: [Reveal; Section::ALL.len()],
    pub skill_bars: SkillAnimation,
    pub press_flash: PressFlash,

    // UI state
    pub theme: PageTheme,
    pub overlay: Option<Overlay>,
    pub menu_selected: usize,

    // Deferred filter reset after "view my work" finishes scrolling
    pub pending_show_all: bool,

    // Status
    pub status_message: Option<String>,

    // Clock and viewport, refreshed by the main loop
    pub now: Instant,
    pub viewport_height: u16,
}

impl AppState {
    /// Create the application from a profile, starting on a random role.
    ///
    /// Fails fast on invalid content; nothing here is recoverable once the
    /// page is running.
    pub fn new(profile: Profile) -> Result<Self, ContentError> {
        profile.validate()?;

        let mut filter = ProjectFilter::new();
        let rotator = IdentityRotator::new(profile.roles.clone(), &mut filter);
        Ok(Self::assemble(profile, rotator, filter))
    }

    /// Create the application starting on a specific role.
    pub fn with_selection(profile: Profile, selection: usize) -> Result<Self, ContentError> {
        profile.validate()?;

        let mut filter = ProjectFilter::new();
        let rotator = IdentityRotator::with_selection(profile.roles.clone(), selection, &mut filter);
        Ok(Self::assemble(profile, rotator, filter))
    }

    fn assemble(profile: Profile, rotator: IdentityRotator, filter: ProjectFilter) -> Self {
        // The hero is on screen from the first frame; only the sections below
        // the fold fade in on scroll.
        let mut reveals = [Reveal::Hidden; Section::ALL.len()];
        reveals[Section::Hero.index()] = Reveal::Shown;

        Self {
            profile,
            rotator,
            filter,
            scroll: SmoothScroll::new(),
            reveals,
            skill_bars: SkillAnimation::default(),
            press_flash: PressFlash::default(),
            theme: PageTheme::default(),
            overlay: None,
            menu_selected: 0,
            pending_show_all: false,
            status_message: None,
            now: Instant::now(),
            viewport_height: 22,
        }
    }

    /// Update the cached page viewport height from the terminal size.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        let area = ratatui::layout::Rect::new(0, 0, width, height);
        self.viewport_height = AppLayout::calculate(area).page_area.height;
    }

    /// Total height of the assembled page in rows.
    pub fn page_height(&self) -> u16 {
        section_extents(self)
            .last()
            .map(|&(_, top, height)| top + height)
            .unwrap_or(0)
    }

    fn max_scroll(&self) -> f32 {
        f32::from(self.page_height().saturating_sub(self.viewport_height))
    }

    /// The section currently at the top of the viewport.
    pub fn current_section(&self) -> Section {
        let offset = self.scroll.offset_rows();
        let mut current = Section::Hero;
        for (section, top, _) in section_extents(self) {
            if top <= offset + 1 {
                current = section;
            }
        }
        current
    }

    /// Smooth-scroll so `section` starts at the top of the viewport.
    pub fn jump_to(&mut self, section: Section) {
        self.clear_status();
        for (candidate, top, _) in section_extents(self) {
            if candidate == section {
                self.scroll.scroll_to(f32::from(top).min(self.max_scroll()));
                return;
            }
        }
    }

    /// Scroll by whole rows, clamped to the page.
    pub fn scroll_lines(&mut self, delta: f32) {
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_to(max);
    }

    /// Whether the nav bar should use its solid, scrolled style.
    pub fn nav_emphasized(&self) -> bool {
        self.scroll.offset() > NAV_EMPHASIS_ROWS
    }

    /// Advance the identity word; flashes the control when a step starts.
    pub fn advance_identity(&mut self, now: Instant) {
        if self.rotator.advance(now) {
            self.press_flash.trigger(now);
        }
    }

    /// "View my work": scroll to the projects and show everything once the
    /// scroll has settled, so the reset does not flash mid-glide.
    pub fn view_work(&mut self, now: Instant) {
        self.press_flash.trigger(now);
        self.jump_to(Section::Projects);
        self.pending_show_all = true;
    }

    /// Cycle the project filter left or right through "all" plus the roles.
    pub fn cycle_filter(&mut self, step: isize) {
        let mut options = vec![crate::page::content::FILTER_ALL.to_string()];
        options.extend(self.profile.roles.roles().iter().cloned());

        let position = options
            .iter()
            .position(|value| value == self.filter.active())
            .unwrap_or(0) as isize;
        let count = options.len() as isize;
        let next = (position + step).rem_euclid(count) as usize;
        self.filter.set_filter(&options[next]);
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Open the nav menu with the current section preselected.
    pub fn open_menu(&mut self) {
        self.menu_selected = self.current_section().index();
        self.overlay = Some(Overlay::Menu);
    }

    /// Close any open overlay.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        self.menu_selected = (self.menu_selected + 1).min(Section::ALL.len() - 1);
    }

    /// Choose the selected menu entry: close the menu and glide there.
    pub fn menu_select(&mut self) {
        let section = Section::ALL[self.menu_selected];
        self.overlay = None;
        self.jump_to(section);
    }

    /// Set status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Advance every time-driven behavior by one tick.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        self.rotator.tick(now, &mut self.filter);
        self.filter.tick(now);

        let max = self.max_scroll();
        self.scroll.clamp_to(max);
        self.scroll.tick();

        self.trigger_visible_animations(now);
        for reveal in &mut self.reveals {
            reveal.tick(now);
        }

        if self.pending_show_all && self.scroll.is_settled() {
            self.pending_show_all = false;
            self.filter.show_all();
            self.set_status("showing all projects");
        }
    }

    /// Fire the one-shot animations of any section scrolled into view.
    fn trigger_visible_animations(&mut self, now: Instant) {
        let offset = self.scroll.offset_rows();
        let view_end = offset.saturating_add(self.viewport_height);

        for (section, top, height) in section_extents(self) {
            let bottom = top + height;
            let visible = bottom.min(view_end).saturating_sub(top.max(offset));

            if visible >= REVEAL_LEAD_ROWS.min(height) && height > 0 {
                self.reveals[section.index()].trigger(now);
            }
            if section == Section::Skills
                && height > 0
                && f32::from(visible) >= f32::from(height) * SKILL_VISIBLE_RATIO
            {
                self.skill_bars.start(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::content::{RoleCatalog, sample_profile};
    use crate::page::identity::{SETTLE_DELAY, SWAP_DELAY};
    use std::time::Duration;

    fn app() -> AppState {
        AppState::with_selection(sample_profile(), 0).unwrap()
    }

    #[test]
    fn test_empty_catalog_fails_at_startup() {
        let mut profile = sample_profile();
        profile.roles = RoleCatalog::new(
            Vec::<String>::new(),
            Vec::<String>::new(),
            Vec::<String>::new(),
        );
        profile.projects.clear();
        assert!(AppState::new(profile).is_err());
    }

    #[test]
    fn test_startup_syncs_filter_to_initial_role() {
        let state = app();
        assert_eq!(state.filter.active(), "designer");
        assert_eq!(state.rotator.display().word, "designer");
    }

    #[test]
    fn test_advance_flashes_and_steps() {
        let mut state = app();
        let now = Instant::now();
        state.advance_identity(now);
        assert!(state.press_flash.is_active(now));
        assert_eq!(state.rotator.selection(), 1);

        state.tick(now + SETTLE_DELAY + Duration::from_millis(10));
        assert_eq!(state.filter.active(), "engineer");
    }

    #[test]
    fn test_reentrant_advance_settles_consistently() {
        let mut state = app();
        let now = Instant::now();
        state.advance_identity(now);
        state.advance_identity(now + SWAP_DELAY / 2);
        state.tick(now + SETTLE_DELAY + Duration::from_millis(10));

        let display = state.rotator.display();
        assert_eq!(display.word, "engineer");
        assert!(!display.changing);
        assert_eq!(state.filter.active(), "engineer");
    }

    #[test]
    fn test_jump_targets_section_top() {
        let mut state = app();
        state.viewport_height = 10;
        state.jump_to(Section::About);
        let about_top = section_extents(&state)
            .iter()
            .find(|(section, _, _)| *section == Section::About)
            .map(|&(_, top, _)| top)
            .unwrap();
        assert_eq!(state.scroll.target(), f32::from(about_top));
    }

    #[test]
    fn test_view_work_applies_filter_after_scroll() {
        let mut state = app();
        let mut now = Instant::now();
        state.cycle_filter(1); // move off the startup value
        state.view_work(now);
        assert!(state.pending_show_all);

        // While the glide is in progress the filter is untouched.
        state.tick(now);
        assert_ne!(state.filter.active(), "all");

        for _ in 0..100 {
            now += Duration::from_millis(50);
            state.tick(now);
        }
        assert!(!state.pending_show_all);
        assert_eq!(state.filter.active(), "all");
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let mut state = app();
        // Startup filter is "designer" (index 1 of all+roles).
        state.cycle_filter(-1);
        assert_eq!(state.filter.active(), "all");
        state.cycle_filter(-1);
        assert_eq!(state.filter.active(), "developer");
        state.cycle_filter(1);
        assert_eq!(state.filter.active(), "all");
    }

    #[test]
    fn test_sections_reveal_when_scrolled_into_view() {
        let mut state = app();
        let now = Instant::now();
        state.viewport_height = 10;
        state.tick(now);
        assert_eq!(state.reveals[Section::Contact.index()], Reveal::Hidden);

        state.scroll_to_bottom();
        let mut later = now;
        for _ in 0..100 {
            later += Duration::from_millis(50);
            state.tick(later);
        }
        assert_ne!(state.reveals[Section::Contact.index()], Reveal::Hidden);
        assert!(state.skill_bars.is_started());
    }

    #[test]
    fn test_current_section_tracks_scroll() {
        let mut state = app();
        state.viewport_height = 10;
        assert_eq!(state.current_section(), Section::Hero);

        state.jump_to(Section::Skills);
        let mut now = Instant::now();
        for _ in 0..100 {
            now += Duration::from_millis(50);
            state.tick(now);
        }
        assert_eq!(state.current_section(), Section::Skills);
    }

    #[test]
    fn test_scroll_clamped_to_page() {
        let mut state = app();
        state.viewport_height = 10;
        state.scroll_lines(10_000.0);
        let mut now = Instant::now();
        for _ in 0..100 {
            now += Duration::from_millis(50);
            state.tick(now);
        }
        let max = state.page_height() - state.viewport_height;
        assert!(state.scroll.offset_rows() <= max);
    }

    #[test]
    fn test_menu_selection_jumps_and_closes() {
        let mut state = app();
        state.open_menu();
        assert!(matches!(state.overlay, Some(Overlay::Menu)));
        state.menu_down();
        state.menu_down();
        state.menu_select();
        assert!(state.overlay.is_none());

        let mut now = Instant::now();
        for _ in 0..100 {
            now += Duration::from_millis(50);
            state.tick(now);
        }
        assert_eq!(state.current_section(), Section::Projects);
    }

    #[test]
    fn test_nav_emphasis_follows_scroll() {
        let mut state = app();
        assert!(!state.nav_emphasized());
        state.viewport_height = 10;
        state.scroll_to_bottom();
        let mut now = Instant::now();
        for _ in 0..100 {
            now += Duration::from_millis(50);
            state.tick(now);
        }
        assert!(state.nav_emphasized());
    }
}
