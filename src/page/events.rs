//! Event handling for the portfolio page

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::page::app::{AppState, Section};
use crate::page::ui::render::Overlay;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(state, key),
        Event::Resize(width, height) => {
            state.set_viewport(width, height);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> EventResult {
    // Handle overlay keys first
    if state.overlay.is_some() {
        return handle_overlay_key(state, key);
    }

    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Help and menu
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.toggle_help();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('m') => {
            state.open_menu();
            EventResult::NeedsRedraw
        }

        // In the hero, Down is an advance trigger, not a scroll key.
        KeyCode::Down if state.current_section() == Section::Hero => {
            state.advance_identity(Instant::now());
            EventResult::NeedsRedraw
        }

        // Free scrolling
        KeyCode::Char('j') | KeyCode::Down => {
            state.scroll_lines(1.0);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.scroll_lines(-1.0);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            state.scroll_lines(10.0);
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            state.scroll_lines(-10.0);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.scroll_lines(10.0);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.scroll_lines(-10.0);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            state.scroll_to_top();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            state.scroll_to_bottom();
            EventResult::NeedsRedraw
        }

        // Section jumps (the nav links)
        KeyCode::Tab => {
            let next = (state.current_section().index() + 1).min(Section::ALL.len() - 1);
            state.jump_to(Section::ALL[next]);
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab => {
            let previous = state.current_section().index().saturating_sub(1);
            state.jump_to(Section::ALL[previous]);
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c.to_digit(10).unwrap_or(1) as usize - 1;
            state.jump_to(Section::ALL[index]);
            EventResult::NeedsRedraw
        }

        // Section-scoped keys
        _ => handle_section_keys(state, key),
    }
}

/// Keys that only apply to the section currently at the top of the viewport.
fn handle_section_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.current_section() {
        Section::Hero => handle_hero_keys(state, key),
        Section::Projects => handle_projects_keys(state, key),
        _ => EventResult::Continue,
    }
}

/// Hero keys: the advance control and "view my work".
fn handle_hero_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Right => {
            state.advance_identity(Instant::now());
            EventResult::NeedsRedraw
        }
        KeyCode::Char('v') => {
            state.view_work(Instant::now());
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Projects keys: the filter row.
fn handle_projects_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left => {
            state.cycle_filter(-1);
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            state.cycle_filter(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('a') => {
            state.filter.show_all();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle key when overlay is open
fn handle_overlay_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    let menu_open = matches!(state.overlay, Some(Overlay::Menu));

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.close_overlay();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down if menu_open => {
            state.menu_down();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up if menu_open => {
            state.menu_up();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c @ '1'..='5') if menu_open => {
            state.menu_selected = c.to_digit(10).unwrap_or(1) as usize - 1;
            state.menu_select();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if menu_open {
                state.menu_select();
            } else {
                state.close_overlay();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('m') if menu_open => {
            state.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::content::sample_profile;
    use std::time::Duration;

    fn app() -> AppState {
        AppState::with_selection(sample_profile(), 0).unwrap()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn settle(state: &mut AppState) {
        let mut now = Instant::now();
        for _ in 0..100 {
            now += Duration::from_millis(50);
            state.tick(now);
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), EventResult::Quit);
        assert_eq!(handle_event(&mut state, ctrl('c')), EventResult::Quit);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = app();
        handle_event(&mut state, Event::Resize(80, 30));
        assert_eq!(state.viewport_height, 27);
    }

    #[test]
    fn test_help_toggles() {
        let mut state = app();
        handle_event(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.overlay, Some(Overlay::Help));
        handle_event(&mut state, key(KeyCode::Esc));
        assert_eq!(state.overlay, None);
    }

    #[test]
    fn test_menu_flow() {
        let mut state = app();
        handle_event(&mut state, key(KeyCode::Char('m')));
        assert_eq!(state.overlay, Some(Overlay::Menu));

        handle_event(&mut state, key(KeyCode::Char('j')));
        handle_event(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.menu_selected, Section::Projects.index());

        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.overlay, None);
        assert!(state.scroll.target() > 0.0);
    }

    #[test]
    fn test_digit_jump() {
        let mut state = app();
        handle_event(&mut state, key(KeyCode::Char('3')));
        assert!(state.scroll.target() > 0.0);
    }

    #[test]
    fn test_space_advances_identity_in_hero() {
        let mut state = app();
        assert_eq!(state.current_section(), Section::Hero);
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.rotator.selection(), 1);
    }

    #[test]
    fn test_down_advances_identity_in_hero() {
        let mut state = app();
        assert_eq!(state.current_section(), Section::Hero);
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.rotator.selection(), 1);
        // The key is consumed by the rotator, not the scroll.
        assert_eq!(state.scroll.target(), 0.0);
    }

    #[test]
    fn test_down_scrolls_outside_hero() {
        let mut state = app();
        state.viewport_height = 10;
        state.jump_to(Section::About);
        settle(&mut state);
        let target = state.scroll.target();

        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.rotator.selection(), 0);
        assert_eq!(state.scroll.target(), target + 1.0);
    }

    #[test]
    fn test_space_does_nothing_outside_hero() {
        let mut state = app();
        state.viewport_height = 10;
        state.jump_to(Section::About);
        settle(&mut state);
        assert_eq!(state.current_section(), Section::About);

        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.rotator.selection(), 0);
    }

    #[test]
    fn test_filter_keys_in_projects() {
        let mut state = app();
        state.viewport_height = 10;
        state.jump_to(Section::Projects);
        settle(&mut state);
        assert_eq!(state.current_section(), Section::Projects);

        // Startup filter is the initial role, "designer".
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.filter.active(), "engineer");
        handle_event(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.filter.active(), "all");
    }

    #[test]
    fn test_view_work_key_in_hero() {
        let mut state = app();
        state.viewport_height = 10;
        handle_event(&mut state, key(KeyCode::Char('v')));
        assert!(state.pending_show_all);
        settle(&mut state);
        assert_eq!(state.filter.active(), "all");
        assert_eq!(state.current_section(), Section::Projects);
    }

    #[test]
    fn test_scroll_keys_move_target() {
        let mut state = app();
        state.viewport_height = 10;
        handle_event(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.scroll.target(), 1.0);
        handle_event(&mut state, key(KeyCode::Char('G')));
        assert!(state.scroll.target() > 1.0);
        handle_event(&mut state, key(KeyCode::Char('g')));
        assert_eq!(state.scroll.target(), 0.0);
    }
}
