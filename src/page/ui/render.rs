//! Main render function for the portfolio page

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::{AppLayout, centered_rect};
use super::widgets::{HotkeyBarWidget, NavBarWidget, PageWidget, StatusBarWidget};
use crate::page::app::{AppState, Section};

/// UI overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Section menu (the mobile nav menu).
    Menu,
    Help,
}

/// Render the main application
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    frame.render_widget(NavBarWidget::new(state), layout.nav_bar);
    frame.render_widget(PageWidget::new(state), layout.page_area);
    frame.render_widget(
        StatusBarWidget::new(state).message(state.status_message.as_deref()),
        layout.status_bar,
    );
    frame.render_widget(HotkeyBarWidget::new(state), layout.hotkey_bar);

    if let Some(overlay) = state.overlay {
        match overlay {
            Overlay::Menu => render_menu_overlay(frame, area, state),
            Overlay::Help => render_help_overlay(frame, area, state),
        }
    }
}

/// Render the section menu overlay
fn render_menu_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(30, 40, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" menu ")
        .borders(Borders::ALL)
        .border_style(state.theme.border_style(true));

    let entries: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let marker = if index == state.menu_selected { "▸" } else { " " };
            let style = if index == state.menu_selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                state.theme.text_style()
            };
            Line::from(Span::styled(
                format!(" {marker} {}  {}", index + 1, section.title()),
                style,
            ))
        })
        .collect();

    let paragraph = Paragraph::new(entries).block(block);
    frame.render_widget(paragraph, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help - Press Esc to close ")
        .borders(Borders::ALL)
        .border_style(state.theme.border_style(true));

    let help_text = vec![
        Line::from(Span::styled(
            "Global Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  ? / F1    - Show this help"),
        Line::from("  Esc       - Close overlay"),
        Line::from("  q, Ctrl+C - Quit"),
        Line::from("  j/k, ↑/↓  - Scroll the page"),
        Line::from("  g / G     - Top / bottom"),
        Line::from("  1-5       - Jump to a section"),
        Line::from("  Tab       - Next section"),
        Line::from("  m         - Open the section menu"),
        Line::from(""),
        Line::from(Span::styled(
            "Home",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Space/→/↓ - Next identity word"),
        Line::from("  v         - View my work (all projects)"),
        Line::from(""),
        Line::from(Span::styled(
            "Projects",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  ← / →     - Previous / next filter"),
        Line::from("  a         - Show all projects"),
    ];

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, popup_area);
}
