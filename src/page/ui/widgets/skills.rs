//! Skills section with animated proficiency bars

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::page::app::AppState;

/// Width of a full bar in cells.
const BAR_WIDTH: u16 = 30;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let mut lines = vec![
        Line::from(Span::styled("  SKILLS".to_string(), theme.heading_style())),
        Line::default(),
    ];

    for skill in &state.profile.skills {
        let shown = state.skill_bars.level_now(state.now, skill.level);
        let filled = (u16::from(shown) * BAR_WIDTH / 100).min(BAR_WIDTH);

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<26}", skill.name), theme.text_style()),
            Span::styled(format!("{shown:>3}%"), theme.accent_style()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "█".repeat(usize::from(filled)),
                Style::default().fg(theme.bar_fill),
            ),
            Span::styled(
                "░".repeat(usize::from(BAR_WIDTH - filled)),
                Style::default().fg(theme.bar_empty),
            ),
        ]));
    }

    lines
}
