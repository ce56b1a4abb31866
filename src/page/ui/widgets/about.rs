//! About section

use ratatui::text::{Line, Span};

use crate::page::app::AppState;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let mut lines = vec![
        Line::from(Span::styled("  ABOUT".to_string(), theme.heading_style())),
        Line::default(),
    ];
    for paragraph in &state.profile.about {
        lines.push(Line::from(Span::styled(
            format!("  {paragraph}"),
            theme.text_style(),
        )));
    }
    lines
}
