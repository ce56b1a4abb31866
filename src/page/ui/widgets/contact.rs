//! Contact section

use ratatui::text::{Line, Span};

use crate::page::app::AppState;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let mut lines = vec![
        Line::from(Span::styled("  CONTACT".to_string(), theme.heading_style())),
        Line::default(),
    ];

    for contact in &state.profile.contacts {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", contact.label), theme.dim_style()),
            Span::styled(contact.value.clone(), theme.accent_style()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Say hello. I answer faster than the page scrolls.".to_string(),
        theme.text_style(),
    )));
    lines
}
