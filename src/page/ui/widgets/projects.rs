//! Projects section: filter row and card grid

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::page::app::AppState;
use crate::page::content::FILTER_ALL;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let mut lines = vec![
        Line::from(Span::styled("  PROJECTS".to_string(), theme.heading_style())),
        Line::default(),
        filter_row(state),
        Line::default(),
    ];

    let fading = state.filter.fade_progress(state.now) < 1.0;
    for project in &state.profile.projects {
        if !state.filter.is_visible(project) {
            continue;
        }

        let role_index = state
            .profile
            .roles
            .roles()
            .iter()
            .position(|role| role == &project.category)
            .unwrap_or(0);
        let mut title_style = Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD);
        let mut body_style = theme.text_style();
        if fading {
            title_style = title_style.add_modifier(Modifier::DIM);
            body_style = body_style.add_modifier(Modifier::DIM);
        }

        let mut title_spans = vec![
            Span::styled("  ▪ ".to_string(), theme.accent_style()),
            Span::styled(project.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.category),
                Style::default().fg(theme.role_color(role_index)),
            ),
        ];
        if project.coming_soon {
            title_spans.push(Span::raw("  "));
            title_spans.push(Span::styled(
                "coming soon".to_string(),
                theme.dim_style().add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            format!("    {}", project.blurb),
            body_style,
        )));
        lines.push(Line::default());
    }

    lines
}

/// The row of filter values, with the active one highlighted.
fn filter_row(state: &AppState) -> Line<'static> {
    let theme = &state.theme;
    let mut spans = vec![Span::styled("  filter: ".to_string(), theme.dim_style())];

    let mut options = vec![FILTER_ALL.to_string()];
    options.extend(state.profile.roles.roles().iter().cloned());
    for option in options {
        let active = option == state.filter.active();
        spans.push(Span::styled(option, theme.filter_style(active)));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
