//! Navigation bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::page::app::{AppState, Section};

/// One-row nav bar: name, numbered section links, menu hint.
///
/// Switches to a solid style once the page is scrolled, like a sticky
/// nav picking up a background past the fold.
pub struct NavBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = &state.theme;
        let base = theme.nav_style(state.nav_emphasized());
        let current = state.current_section();

        let mut spans = vec![
            Span::styled(format!(" {} ", state.profile.name), theme.heading_style()),
            Span::styled("│ ".to_string(), base),
        ];
        for (number, section) in Section::ALL.iter().enumerate() {
            let style = if *section == current {
                base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                base
            };
            spans.push(Span::styled(
                format!("{}:{}", number + 1, section.title()),
                style,
            ));
            spans.push(Span::styled("  ".to_string(), base));
        }
        spans.push(Span::styled("m:menu".to_string(), theme.dim_style()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
