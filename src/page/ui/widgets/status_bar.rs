//! Status bar and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::page::app::{AppState, Section};
use crate::page::ui::render::Overlay;

/// Status bar showing the current section, identity, and filter.
pub struct StatusBarWidget<'a> {
    state: &'a AppState,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = &state.theme;
        let display = state.rotator.display();

        let section_text = state.current_section().title().to_uppercase();
        let word_style = Style::default()
            .fg(theme.role_color(display.active_description))
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(
                format!("-- {section_text} --"),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | I am "),
            Span::raw(format!("{} ", display.article.as_str())),
            Span::styled(display.word.clone(), word_style),
            Span::raw(" | filter: "),
            Span::styled(state.filter.active().to_string(), theme.accent_style()),
        ];

        if let Some(message) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                message.to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;

        let hotkeys: Vec<(&str, bool)> = match state.overlay {
            Some(Overlay::Menu) => vec![
                ("j/k:choose", true),
                ("Enter:go", true),
                ("Esc:close", false),
            ],
            Some(Overlay::Help) => vec![("Esc:close", true)],
            None => match state.current_section() {
                Section::Hero => vec![
                    ("Space:next role", true),
                    ("v:view work", true),
                    ("j/k:scroll", true),
                    ("1-5:sections", false),
                    ("?:help", false),
                ],
                Section::Projects => vec![
                    ("←/→:filter", true),
                    ("a:all", true),
                    ("j/k:scroll", true),
                    ("1-5:sections", false),
                    ("?:help", false),
                ],
                _ => vec![
                    ("j/k:scroll", true),
                    ("g/G:top/bottom", true),
                    ("1-5:sections", false),
                    ("m:menu", false),
                    ("?:help", false),
                ],
            },
        };

        let spans: Vec<Span> = hotkeys
            .iter()
            .flat_map(|(text, primary)| {
                let style = if *primary {
                    Style::default()
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };
                vec![Span::styled(*text, style), Span::raw("  ")]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
