//! Color theme for the portfolio page

use ratatui::style::{Color, Modifier, Style};

/// Colors and styles used across the page.
#[derive(Debug, Clone)]
pub struct PageTheme {
    pub heading: Color,
    pub text: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub bar_fill: Color,
    pub bar_empty: Color,
    /// Role name colors, cycled by role index (the per-role gradient).
    pub role_colors: Vec<Color>,
}

impl Default for PageTheme {
    fn default() -> Self {
        Self {
            heading: Color::White,
            text: Color::Gray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            bar_fill: Color::Cyan,
            bar_empty: Color::DarkGray,
            role_colors: vec![
                Color::Magenta,
                Color::Cyan,
                Color::Yellow,
                Color::Green,
                Color::Red,
                Color::Blue,
            ],
        }
    }
}

impl PageTheme {
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::DIM)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Color for the role at `index`, cycling if there are more roles than
    /// configured colors.
    pub fn role_color(&self, index: usize) -> Color {
        self.role_colors[index % self.role_colors.len()]
    }

    /// Style of the identity word, dimmed while in its changing state.
    pub fn identity_word_style(&self, role_index: usize, changing: bool) -> Style {
        let style = Style::default()
            .fg(self.role_color(role_index))
            .add_modifier(Modifier::BOLD);
        if changing {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Nav bar style; emphasized once the page is scrolled past the top.
    pub fn nav_style(&self, emphasized: bool) -> Style {
        if emphasized {
            Style::default()
                .fg(self.heading)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Style of the advance control, reversed while the press flash is live.
    pub fn button_style(&self, pressed: bool) -> Style {
        let style = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        if pressed {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    /// Style of a filter entry in the projects section.
    pub fn filter_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.text).add_modifier(Modifier::DIM)
        }
    }
}
