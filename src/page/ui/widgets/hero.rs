//! Hero section: name, identity word, and floating decorations

use ratatui::text::{Line, Span};

use crate::page::app::AppState;
use crate::page::motion::parallax_shift;

/// Decorative chips that drift with the scroll offset.
const FLOATING_CHIPS: [&str; 3] = ["· grids ·", "· graphs ·", "· glyphs ·"];

/// Build the hero section's lines.
pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let display = state.rotator.display();
    let word_style = theme.identity_word_style(display.active_description, display.changing);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}", state.profile.name),
            theme.heading_style(),
        )),
        Line::from(Span::styled(
            format!("  {}", state.profile.tagline),
            theme.dim_style(),
        )),
        Line::default(),
    ];

    // Floating decorations, drifting right as the page scrolls away.
    for (index, chip) in FLOATING_CHIPS.iter().enumerate() {
        let shift = parallax_shift(state.scroll.offset(), index);
        let indent = usize::from(4 + index as u16 * 6 + shift);
        lines.push(Line::from(Span::styled(
            format!("{}{}", " ".repeat(indent), chip),
            theme.dim_style(),
        )));
    }
    lines.push(Line::default());

    // The identity line: "I am a <word>   [ and → ]"
    lines.push(Line::from(vec![
        Span::styled("  I am ".to_string(), theme.text_style()),
        Span::styled(format!("{} ", display.article.as_str()), theme.text_style()),
        Span::styled(display.word.clone(), word_style),
        Span::raw("   "),
        Span::styled(
            "[ and → ]".to_string(),
            theme.button_style(state.press_flash.is_active(state.now)),
        ),
    ]));
    lines.push(Line::default());

    // Exactly one role description is active at a time.
    let description = state
        .profile
        .roles
        .description(display.active_description)
        .to_string();
    lines.push(Line::from(Span::styled(
        format!("  {description}"),
        theme.accent_style(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  [ view my work ↓ ]".to_string(),
        theme.button_style(false),
    )));

    lines
}
