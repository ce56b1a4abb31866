//! The scrollable virtual page
//!
//! Sections are built as styled lines, stacked with a one-row gap, and the
//! viewport shows a window into the stack at the current scroll offset.
//! Section heights are derived from the same line builders, so reveal
//! triggers and jump targets always agree with what is drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::{about, contact, hero, projects, skills};
use crate::page::app::{AppState, Section};

/// Blank rows between sections.
const SECTION_GAP: u16 = 1;

/// Build the lines of one section.
pub fn section_lines(state: &AppState, section: Section) -> Vec<Line<'static>> {
    match section {
        Section::Hero => hero::lines(state),
        Section::About => about::lines(state),
        Section::Projects => projects::lines(state),
        Section::Skills => skills::lines(state),
        Section::Contact => contact::lines(state),
    }
}

/// Top offset and height of every section, in page rows.
///
/// Heights track content, so filtering cards moves the sections below, the
/// way a grid reflows when cards collapse.
pub fn section_extents(state: &AppState) -> Vec<(Section, u16, u16)> {
    let mut extents = Vec::with_capacity(Section::ALL.len());
    let mut top = 0u16;
    for section in Section::ALL {
        let height = section_lines(state, section).len() as u16;
        extents.push((section, top, height));
        top += height + SECTION_GAP;
    }
    extents
}

/// Dim a section mid-fade, or blank it out entirely before its reveal.
///
/// Hidden sections keep their height so extents stay stable.
fn apply_reveal(lines: Vec<Line<'static>>, progress: f32) -> Vec<Line<'static>> {
    if progress >= 1.0 {
        return lines;
    }
    if progress <= 0.0 {
        return lines.iter().map(|_| Line::default()).collect();
    }
    lines
        .into_iter()
        .map(|mut line| {
            for span in &mut line.spans {
                span.style = span.style.add_modifier(Modifier::DIM);
            }
            line
        })
        .collect()
}

/// Widget rendering the assembled page at the current scroll offset.
pub struct PageWidget<'a> {
    state: &'a AppState,
}

impl<'a> PageWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let mut lines: Vec<Line> = Vec::new();

        for section in Section::ALL {
            let mut built = section_lines(state, section);
            if section != Section::Hero {
                let progress = state.reveals[section.index()].progress(state.now);
                built = apply_reveal(built, progress);
            }
            lines.extend(built);
            for _ in 0..SECTION_GAP {
                lines.push(Line::default());
            }
        }

        let paragraph = Paragraph::new(lines).scroll((state.scroll.offset_rows(), 0));
        paragraph.render(area, buf);
    }
}
