//! Terminal portfolio page - Entry Point
//!
//! Renders a personal portfolio as a scrollable terminal page, with a
//! rotating identity word that keeps the project filter in sync.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use folio::page::app::AppState;
use folio::page::content::sample_profile;
use folio::page::events::{EventResult, handle_event};
use folio::page::ui::render::render;

fn main() -> io::Result<()> {
    // Validate content before touching the terminal so a configuration
    // error prints as a plain message.
    let mut app = match AppState::new(sample_profile()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("invalid portfolio content: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()> {
    let tick_rate = Duration::from_millis(50);

    let size = terminal.size()?;
    app.set_viewport(size.width, size.height);

    loop {
        // Draw
        terminal.draw(|frame| render(frame, app))?;

        // Handle events with timeout for animations
        if event::poll(tick_rate)? {
            let event = event::read()?;

            match handle_event(app, event) {
                EventResult::Quit => break,
                EventResult::Continue | EventResult::NeedsRedraw => {}
            }
        }

        // Tick for animations
        app.tick(Instant::now());
    }

    Ok(())
}
