//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::TuiApp;
use crate::views;

/// How long to wait for input before checking on the query again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal
                .draw(|frame| draw(frame, app))
                .map_err(|e| format!("draw error: {e}"))?;
            dirty = false;
        }

        if app.should_quit {
            return Ok(());
        }

        if app.tick() {
            dirty = true;
        }

        if event::poll(POLL_INTERVAL).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
            dirty = true;
        }
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        Event::Mouse(mouse) => app.handle_mouse(mouse),
        _ => {}
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Tables
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_title_bar(frame, app, chunks[0]);
    views::input::draw(frame, app, chunks[1]);
    views::tables::draw(frame, app, chunks[2]);
    views::draw_status_bar(frame, app, chunks[3]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
