//! Terminal user interface

pub mod input;
pub mod render;

use crate::app::{App, Event, Handler};
use crate::persona::Persona;
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// Run the picker until the user closes it.
///
/// Returns the persona selected at exit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to
pub fn run(mut app: App) -> Result<Option<Persona>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval());
    info!("Picker started");

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(app.selected_persona().cloned())
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.relayout(
            render::picker_rect(Rect::new(0, 0, size.width, size.height)),
            Instant::now(),
        );
        terminal.draw(|frame| render::render(frame, app))?;

        let event = event_handler.next()?;
        let now = Instant::now();
        match event {
            Event::Tick => {}
            Event::Key(key) => input::handle_key_event(app, key),
            Event::Mouse(mouse) => input::handle_mouse_event(app, mouse, now),
            Event::FocusLost => app.pointer_moved(None, now),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
        }
        app.tick(now);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
