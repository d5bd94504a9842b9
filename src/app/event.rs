//! Terminal input the picker reacts to

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;

/// One step of picker input
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Nothing arrived within the poll interval; tooltip timers still advance
    Tick,
    /// Focus movement, selection or quit
    Key(KeyEvent),
    /// Pointer movement, click or wheel
    Mouse(MouseEvent),
    /// The pointer can no longer be tracked, so hovered triggers are left
    FocusLost,
    /// New terminal size in cells
    Resize(u16, u16),
}

/// Waits up to one poll interval for terminal input.
///
/// Keeping the interval short lets hover deadlines fire close to on time
/// even when no input arrives.
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Wait at most `poll_interval` per call to [`Handler::next`]
    #[must_use]
    pub const fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Block until input arrives or the interval runs out.
    ///
    /// Terminal events the picker ignores (focus gained, paste) come back
    /// as [`Event::Tick`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.poll_interval)? {
            return Ok(Event::Tick);
        }
        Ok(match event::read()? {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
            CrosstermEvent::FocusLost => Event::FocusLost,
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }

    /// Longest wait per call
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}
