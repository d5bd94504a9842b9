//! TUI rendering

use crate::app::App;
use crate::ui::{StatusBar, TooltipPopup};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Height cap of the picker modal
const PICKER_MAX_HEIGHT: u16 = 36;

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Split the frame into the main area and the one-line status bar
#[must_use]
pub fn main_and_status(frame_area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame_area);
    (chunks[0], chunks[1])
}

/// Area of the picker modal for a given frame size.
///
/// Input handling lays the app out with this before drawing so clicks
/// and tooltips see the same geometry as the render.
#[must_use]
pub fn picker_rect(frame_area: Rect) -> Rect {
    let (main, _) = main_and_status(frame_area);
    let height = main.height.saturating_sub(2).min(PICKER_MAX_HEIGHT);
    centered_rect_absolute(80, height, main)
}

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let (main, status_area) = main_and_status(frame.area());
    frame.render_widget(Block::default().style(Style::default().bg(Color::Reset)), main);

    let area = app.picker_area();
    match app.picker() {
        Some(picker) => frame.render_widget(&picker, area),
        None => {
            let empty = Paragraph::new("No assistants available").block(
                Block::default()
                    .title(" Change Assistant ")
                    .borders(Borders::ALL),
            );
            frame.render_widget(Clear, area);
            frame.render_widget(empty, area);
        }
    }

    let status = match (&app.status, app.selected_persona()) {
        (Some(message), _) => StatusBar::status(message.clone()),
        (None, Some(persona)) => StatusBar::normal(persona.name.clone()),
        (None, None) => StatusBar::status("No assistants available"),
    };
    frame.render_widget(status.to_paragraph(), status_area);

    if let Some(tooltip) = app.tooltips().visible() {
        frame.render_widget(TooltipPopup::new(tooltip), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::persona::Catalog;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    #[test]
    fn test_centered_rect_absolute() {
        let area = centered_rect_absolute(50, 10, Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(25, 10, 50, 10));
    }

    #[test]
    fn test_picker_rect_leaves_status_line() {
        let frame = Rect::new(0, 0, 100, 30);
        let picker = picker_rect(frame);
        let (_, status) = main_and_status(frame);
        assert!(picker.bottom() <= status.y);
    }

    #[test]
    fn test_render_demo() -> Result<(), Box<dyn std::error::Error>> {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend)?;
        let mut app = App::new(Config::default(), Catalog::demo());
        app.relayout(picker_rect(Rect::new(0, 0, 100, 40)), Instant::now());

        terminal.draw(|frame| render(frame, &app))?;

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(content.contains("Change Assistant"));
        assert!(content.contains("Paraphrase"));
        Ok(())
    }

    #[test]
    fn test_render_empty_catalog() -> Result<(), Box<dyn std::error::Error>> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;
        let mut app = App::new(Config::default(), Catalog::default());
        app.relayout(picker_rect(Rect::new(0, 0, 80, 24)), Instant::now());

        terminal.draw(|frame| render(frame, &app))?;

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(content.contains("No assistants available"));
        Ok(())
    }
}
