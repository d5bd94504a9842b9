//! Integration tests for TUI rendering
//!
//! Uses ratatui's `TestBackend` to verify rendering without a real terminal.

use std::time::{Duration, Instant};

use assistant_picker::config::Config;
use assistant_picker::persona::{Catalog, Persona};
use assistant_picker::tooltip::{HoverTooltip, TooltipOptions};
use assistant_picker::tui::render::{picker_rect, render};
use assistant_picker::ui::{AssistantPicker, TooltipPopup};
use assistant_picker::App;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;

fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            result.push_str(buf[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

fn create_test_app(width: u16, height: u16) -> App {
    let mut app = App::new(Config::default(), Catalog::demo());
    app.relayout(picker_rect(Rect::new(0, 0, width, height)), Instant::now());
    app
}

/// Border color of each visible card, taken from its top-left corner
fn card_border_colors(picker: &AssistantPicker<'_>, area: Rect, buf: &Buffer) -> Vec<(usize, Color)> {
    picker
        .card_areas(area)
        .into_iter()
        .map(|(index, card)| (index, buf[(card.x, card.y)].fg))
        .collect()
}

// =============================================================================
// Tests for the picker grid
// =============================================================================

#[test]
fn test_picker_highlights_exactly_the_selected_card() {
    let catalog = Catalog::demo();
    let area = Rect::new(0, 0, 90, 40);

    for selected in &catalog.personas {
        let picker = AssistantPicker::new(selected, &catalog.personas, "gpt-4-turbo");
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);

        let colors = card_border_colors(&picker, area, &buf);
        let selected_index = catalog
            .personas
            .iter()
            .position(|persona| persona.id == selected.id);
        let accent = colors
            .iter()
            .find(|(index, _)| Some(*index) == selected_index)
            .map(|(_, color)| *color);
        assert!(accent.is_some(), "selected card is laid out");

        let highlighted: Vec<usize> = colors
            .iter()
            .filter(|(_, color)| Some(*color) == accent)
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(highlighted, selected_index.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_rerender_is_stable() {
    let catalog = Catalog::demo();
    let area = Rect::new(0, 0, 90, 40);
    let picker = AssistantPicker::new(&catalog.personas[2], &catalog.personas, "gpt-4-turbo");

    let mut first = Buffer::empty(area);
    let mut second = Buffer::empty(area);
    (&picker).render(area, &mut first);
    (&picker).render(area, &mut second);

    assert_eq!(first, second);
}

#[test]
fn test_picker_shows_badges_and_models() {
    let catalog = Catalog::demo();
    let area = Rect::new(0, 0, 90, 40);
    let picker = AssistantPicker::new(&catalog.personas[0], &catalog.personas, "gpt-4-turbo");
    let mut buf = Buffer::empty(area);
    picker.render(area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Change Assistant"), "Should have title");
    assert!(content.contains("Search"), "Known tool gets its label");
    assert!(content.contains("Image Generation"));
    assert!(content.contains("InternetSearchTool"), "Unknown tool passes through");
    assert!(content.contains("Engineering Wiki"));
    assert!(content.contains("Default Model: gpt-4o"), "Override wins");
    assert!(content.contains("Default Model: gpt-4-turbo"), "Fallback model");
}

#[test]
fn test_click_reports_clicked_persona_without_touching_picker() {
    let catalog = Catalog::demo();
    let area = Rect::new(0, 0, 90, 40);
    let picker = AssistantPicker::new(&catalog.personas[0], &catalog.personas, "gpt-4-turbo");
    let (_, card) = picker.card_areas(area)[1];

    let mut calls: Vec<&Persona> = Vec::new();
    let handled = picker.handle_click(area, Position::new(card.x + 2, card.y + 2), |persona| {
        calls.push(persona);
    });

    assert!(handled);
    assert_eq!(calls.len(), 1);
    assert!(std::ptr::eq(calls[0], &catalog.personas[1]));
    assert!(picker.is_selected(&catalog.personas[0]));
}

// =============================================================================
// Tests for the full screen
// =============================================================================

#[test]
fn test_full_render_with_status_bar() -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
    let mut app = create_test_app(100, 40);
    app.select(3);

    terminal.draw(|frame| render(frame, &app))?;

    let content = buffer_to_string(terminal.backend().buffer());
    assert!(content.contains("Selected Plain"));
    Ok(())
}

#[test]
fn test_icon_hover_renders_description_after_delay() -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
    let mut app = create_test_app(100, 40);
    let icon = app
        .picker()
        .map(|picker| AssistantPicker::icon_area(picker.card_areas(app.picker_area())[3].1))
        .unwrap_or_default();

    let t0 = Instant::now();
    app.pointer_moved(Some(Position::new(icon.x, icon.y)), t0);
    app.tick(t0 + Duration::from_millis(500));
    terminal.draw(|frame| render(frame, &app))?;
    let content = buffer_to_string(terminal.backend().buffer());
    assert!(!content.contains("directly, no tools"), "Icon delay is one second");

    app.tick(t0 + Duration::from_millis(1000));
    terminal.draw(|frame| render(frame, &app))?;
    let content = buffer_to_string(terminal.backend().buffer());
    assert!(content.contains("directly, no tools"));
    Ok(())
}

// =============================================================================
// Tests for the tooltip popup
// =============================================================================

#[test]
fn test_tooltip_popup_renders_light_box() {
    let mut tooltip = HoverTooltip::new("Hello")
        .delay(Duration::ZERO)
        .options(TooltipOptions {
            light: true,
            ..TooltipOptions::default()
        })
        .trigger(Rect::new(10, 2, 4, 1));
    let now = Instant::now();
    tooltip.pointer_enter(now, None);
    tooltip.tick(now, None);

    let area = Rect::new(0, 0, 60, 20);
    let mut buf = Buffer::empty(area);
    TooltipPopup::new(&tooltip).render(area, &mut buf);

    assert!(buffer_to_string(&buf).contains("Hello"));
}
