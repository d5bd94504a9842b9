//! Assistant picker grid

use crate::config::ToolLabels;
use crate::persona::Persona;
use crate::ui::color::Palette;
use crate::ui::text::{clamp_lines, truncate_with_ellipsis};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget as RenderWidget},
};
use std::borrow::Cow;

/// Below this inner width the grid collapses to one column
const TWO_COLUMN_MIN_WIDTH: u16 = 48;
const COLUMN_GAP: u16 = 2;
const DESCRIPTION_LINES: u16 = 2;
const DOCUMENT_SET_ICON: &str = "◆";
const TITLE: &str = " Change Assistant ";

/// Widget rendering one selectable card per persona.
///
/// Selection is owned by the caller: the widget only reads it to highlight
/// a card and reports clicks through [`Widget::handle_click`].
#[derive(Debug)]
pub struct Widget<'a> {
    selected: &'a Persona,
    personas: &'a [Persona],
    fallback_model: &'a str,
    tool_labels: Cow<'a, ToolLabels>,
    focused: Option<usize>,
    scroll: usize,
}

impl<'a> Widget<'a> {
    /// Create a picker over `personas` with `selected` highlighted
    #[must_use]
    pub fn new(selected: &'a Persona, personas: &'a [Persona], fallback_model: &'a str) -> Self {
        Self {
            selected,
            personas,
            fallback_model,
            tool_labels: Cow::Owned(ToolLabels::default()),
            focused: None,
            scroll: 0,
        }
    }

    /// Use a custom tool label table
    #[must_use]
    pub fn tool_labels(mut self, labels: &'a ToolLabels) -> Self {
        self.tool_labels = Cow::Borrowed(labels);
        self
    }

    /// Mark a card as keyboard-focused
    #[must_use]
    pub const fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    /// First grid row to show
    #[must_use]
    pub const fn scroll(mut self, row: usize) -> Self {
        self.scroll = row;
        self
    }

    /// Whether `persona` is the current selection
    #[must_use]
    pub const fn is_selected(&self, persona: &Persona) -> bool {
        persona.id == self.selected.id
    }

    /// Number of grid columns used inside `area`
    #[must_use]
    pub fn columns(area: Rect) -> usize {
        if grid_area(area).width >= TWO_COLUMN_MIN_WIDTH {
            2
        } else {
            1
        }
    }

    /// Height of the card for `persona`, borders included
    #[must_use]
    pub fn card_height(persona: &Persona) -> u16 {
        let tools = u16::from(!persona.tools.is_empty());
        let document_sets = u16::from(!persona.document_sets.is_empty());
        // borders + header + description + default model
        2 + 1 + tools + DESCRIPTION_LINES + document_sets + 1
    }

    /// On-screen rectangles of the fully visible cards, with their persona index
    #[must_use]
    pub fn card_areas(&self, area: Rect) -> Vec<(usize, Rect)> {
        let grid = grid_area(area);
        let columns = Self::columns(area);
        let gaps = COLUMN_GAP * u16::try_from(columns - 1).unwrap_or(0);
        let column_width = grid.width.saturating_sub(gaps) / u16::try_from(columns).unwrap_or(1);

        let mut areas = Vec::new();
        let mut y = grid.y;
        for (row, chunk) in self.personas.chunks(columns).enumerate().skip(self.scroll) {
            let height = chunk.iter().map(Self::card_height).max().unwrap_or(0);
            if y.saturating_add(height) > grid.bottom() {
                break;
            }

            let mut x = grid.x;
            for (col, _) in chunk.iter().enumerate() {
                areas.push((row * columns + col, Rect::new(x, y, column_width, height)));
                x = x.saturating_add(column_width + COLUMN_GAP);
            }
            y = y.saturating_add(height);
        }
        areas
    }

    /// Icon cell range inside a card
    #[must_use]
    pub const fn icon_area(card: Rect) -> Rect {
        Rect::new(card.x.saturating_add(1), card.y.saturating_add(1), 2, 1)
    }

    /// Row of the `Default Model:` line inside a card
    #[must_use]
    pub const fn model_area(card: Rect) -> Rect {
        Rect::new(
            card.x.saturating_add(1),
            card.y.saturating_add(card.height).saturating_sub(2),
            card.width.saturating_sub(2),
            1,
        )
    }

    /// Persona under a pointer position
    #[must_use]
    pub fn card_at(&self, area: Rect, position: Position) -> Option<&'a Persona> {
        self.card_areas(area)
            .into_iter()
            .find(|(_, card)| card.contains(position))
            .and_then(|(index, _)| self.personas.get(index))
    }

    /// Forward a click to `on_select` if it lands on a card.
    ///
    /// Returns whether a card was hit. The widget itself is not changed.
    pub fn handle_click(
        &self,
        area: Rect,
        position: Position,
        on_select: impl FnOnce(&'a Persona),
    ) -> bool {
        match self.card_at(area, position) {
            Some(persona) => {
                on_select(persona);
                true
            }
            None => false,
        }
    }

    fn card_lines(&self, persona: &'a Persona, inner_width: usize) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        let name_width = inner_width.saturating_sub(3);
        lines.push(Line::from(vec![
            Span::styled(
                "  ",
                Style::default().bg(persona.icon_color(Palette::Dark).into()),
            ),
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(&persona.name, name_width),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        if !persona.tools.is_empty() {
            let mut spans = Vec::new();
            for tool in &persona.tools {
                let badge = self.tool_labels.resolve(&tool.name);
                let text = badge.icon.map_or_else(
                    || format!(" {} ", badge.label),
                    |icon| format!(" {icon} {} ", badge.label),
                );
                if !spans.is_empty() {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    text,
                    Style::default().fg(theme::TEXT_DIM).bg(theme::BADGE_BG),
                ));
            }
            lines.push(Line::from(spans));
        }

        let mut description = clamp_lines(
            &persona.description,
            inner_width,
            usize::from(DESCRIPTION_LINES),
        );
        description.resize(usize::from(DESCRIPTION_LINES), String::new());
        lines.extend(
            description
                .into_iter()
                .map(|line| Line::styled(line, Style::default().fg(theme::TEXT_DIM))),
        );

        if !persona.document_sets.is_empty() {
            let mut spans = vec![Span::styled(
                "Document Sets:",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )];
            for set in &persona.document_sets {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!(" {DOCUMENT_SET_ICON} {} ", set.name),
                    Style::default().fg(theme::TEXT_DIM).bg(theme::BADGE_BG),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![
            Span::styled(
                "Default Model: ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                persona.display_model(self.fallback_model).to_string(),
                Style::default()
                    .fg(theme::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));

        lines
    }

    fn render_card(&self, index: usize, persona: &'a Persona, card: Rect, buf: &mut Buffer) {
        let border_color = if self.is_selected(persona) {
            theme::ACCENT
        } else {
            theme::BORDER
        };
        let background = if self.focused == Some(index) {
            theme::SURFACE_HIGHLIGHT
        } else {
            theme::MODAL_BG
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(background));
        let inner_width = usize::from(block.inner(card).width);

        Paragraph::new(self.card_lines(persona, inner_width))
            .block(block)
            .render(card, buf);
    }
}

fn grid_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Rect {
        x: inner.x.saturating_add(1),
        y: inner.y.saturating_add(1),
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(1),
    }
}

impl RenderWidget for &Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::MODAL_BG))
            .render(area, buf);

        for (index, card) in self.card_areas(area) {
            if let Some(persona) = self.personas.get(index) {
                self.render_card(index, persona, card, buf);
            }
        }
    }
}

impl RenderWidget for Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
