//! Application state and logic

mod event;

pub use event::{Event, Handler};

use crate::config::Config;
use crate::persona::{Catalog, Persona, final_llm};
use crate::tooltip::{HoverTooltip, TooltipGroup, TooltipId, TooltipOptions};
use crate::ui::AssistantPicker;
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Picker application state.
///
/// Owns the persona list and the selection; the picker widget only reads
/// them. Each card's icon carries a description tooltip and its model line a
/// provider tooltip, all in one group.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Personas and provider metadata
    pub catalog: Catalog,
    /// Identifier of the selected persona
    pub selected_id: Option<i64>,
    /// Keyboard-focused card index
    pub focused: usize,
    /// First visible grid row
    pub scroll: usize,
    /// Last status message
    pub status: Option<String>,
    /// Whether the event loop should exit
    pub should_quit: bool,
    tooltips: TooltipGroup,
    icon_tooltips: Vec<TooltipId>,
    model_tooltips: Vec<TooltipId>,
    fallback_model: String,
    picker_area: Rect,
    pointer: Option<Position>,
}

impl App {
    /// Create the app with the catalog's default persona selected
    #[must_use]
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let selected_id = catalog.default_persona().map(|persona| persona.id);
        let focused = selected_id
            .and_then(|id| catalog.personas.iter().position(|p| p.id == id))
            .unwrap_or(0);
        let (_, fallback_model) = final_llm(&catalog.llm_providers, None, None);

        if catalog.personas.is_empty() {
            warn!("Catalog has no personas");
        }

        let mut tooltips = TooltipGroup::new(config.tooltip_grace());
        let icon_options = TooltipOptions {
            show_tick: true,
            ..TooltipOptions::default()
        };
        let icon_tooltips = catalog
            .personas
            .iter()
            .map(|persona| {
                tooltips.insert(
                    HoverTooltip::new(persona.description.clone())
                        .delay(config.icon_tooltip_delay())
                        .options(icon_options),
                )
            })
            .collect();

        let model_options = TooltipOptions {
            line: true,
            light: true,
            ..TooltipOptions::default()
        };
        let model_tooltips = catalog
            .personas
            .iter()
            .map(|persona| {
                let (provider, model) = final_llm(&catalog.llm_providers, Some(persona), None);
                let content = if provider.is_empty() {
                    model
                } else {
                    format!("{provider} / {model}")
                };
                tooltips.insert(
                    HoverTooltip::new(content)
                        .delay(config.tooltip_delay())
                        .options(model_options),
                )
            })
            .collect();

        Self {
            config,
            catalog,
            selected_id,
            focused,
            scroll: 0,
            status: None,
            should_quit: false,
            tooltips,
            icon_tooltips,
            model_tooltips,
            fallback_model,
            picker_area: Rect::default(),
            pointer: None,
        }
    }

    /// The selected persona
    #[must_use]
    pub fn selected_persona(&self) -> Option<&Persona> {
        let id = self.selected_id?;
        self.catalog.personas.iter().find(|persona| persona.id == id)
    }

    /// Model name shown for personas without an override
    #[must_use]
    pub fn fallback_model(&self) -> &str {
        &self.fallback_model
    }

    /// Icon and model-line tooltips
    #[must_use]
    pub const fn tooltips(&self) -> &TooltipGroup {
        &self.tooltips
    }

    /// Last known pointer position
    #[must_use]
    pub const fn pointer(&self) -> Option<Position> {
        self.pointer
    }

    /// Area the picker was last laid out in
    #[must_use]
    pub const fn picker_area(&self) -> Rect {
        self.picker_area
    }

    /// Build the picker widget for the current state
    #[must_use]
    pub fn picker(&self) -> Option<AssistantPicker<'_>> {
        let selected = self.selected_persona()?;
        Some(
            AssistantPicker::new(selected, &self.catalog.personas, &self.fallback_model)
                .tool_labels(&self.config.tool_labels)
                .focused(Some(self.focused))
                .scroll(self.scroll),
        )
    }

    /// Record the picker area and move tooltip triggers onto the visible cards.
    ///
    /// Focus is pulled into view only when the area changes, so wheel
    /// scrolling survives the per-frame relayout. The last pointer position
    /// is hit-tested again against the moved triggers.
    pub fn relayout(&mut self, picker_area: Rect, now: Instant) {
        if self.picker_area != picker_area {
            self.picker_area = picker_area;
            self.ensure_focus_visible();
        }

        let cards = self
            .picker()
            .map(|picker| picker.card_areas(picker_area))
            .unwrap_or_default();

        let triggers = self.icon_tooltips.iter().zip(&self.model_tooltips);
        for (index, (icon_id, model_id)) in triggers.enumerate() {
            let card = cards
                .iter()
                .find(|(card_index, _)| *card_index == index)
                .map(|(_, card)| *card);
            if let Some(tooltip) = self.tooltips.get_mut(*icon_id) {
                tooltip.set_trigger(card.map_or_else(Rect::default, AssistantPicker::icon_area));
            }
            if let Some(tooltip) = self.tooltips.get_mut(*model_id) {
                tooltip.set_trigger(card.map_or_else(Rect::default, AssistantPicker::model_area));
            }
        }

        self.tooltips.pointer_moved(self.pointer, now);
    }

    /// Make the selection. This is the picker's click callback target.
    pub fn select(&mut self, persona_id: i64) {
        let Some(index) = self.catalog.personas.iter().position(|p| p.id == persona_id) else {
            debug!(persona_id, "Ignoring selection of unknown persona");
            return;
        };
        self.selected_id = Some(persona_id);
        self.focused = index;
        let name = &self.catalog.personas[index].name;
        info!(persona_id, name = %name, "Selected persona");
        self.status = Some(format!("Selected {name}"));
    }

    /// Select the focused card
    pub fn select_focused(&mut self) {
        if let Some(id) = self.catalog.personas.get(self.focused).map(|p| p.id) {
            self.select(id);
        }
    }

    /// Forward a left click at `position` to the picker
    pub fn click(&mut self, position: Position) {
        let mut clicked = None;
        if let Some(picker) = self.picker() {
            picker.handle_click(self.picker_area, position, |persona| {
                clicked = Some(persona.id);
            });
        }
        if let Some(id) = clicked {
            self.select(id);
        }
    }

    /// Pointer moved to `position`, or left the terminal when `None`
    pub fn pointer_moved(&mut self, position: Option<Position>, now: Instant) {
        self.pointer = position;
        self.tooltips.pointer_moved(position, now);
    }

    /// Advance tooltip timers. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tooltips.advance(now)
    }

    /// Move keyboard focus by `delta` cards, clamped to the list
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.catalog.personas.len();
        if len == 0 {
            return;
        }
        self.focused = self.focused.saturating_add_signed(delta).min(len - 1);
        self.ensure_focus_visible();
    }

    /// Move focus one grid row up or down
    pub fn move_focus_rows(&mut self, rows: isize) {
        let columns = isize::try_from(AssistantPicker::columns(self.picker_area)).unwrap_or(1);
        self.move_focus(rows.saturating_mul(columns));
    }

    /// Scroll the grid by `rows`
    pub fn scroll_by(&mut self, rows: isize) {
        let columns = AssistantPicker::columns(self.picker_area);
        let last_row = self.catalog.personas.len().saturating_sub(1) / columns;
        self.scroll = self.scroll.saturating_add_signed(rows).min(last_row);
    }

    /// Request exit
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    fn ensure_focus_visible(&mut self) {
        let columns = AssistantPicker::columns(self.picker_area);
        let focused_row = self.focused / columns;
        if focused_row < self.scroll {
            self.scroll = focused_row;
            return;
        }
        if self.picker_area.is_empty() {
            return;
        }

        while self.scroll < focused_row {
            let visible = self
                .picker()
                .is_some_and(|picker| {
                    picker
                        .card_areas(self.picker_area)
                        .iter()
                        .any(|(index, _)| *index == self.focused)
                });
            if visible {
                break;
            }
            self.scroll += 1;
        }
    }
}
