//! Floating tooltip box

use crate::tooltip::{HoverTooltip, TooltipOptions};
use crate::ui::text::{display_width, plain_lines, truncate_with_ellipsis, wrap_words};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget as RenderWidget, Wrap},
};

/// Inner width of the default box
const DEFAULT_WIDTH: u16 = 20;
/// Inner width of the `large` box
const LARGE_WIDTH: u16 = 46;
/// Max inner width in `line` mode
const LINE_MAX_WIDTH: u16 = 30;
/// Max inner width in `citation` mode
const CITATION_MAX_WIDTH: u16 = 42;
/// Borders plus one cell of padding per side
const CHROME_WIDTH: u16 = 4;

/// Where the box and its tick land on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The box, borders included
    pub area: Rect,
    /// Cell holding the tick, when enabled
    pub tick: Option<Position>,
    /// Whether the box opens above the trigger
    pub above: bool,
}

/// Widget drawing a visible [`HoverTooltip`] next to its trigger.
///
/// Render it over the whole frame area; the box is clamped inside it.
/// Nothing is drawn while the tooltip is hidden or pending.
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    tooltip: &'a HoverTooltip,
}

impl<'a> Widget<'a> {
    /// Create a tooltip box widget
    #[must_use]
    pub const fn new(tooltip: &'a HoverTooltip) -> Self {
        Self { tooltip }
    }

    /// Compute the box placement inside `bounds`, or `None` when hidden
    #[must_use]
    pub fn placement(&self, bounds: Rect) -> Option<Placement> {
        if !self.tooltip.is_visible() || bounds.is_empty() {
            return None;
        }

        let options = self.tooltip.layout();
        let inner_width = inner_width(options, &plain_lines(self.tooltip.content()))
            .min(bounds.width.saturating_sub(CHROME_WIDTH))
            .max(1);
        let body_lines = self.body_lines(usize::from(inner_width)).len();
        let height = u16::try_from(body_lines)
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(2)
            .min(bounds.height);
        let width = inner_width.saturating_add(CHROME_WIDTH).min(bounds.width);

        let trigger = self.tooltip.trigger_area();
        let tick_rows = u16::from(options.show_tick);
        let center = trigger.x.saturating_add(trigger.width / 2);

        let below_y = trigger.bottom().saturating_add(tick_rows);
        let above = below_y.saturating_add(height) > bounds.bottom()
            && trigger.y.saturating_sub(bounds.y) >= height.saturating_add(tick_rows);
        let y = if above {
            trigger.y.saturating_sub(tick_rows).saturating_sub(height)
        } else {
            below_y.min(bounds.bottom().saturating_sub(height))
        };

        let max_x = bounds.right().saturating_sub(width);
        let x = center.saturating_sub(width / 2).clamp(bounds.x, max_x);

        let tick = options.show_tick.then(|| {
            let tick_y = if above { trigger.y.saturating_sub(1) } else { trigger.bottom() };
            Position::new(center.clamp(bounds.x, bounds.right().saturating_sub(1)), tick_y)
        });

        Some(Placement {
            area: Rect::new(x, y, width, height),
            tick: tick.filter(|pos| bounds.contains(*pos)),
            above,
        })
    }

    fn body_lines(&self, width: usize) -> Vec<String> {
        let lines = plain_lines(self.tooltip.content());
        if self.tooltip.layout().line {
            let joined = lines.join(" ");
            return vec![truncate_with_ellipsis(&joined, width)];
        }
        lines
            .iter()
            .flat_map(|line| {
                let wrapped = wrap_words(line, width);
                if wrapped.is_empty() { vec![String::new()] } else { wrapped }
            })
            .collect()
    }

    const fn style(options: TooltipOptions) -> Style {
        if options.light {
            Style::new()
                .fg(theme::TOOLTIP_LIGHT_FG)
                .bg(theme::TOOLTIP_LIGHT_BG)
        } else {
            Style::new()
                .fg(theme::TOOLTIP_DARK_FG)
                .bg(theme::TOOLTIP_DARK_BG)
        }
    }
}

fn inner_width(options: TooltipOptions, lines: &[String]) -> u16 {
    let content = lines
        .iter()
        .map(|line| display_width(line))
        .max()
        .map_or(1, |w| u16::try_from(w).unwrap_or(u16::MAX));

    if options.large {
        LARGE_WIDTH
    } else if options.line {
        content.min(LINE_MAX_WIDTH)
    } else if options.citation {
        content.min(CITATION_MAX_WIDTH)
    } else {
        DEFAULT_WIDTH
    }
}

impl RenderWidget for &Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(placement) = self.placement(area) else {
            return;
        };
        let options = self.tooltip.layout();
        let style = Widget::style(options);

        Clear.render(placement.area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .padding(Padding::horizontal(1))
            .style(style);

        let paragraph = if options.line {
            let width = usize::from(placement.area.width.saturating_sub(CHROME_WIDTH));
            Paragraph::new(Text::from(self.body_lines(width).join("")))
        } else {
            Paragraph::new(self.tooltip.content().clone()).wrap(Wrap { trim: true })
        };
        paragraph.block(block).style(style).render(placement.area, buf);

        if let Some(tick) = placement.tick {
            let glyph = if placement.above { "▼" } else { "▲" };
            let tick_color = if options.light {
                theme::TOOLTIP_LIGHT_BG
            } else {
                theme::TOOLTIP_DARK_BG
            };
            Line::styled(glyph, Style::new().fg(tick_color))
                .render(Rect::new(tick.x, tick.y, 1, 1), buf);
        }
    }
}

impl RenderWidget for Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    fn visible(tooltip: HoverTooltip) -> HoverTooltip {
        let mut tooltip = tooltip.delay(Duration::ZERO);
        let now = Instant::now();
        tooltip.pointer_enter(now, None);
        tooltip.tick(now, None);
        tooltip
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_hidden_tooltip_has_no_placement() {
        let tooltip = HoverTooltip::new("hint").trigger(Rect::new(5, 2, 4, 1));
        assert!(Widget::new(&tooltip).placement(Rect::new(0, 0, 80, 24)).is_none());
    }

    #[test]
    fn test_default_box_below_trigger() {
        let tooltip = visible(HoverTooltip::new("hint").trigger(Rect::new(30, 2, 4, 1)));
        let placement = Widget::new(&tooltip)
            .placement(Rect::new(0, 0, 80, 24))
            .map(|p| p.area);

        assert_eq!(placement, Some(Rect::new(20, 3, 24, 3)));
    }

    #[test]
    fn test_box_clamped_to_bounds() {
        let tooltip = visible(HoverTooltip::new("hint").trigger(Rect::new(0, 0, 2, 1)));
        let placement = Widget::new(&tooltip).placement(Rect::new(0, 0, 80, 24));
        assert_eq!(placement.map(|p| p.area.x), Some(0));
    }

    #[test]
    fn test_flips_above_near_bottom() {
        let options = TooltipOptions {
            show_tick: true,
            ..TooltipOptions::default()
        };
        let tooltip = visible(
            HoverTooltip::new("hint")
                .options(options)
                .trigger(Rect::new(30, 22, 4, 1)),
        );
        let placement = Widget::new(&tooltip).placement(Rect::new(0, 0, 80, 24));

        assert_eq!(placement.map(|p| p.above), Some(true));
        assert_eq!(placement.and_then(|p| p.tick), Some(Position::new(32, 21)));
        assert_eq!(placement.map(|p| p.area.bottom()), Some(21));
    }

    #[test]
    fn test_line_mode_ellipsizes() {
        let options = TooltipOptions {
            line: true,
            ..TooltipOptions::default()
        };
        let long = "a very long single line of tooltip text that will not fit";
        let tooltip = visible(
            HoverTooltip::new(long)
                .options(options)
                .trigger(Rect::new(30, 2, 4, 1)),
        );
        let widget = Widget::new(&tooltip);
        let placement = widget.placement(Rect::new(0, 0, 80, 24));
        assert_eq!(placement.map(|p| p.area.height), Some(3));
        assert_eq!(placement.map(|p| p.area.width), Some(LINE_MAX_WIDTH + CHROME_WIDTH));

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        (&widget).render(area, &mut buf);
        assert!(buffer_text(&buf).contains('…'));
    }

    #[test]
    fn test_large_is_wider_than_default() {
        let large = visible(
            HoverTooltip::new("hint")
                .options(TooltipOptions {
                    large: true,
                    ..TooltipOptions::default()
                })
                .trigger(Rect::new(40, 2, 4, 1)),
        );
        let normal = visible(HoverTooltip::new("hint").trigger(Rect::new(40, 2, 4, 1)));
        let bounds = Rect::new(0, 0, 100, 24);

        let large_width = Widget::new(&large).placement(bounds).map(|p| p.area.width);
        let normal_width = Widget::new(&normal).placement(bounds).map(|p| p.area.width);
        assert!(large_width > normal_width);
    }

    #[test]
    fn test_citation_shrinks_to_content() {
        let tooltip = visible(
            HoverTooltip::new("short")
                .options(TooltipOptions {
                    citation: true,
                    ..TooltipOptions::default()
                })
                .trigger(Rect::new(40, 2, 4, 1)),
        );
        let width = Widget::new(&tooltip)
            .placement(Rect::new(0, 0, 100, 24))
            .map(|p| p.area.width);
        assert_eq!(width, Some(5 + CHROME_WIDTH));
    }

    #[test]
    fn test_renders_wrapped_content() {
        let tooltip = visible(
            HoverTooltip::new("General assistant that can search sources")
                .trigger(Rect::new(30, 2, 4, 1)),
        );
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Widget::new(&tooltip).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("General"));
        assert!(text.contains("sources"));
    }

    #[test]
    fn test_hidden_tooltip_renders_nothing() {
        let tooltip = HoverTooltip::new("hint").trigger(Rect::new(30, 2, 4, 1));
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Widget::new(&tooltip).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
