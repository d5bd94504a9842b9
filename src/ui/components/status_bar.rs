//! Status bar widget

use crate::ui::theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for the hint line under the picker
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug, PartialEq, Eq)]
pub enum StatusContent {
    /// Current selection and keybindings
    Normal {
        /// Name of the selected persona
        selected: String,
    },
    /// Status message
    Status(String),
}

impl Widget {
    /// Create a status bar showing the current selection
    #[must_use]
    pub fn normal(selected: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Normal {
                selected: selected.into(),
            },
        }
    }

    /// Create a status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Content shown by the bar
    #[must_use]
    pub const fn content(&self) -> &StatusContent {
        &self.content
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let spans = match &self.content {
            StatusContent::Status(msg) => vec![Span::styled(
                format!(" {msg} "),
                Style::default().fg(Color::Green),
            )],
            StatusContent::Normal { selected } => vec![
                Span::styled(
                    format!(" {selected} "),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "| [click/Enter]select [arrows]move [q/Esc]close ",
                    Style::default().fg(theme::TEXT_DIM),
                ),
            ],
        };

        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::SURFACE_HIGHLIGHT))
    }
}
