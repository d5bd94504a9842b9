//! Color palette for the picker and tooltips
//!
//! Muted surfaces with a single accent for the selected card

use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const ACCENT: Color = Color::Rgb(100, 180, 220);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Badges
pub const BADGE_BG: Color = Color::Rgb(40, 44, 56);

// Tooltips
pub const TOOLTIP_DARK_BG: Color = Color::Rgb(38, 38, 46);
pub const TOOLTIP_DARK_FG: Color = Color::Rgb(240, 240, 245);
pub const TOOLTIP_LIGHT_BG: Color = Color::Rgb(229, 229, 232);
pub const TOOLTIP_LIGHT_FG: Color = Color::Rgb(38, 38, 38);
