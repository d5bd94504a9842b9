//! Widgets

pub mod assistant_picker;
pub mod status_bar;
pub mod tooltip;
