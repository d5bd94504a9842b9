//! UI components
//!
//! Reusable widgets and the pure helpers they lay out with. The interactive
//! terminal loop lives in the `tui` module.

pub mod color;
mod components;
pub mod text;
mod theme;

pub use components::{
    assistant_picker::Widget as AssistantPicker,
    status_bar::{StatusContent, Widget as StatusBar},
    tooltip::{Placement, Widget as TooltipPopup},
};
