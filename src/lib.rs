//! Assistant picker - a terminal grid for choosing an AI assistant persona
//!
//! Personas are shown as cards with a deterministic icon color, their tools
//! and document sets, and the model they run on. Hovering an icon shows the
//! persona description in a delayed tooltip; tooltips share a group so
//! moving between icons skips the delay.

pub mod app;
pub mod config;
pub mod paths;
pub mod persona;
pub mod tooltip;
pub mod tui;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use persona::{Catalog, Persona};
