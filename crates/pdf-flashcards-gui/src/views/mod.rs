pub mod controls;
pub mod deck;
pub mod log_panel;

pub use controls::{ControlsState, show_controls};
pub use deck::show_deck;
pub use log_panel::show_log_panel;

use std::path::PathBuf;

/// What the user asked for during a frame; the app applies these after drawing
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Upload(PathBuf),
    Cancel,
    Summarize,
    ToggleNightMode,
    ToggleLog,
    NextCard,
    PreviousCard,
    ToggleReveal,
}
