//! Terminal frontend built on crossterm.
//!
//! `input` maps key events to session intents; `render` draws frames with
//! the classic 2048 palette and owns raw-mode setup and teardown.

pub mod input;
pub mod render;

pub use input::map_key;
pub use render::{render_frame, tile_colors, Terminal};
