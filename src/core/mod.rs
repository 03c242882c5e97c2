//! Core UI model – scene graph, palettes, restyling, and view routing.
//!
//! Nothing in this module depends on any TUI or rendering crate, so every
//! invariant here can be tested without a terminal.

pub mod palette;
pub mod router;
pub mod scene;
pub mod style;
