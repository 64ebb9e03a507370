//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Program text with keyword highlighting and the executing token marked
//! - [`grid`]: The robot and its trail on the grid
//! - [`log`]: One line per executed primitive
//! - [`status`]: Status bar with keybindings and execution state
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and the data to draw. Panes hold no state of their own; scroll
//! offsets live in [`crate::ui::app::App`].

pub mod grid;
pub mod log;
pub mod source;
pub mod status;

pub use grid::render_grid_pane;
pub use log::render_log_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
