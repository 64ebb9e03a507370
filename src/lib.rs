//! # Introduction
//!
//! robocmd parses and executes programs in a small robot command language,
//! capturing a snapshot of the robot after every primitive command. The
//! snapshot history is then navigated forward and backward through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer/Cursor → Parser → AST → Interpreter → Snapshots → TUI
//!                                   └──→ trace ("[program [go]]")
//! ```
//!
//! 1. [`parser`] — tokenises the source, builds the AST, renders it as a
//!    trace and reads traces back.
//! 2. [`interpreter`] — walks the AST, moves the robot, and captures
//!    [`snapshot::Snapshot`]s at each step.
//! 3. [`robot`] — position, heading and the trail of visited cells.
//! 4. [`snapshot`] — snapshot history with configurable memory limit and a
//!    [`snapshot::MoveLog`] of executed commands.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Language
//!
//! ```text
//! program repeat 4 go right end end
//! ```
//!
//! Primitives: `go`, `right`, `left`. Blocks: `repeat <n> ... end`.

pub mod interpreter;
pub mod parser;
pub mod robot;
pub mod snapshot;
pub mod ui;
