//! Robot program execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: Main interpreter with AST execution
//! - [`errors`]: Runtime error types
//! - [`constants`]: Default limits and timings
//!
//! # Execution Model
//!
//! The interpreter walks the AST in source order. A `repeat` block runs its
//! body exactly `count` times with no early exit. After each primitive a
//! snapshot is taken to enable time-travel debugging.

pub mod constants;
pub mod engine;
pub mod errors;
