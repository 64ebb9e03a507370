//! Robot program parser
//!
//! This module transforms program text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens) and the lookahead [`lexer::Cursor`]
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions and their trace rendering
//! - [`errors`]: Parse error types
//! - [`trace`]: Reading a rendered trace back into an AST
//!
//! # Language
//!
//! A program is `program`, a list of commands, and `end`. Commands are the
//! primitives `go`, `right` and `left`, or `repeat <n> ... end` blocks, which
//! nest to any depth. Keywords are case-sensitive and tokens are separated by
//! whitespace only.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod trace;

pub use errors::ParseError;
pub use parser::parse;
pub use trace::read_trace;
