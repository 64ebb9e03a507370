//! Reader for rendered program traces
//!
//! A trace is the `Display` form of a [`Program`]:
//!
//! ```text
//! [program [repeat 4 [go, right]]]
//! ```
//!
//! Brackets and commas are tokens of their own here, so the trace is split
//! into tokens by a small character scanner and then read with the same
//! [`Cursor`] the source parser uses. Whitespace between tokens is not
//! significant.

use crate::parser::ast::*;
use crate::parser::errors::ParseError;
use crate::parser::lexer::{Cursor, Token};

/// Rebuild a [`Program`] from its rendered trace.
pub fn read_trace(trace: &str) -> Result<Program, ParseError> {
    let mut cursor = scan(trace);

    let location = cursor.current_location();
    cursor.expect("[")?;
    cursor.expect("program")?;
    let body = read_list(&mut cursor)?;
    cursor.expect("]")?;

    if !cursor.is_at_end() {
        return Err(ParseError::TrailingInput {
            remaining: cursor.remaining(),
            location: cursor.current_location(),
        });
    }

    Ok(Program::new(body, location))
}

fn scan(trace: &str) -> Cursor {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut word_start = SourceLocation::new(1, 1);
    let mut line = 1;
    let mut column = 1;

    for c in trace.chars() {
        let here = SourceLocation::new(line, column);
        if c.is_whitespace() || matches!(c, '[' | ']' | ',') {
            if !word.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut word), word_start));
            }
            if !c.is_whitespace() {
                tokens.push(Token::new(c.to_string(), here));
            }
        } else {
            if word.is_empty() {
                word_start = here;
            }
            word.push(c);
        }

        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    if !word.is_empty() {
        tokens.push(Token::new(word, word_start));
    }

    Cursor::from_tokens(tokens, SourceLocation::new(line, column))
}

/// `"[" (item ("," item)*)? "]"`
fn read_list(cursor: &mut Cursor) -> Result<CommandList, ParseError> {
    let mut list = CommandList::new();
    cursor.expect("[")?;

    if cursor.check("]") {
        cursor.advance();
        return Ok(list);
    }

    loop {
        list.commands.push(read_item(cursor)?);
        if cursor.check(",") {
            cursor.advance();
        } else {
            cursor.expect("]")?;
            return Ok(list);
        }
    }
}

/// `"repeat" number list` or a primitive label
fn read_item(cursor: &mut Cursor) -> Result<Command, ParseError> {
    let location = cursor.current_location();

    if cursor.check("repeat") {
        cursor.advance();
        let count = cursor.expect_number()?;
        let body = read_list(cursor)?;
        return Ok(Command::Repeat {
            count,
            body,
            location,
        });
    }

    match cursor.current() {
        Some(token) => match Primitive::from_label(&token.text) {
            Some(action) => {
                cursor.advance();
                Ok(Command::Primitive { action, location })
            }
            None => Err(ParseError::UndefinedCommand {
                found: token.text.clone(),
                location,
            }),
        },
        None => Err(ParseError::UnexpectedToken {
            expected: "]".to_string(),
            found: None,
            location,
        }),
    }
}
