//! Parse error types
//!
//! Every [`ParseError`] is fatal: the parser stops at the first one and no
//! partial tree is returned. Running out of tokens is reported as a
//! `found: None` on the variant for the production that needed more input;
//! use [`ParseError::is_end_of_input`] to tell it apart from a wrong token.

use crate::parser::ast::SourceLocation;

/// Errors produced while turning tokens into an AST
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A literal keyword was required but something else (or nothing) was present
    #[error("Parse error at {location}: '{expected}' is expected, but {} is found", describe(.found))]
    UnexpectedToken {
        expected: String,
        found: Option<String>,
        location: SourceLocation,
    },

    /// A repeat count was required but the token is missing or not a non-negative integer
    #[error("Parse error at {location}: expected a repeat count, but {} is found", describe(.found))]
    InvalidNumber {
        found: Option<String>,
        location: SourceLocation,
    },

    /// The token is not one of the primitive commands
    #[error("Parse error at {location}: '{found}' is undefined")]
    UndefinedCommand {
        found: String,
        location: SourceLocation,
    },

    /// A complete program was followed by more tokens
    #[error("Parse error at {location}: {remaining} unexpected token(s) after the end of the program")]
    TrailingInput {
        remaining: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::InvalidNumber { location, .. }
            | ParseError::UndefinedCommand { location, .. }
            | ParseError::TrailingInput { location, .. } => *location,
        }
    }

    /// True when the token stream ran out while a production still needed input.
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedToken { found: None, .. }
                | ParseError::InvalidNumber { found: None, .. }
        )
    }
}

fn describe(found: &Option<String>) -> String {
    match found {
        Some(token) => format!("'{}'", token),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_end_of_input() {
        let err = ParseError::UnexpectedToken {
            expected: "end".to_string(),
            found: None,
            location: SourceLocation::new(1, 11),
        };
        assert!(err.is_end_of_input());
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 11: 'end' is expected, but end of input is found"
        );
    }

    #[test]
    fn test_display_undefined_command() {
        let err = ParseError::UndefinedCommand {
            found: "jump".to_string(),
            location: SourceLocation::new(2, 3),
        };
        assert!(!err.is_end_of_input());
        assert_eq!(err.location(), SourceLocation::new(2, 3));
        assert_eq!(err.to_string(), "Parse error at line 2, column 3: 'jump' is undefined");
    }
}
