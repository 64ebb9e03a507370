//! Recursive descent parser for the robot command language
//!
//! Grammar (case-sensitive):
//!
//! ```text
//! program           ::= "program" command-list
//! command-list      ::= command* "end"
//! command           ::= repeat-command | primitive-command
//! repeat-command    ::= "repeat" number command-list
//! primitive-command ::= "go" | "right" | "left"
//! ```
//!
//! The grammar is LL(1): every choice is made by looking at the current token,
//! so the parser never backtracks. Each production consumes at least one token
//! before recursing, which bounds recursion by the input length.

use crate::parser::ast::*;
use crate::parser::errors::ParseError;
use crate::parser::lexer::Cursor;

/// Recursive descent parser for robot programs
pub struct Parser {
    pub(crate) cursor: Cursor,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Parse a complete program and require that no input follows it.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let location = self.cursor.current_location();
        self.cursor.expect("program")?;
        let body = self.parse_command_list()?;

        if !self.cursor.is_at_end() {
            return Err(ParseError::TrailingInput {
                remaining: self.cursor.remaining(),
                location: self.cursor.current_location(),
            });
        }

        Ok(Program::new(body, location))
    }

    /// Parse `command* "end"`; the terminating `end` is consumed.
    pub(crate) fn parse_command_list(&mut self) -> Result<CommandList, ParseError> {
        let mut list = CommandList::new();

        loop {
            match self.cursor.current().map(|t| t.text.as_str()) {
                Some("end") => {
                    self.cursor.advance();
                    return Ok(list);
                }
                Some(_) => list.commands.push(self.parse_command()?),
                None => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "end".to_string(),
                        found: None,
                        location: self.cursor.end_location(),
                    })
                }
            }
        }
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        if self.cursor.check("repeat") {
            self.parse_repeat_command()
        } else {
            self.parse_primitive_command()
        }
    }

    /// Parse `"repeat" number command-list`
    fn parse_repeat_command(&mut self) -> Result<Command, ParseError> {
        let location = self.cursor.current_location();
        self.cursor.expect("repeat")?;
        let count = self.cursor.expect_number()?;
        let body = self.parse_command_list()?;

        Ok(Command::Repeat {
            count,
            body,
            location,
        })
    }

    /// Parse `"go" | "right" | "left"`, checking membership before consuming
    fn parse_primitive_command(&mut self) -> Result<Command, ParseError> {
        let location = self.cursor.current_location();
        let token = match self.cursor.current() {
            Some(token) => token,
            None => {
                return Err(ParseError::UnexpectedToken {
                    expected: "end".to_string(),
                    found: None,
                    location,
                })
            }
        };

        match Primitive::from_label(&token.text) {
            Some(action) => {
                self.cursor.advance();
                Ok(Command::Primitive { action, location })
            }
            None => Err(ParseError::UndefinedCommand {
                found: token.text.clone(),
                location,
            }),
        }
    }
}

/// Parse `source` as a complete program.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_go() {
        let program = parse("program go end").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.to_string(), "[program [go]]");
    }

    #[test]
    fn test_parse_empty_list() {
        let program = parse("program end").unwrap();
        assert!(program.body.is_empty());
        assert_eq!(program.to_string(), "[program []]");
    }

    #[test]
    fn test_parse_repeat() {
        let program = parse("program repeat 4 go right end end").unwrap();
        match &program.body.commands[0] {
            Command::Repeat {
                count,
                body,
                location,
            } => {
                assert_eq!(*count, 4);
                assert_eq!(body.len(), 2);
                assert_eq!(*location, SourceLocation::new(1, 9));
            }
            other => panic!("Expected repeat command, got {:?}", other),
        }
        assert_eq!(program.to_string(), "[program [repeat 4 [go, right]]]");
    }

    #[test]
    fn test_parse_zero_repeat() {
        let program = parse("program repeat 0 go end end").unwrap();
        assert_eq!(program.to_string(), "[program [repeat 0 [go]]]");
    }

    #[test]
    fn test_commands_keep_source_order() {
        let program = parse("program left go right go end").unwrap();
        assert_eq!(program.to_string(), "[program [left, go, right, go]]");
    }

    #[test]
    fn test_unknown_top_level_keyword() {
        let err = parse("robot go end").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "program".to_string(),
                found: Some("robot".to_string()),
                location: SourceLocation::new(1, 1),
            }
        );
    }

    #[test]
    fn test_undefined_command() {
        match parse("program foo end") {
            Err(ParseError::UndefinedCommand { found, location }) => {
                assert_eq!(found, "foo");
                assert_eq!(location, SourceLocation::new(1, 9));
            }
            other => panic!("Expected UndefinedCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_repeat_count() {
        match parse("program repeat end end") {
            Err(ParseError::InvalidNumber { found, .. }) => {
                assert_eq!(found.as_deref(), Some("end"));
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_final_end() {
        let err = parse("program go").unwrap_err();
        assert!(err.is_end_of_input());
        match err {
            ParseError::UnexpectedToken {
                expected,
                found,
                location,
            } => {
                assert_eq!(expected, "end");
                assert_eq!(found, None);
                assert_eq!(location, SourceLocation::new(1, 11));
            }
            other => panic!("Expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input() {
        match parse("program go end go end") {
            Err(ParseError::TrailingInput {
                remaining,
                location,
            }) => {
                assert_eq!(remaining, 2);
                assert_eq!(location, SourceLocation::new(1, 16));
            }
            other => panic!("Expected TrailingInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_source() {
        let err = parse("").unwrap_err();
        assert!(err.is_end_of_input());
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(matches!(
            parse("program GO end"),
            Err(ParseError::UndefinedCommand { .. })
        ));
        assert!(matches!(
            parse("program go END"),
            Err(ParseError::UndefinedCommand { .. })
        ));
    }
}
