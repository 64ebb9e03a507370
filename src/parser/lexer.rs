//! Lexer (tokenizer) and token cursor for robot programs
//!
//! The language has no punctuation: a token is any maximal run of
//! non-whitespace characters. [`Lexer`] records the line and column where each
//! token starts so parse errors and the TUI can point back into the source.
//! [`Cursor`] gives the parser a single token of lookahead.

use super::ast::SourceLocation;
use super::errors::ParseError;
use std::fmt;

/// A whitespace-delimited token and where it starts in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            text: text.into(),
            location,
        }
    }

    /// Case-sensitive comparison against a literal keyword.
    pub fn is(&self, literal: &str) -> bool {
        self.text == literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

/// Lexer for robot program source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Returns the tokens in source order together with the location just past
    /// the last character, which is where end-of-input errors are reported.
    pub fn tokenize(&mut self) -> (Vec<Token>, SourceLocation) {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            let start = SourceLocation::new(self.line, self.column);
            let mut text = String::new();
            while let Some(c) = self.peek() {
                if c.is_whitespace() {
                    break;
                }
                text.push(c);
                self.advance();
            }
            tokens.push(Token::new(text, start));
        }

        (tokens, SourceLocation::new(self.line, self.column))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.position += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// One-token lookahead over a token sequence.
///
/// The current token is always the next unconsumed one, or `None` once the
/// input is exhausted. The cursor only moves forward.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Vec<Token>,
    position: usize,
    end_location: SourceLocation,
}

impl Cursor {
    /// Tokenize `source` and position the cursor on its first token.
    pub fn new(source: &str) -> Self {
        let (tokens, end_location) = Lexer::new(source).tokenize();
        Self::from_tokens(tokens, end_location)
    }

    pub fn from_tokens(tokens: Vec<Token>, end_location: SourceLocation) -> Self {
        Cursor {
            tokens,
            position: 0,
            end_location,
        }
    }

    /// The token the cursor is positioned at, or `None` at end of input.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Discard the current token and return the new current one.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Whether the current token is exactly `literal`.
    pub fn check(&self, literal: &str) -> bool {
        self.current().is_some_and(|t| t.is(literal))
    }

    /// Consume the current token if it is exactly `literal`.
    ///
    /// On mismatch the cursor does not move.
    pub fn expect(&mut self, literal: &str) -> Result<(), ParseError> {
        if self.check(literal) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: literal.to_string(),
                found: self.current_text(),
                location: self.current_location(),
            })
        }
    }

    /// Consume the current token as a non-negative base-10 integer.
    ///
    /// Only ASCII digits are accepted: no sign, no decimal point, and the value
    /// must fit in a `u32`.
    pub fn expect_number(&mut self) -> Result<u32, ParseError> {
        let number = self
            .current()
            .filter(|t| !t.text.is_empty() && t.text.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|t| t.text.parse::<u32>().ok());

        match number {
            Some(n) => {
                self.advance();
                Ok(n)
            }
            None => Err(ParseError::InvalidNumber {
                found: self.current_text(),
                location: self.current_location(),
            }),
        }
    }

    /// Number of unconsumed tokens, including the current one.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.current().is_none()
    }

    /// Location of the current token, or of the end of input.
    pub fn current_location(&self) -> SourceLocation {
        self.current()
            .map(|t| t.location)
            .unwrap_or(self.end_location)
    }

    pub fn end_location(&self) -> SourceLocation {
        self.end_location
    }

    fn current_text(&self) -> Option<String> {
        self.current().map(|t| t.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_whitespace() {
        let (tokens, end) = Lexer::new("program\trepeat  4\n  go end\n").tokenize();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["program", "repeat", "4", "go", "end"]);
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(1, 9));
        assert_eq!(tokens[3].location, SourceLocation::new(2, 3));
        assert_eq!(end, SourceLocation::new(3, 1));
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("   \n\t ");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_advance_to_end() {
        let mut cursor = Cursor::new("go left");
        assert_eq!(cursor.current().map(|t| t.text.as_str()), Some("go"));
        assert_eq!(cursor.advance().map(|t| t.text.as_str()), Some("left"));
        assert!(cursor.advance().is_none());
        assert!(cursor.advance().is_none());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_expect_does_not_advance_on_mismatch() {
        let mut cursor = Cursor::new("Program go");
        let err = cursor.expect("program").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "program".to_string(),
                found: Some("Program".to_string()),
                location: SourceLocation::new(1, 1),
            }
        );
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_expect_number() {
        let mut cursor = Cursor::new("42 0 +3 -1 1.5 99999999999");
        assert_eq!(cursor.expect_number().unwrap(), 42);
        assert_eq!(cursor.expect_number().unwrap(), 0);
        for bad in ["+3", "-1", "1.5", "99999999999"] {
            match cursor.expect_number() {
                Err(ParseError::InvalidNumber { found, .. }) => {
                    assert_eq!(found.as_deref(), Some(bad));
                }
                other => panic!("Expected InvalidNumber for {}, got {:?}", bad, other),
            }
            cursor.advance();
        }
        let err = cursor.expect_number().unwrap_err();
        assert!(err.is_end_of_input());
    }
}
