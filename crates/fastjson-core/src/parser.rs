//! Recursive-descent JSON parser.
//!
//! Consumes scanner tokens and builds a [`Value`] tree in one pass over the
//! complete document. Grammar is standard JSON: object keys must be string
//! tokens, trailing commas are rejected, and any non-whitespace content
//! after the document is "extra data". Nesting is guarded by an explicit
//! depth counter checked against [`MAX_DEPTH`](crate::MAX_DEPTH), so deeply
//! nested input fails with [`JsonError::DepthLimit`] instead of exhausting
//! the call stack. The first violation is terminal; there is no recovery.

use crate::error::{JsonError, Result};
use crate::scanner::{Scanner, Token};
use crate::stream::CharSource;
use crate::value::{insert_entry, Value};
use crate::MAX_DEPTH;

/// Parse one complete document from a character source.
pub fn parse_source(source: CharSource<'_>) -> Result<Value> {
    Parser::new(Scanner::new(source))?.parse()
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(mut scanner: Scanner<'a>) -> Result<Self> {
        let current = scanner.next_token()?;
        Ok(Self {
            scanner,
            current,
            depth: 0,
        })
    }

    fn parse(mut self) -> Result<Value> {
        let value = self.parse_value()?;
        if self.current != Token::Eof {
            return Err(self.unexpected("extra data after document"));
        }
        Ok(value)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.scanner.next_token()?;
        Ok(())
    }

    fn unexpected(&self, message: &str) -> JsonError {
        JsonError::Syntax {
            offset: self.scanner.token_offset(),
            message: message.to_string(),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        let value = match &self.current {
            Token::Null => Value::Null,
            Token::True => Value::Bool(true),
            Token::False => Value::Bool(false),
            Token::Int(i) => Value::Int(i.clone()),
            Token::Float(f) => Value::Float(*f),
            Token::String(s) => Value::String(s.clone()),
            Token::LeftBrace => return self.parse_object(),
            Token::LeftBracket => return self.parse_array(),
            Token::Eof => return Err(self.unexpected("unexpected end of input")),
            _ => return Err(self.unexpected("expected a value")),
        };
        self.advance()?;
        Ok(value)
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(JsonError::DepthLimit(MAX_DEPTH));
        }
        // Past the opening brace.
        self.advance()?;

        let mut members: Vec<(String, Value)> = Vec::new();
        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Object(members));
        }

        loop {
            let key = match &self.current {
                Token::String(s) => s.clone(),
                _ => return Err(self.unexpected("object keys must be strings")),
            };
            self.advance()?;

            if self.current != Token::Colon {
                return Err(self.unexpected("expected ':' after object key"));
            }
            self.advance()?;

            let value = self.parse_value()?;
            insert_entry(&mut members, key, value);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBrace {
                        return Err(self.unexpected("trailing comma before '}'"));
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("expected ',' or '}' in object")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(JsonError::DepthLimit(MAX_DEPTH));
        }
        // Past the opening bracket.
        self.advance()?;

        let mut items = Vec::new();
        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBracket {
                        return Err(self.unexpected("trailing comma before ']'"));
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("expected ',' or ']' in array")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}
