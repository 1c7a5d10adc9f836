use std::{collections::HashMap, mem};

use thiserror::Error;

use crate::{
    ast::Token,
    lexer::{LexError, Lexer, Position},
    term::Term,
};

/// Malformed JSON input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: expected {expected}, got '{found}' at {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: Position,
    },

    #[error("Parse error: unexpected end of input at {position}, expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        position: Position,
    },

    #[error("Parse error: trailing '{found}' at {position} after the document")]
    TrailingTokens { found: String, position: Position },

    #[error("Parse error: nesting deeper than {max} levels at {position}", max = MAX_DEPTH)]
    TooDeep { position: Position },
}

/// Maximum nesting of objects and arrays, matching `serde_json`.
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent parser turning a token stream into a [`Term`] tree.
///
/// ```text
/// document := term EOF
/// term     := object | array | string | number | true | false | null
/// object   := '{' (string ':' term (',' string ':' term)*)? '}'
/// array    := '[' (term (',' term)*)? ']'
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    current_position: Position,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_position();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_position();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match &self.current_token {
            Token::Eof => ParseError::UnexpectedEof {
                expected,
                position: self.current_position,
            },
            token => ParseError::UnexpectedToken {
                expected,
                found: token.to_string(),
                position: self.current_position,
            },
        }
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(description));
        }
        self.advance()
    }

    /// Parses a whole document: exactly one term followed by end of input.
    pub fn parse(&mut self) -> Result<Term, ParseError> {
        let term = self.parse_term()?;

        if !self.check(&Token::Eof) {
            return Err(ParseError::TrailingTokens {
                found: self.current_token.to_string(),
                position: self.current_position,
            });
        }
        Ok(term)
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                position: self.current_position,
            });
        }
        self.depth += 1;
        self.advance()
    }

    fn parse_term(&mut self) -> Result<Term, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::LBrace => {
                self.descend()?;
                let term = self.parse_object()?;
                self.depth -= 1;
                Ok(term)
            }
            Token::LBracket => {
                self.descend()?;
                let term = self.parse_array()?;
                self.depth -= 1;
                Ok(term)
            }
            Token::String(s) => {
                self.advance()?;
                Ok(Term::String(s))
            }
            Token::Number(n) => {
                self.advance()?;
                Ok(Term::Number(n))
            }
            Token::Boolean(b) => {
                self.advance()?;
                Ok(Term::Bool(b))
            }
            Token::Null => {
                self.advance()?;
                Ok(Term::Null)
            }
            token => {
                self.current_token = token;
                Err(self.unexpected("a value"))
            }
        }
    }

    fn parse_object(&mut self) -> Result<Term, ParseError> {
        let mut members = HashMap::new();

        if self.check(&Token::RBrace) {
            self.advance()?;
            return Ok(Term::Object(members));
        }

        loop {
            let key = match mem::replace(&mut self.current_token, Token::Eof) {
                Token::String(s) => s,
                token => {
                    self.current_token = token;
                    return Err(self.unexpected("a string key"));
                }
            };
            self.advance()?;

            self.expect(Token::Colon, "':'")?;

            let value = self.parse_term()?;
            members.insert(key, value);

            if self.check(&Token::Comma) {
                self.advance()?;
            } else {
                self.expect(Token::RBrace, "',' or '}'")?;
                return Ok(Term::Object(members));
            }
        }
    }

    fn parse_array(&mut self) -> Result<Term, ParseError> {
        let mut elements = vec![];

        if self.check(&Token::RBracket) {
            self.advance()?;
            return Ok(Term::Array(elements));
        }

        loop {
            elements.push(self.parse_term()?);

            if self.check(&Token::Comma) {
                self.advance()?;
            } else {
                self.expect(Token::RBracket, "',' or ']'")?;
                return Ok(Term::Array(elements));
            }
        }
    }
}

/// Parses a complete JSON document of any shape.
///
/// # Examples
///
/// ```
/// use jsonmatch::{parse, Term};
///
/// let term = parse(br#"{"key": [null, -1.5]}"#).unwrap();
/// let Term::Object(obj) = term else { panic!("expected object") };
/// assert_eq!(
///     obj["key"],
///     Term::Array(vec![Term::Null, Term::Number("-1.5".to_string())])
/// );
///
/// assert!(parse(b"").is_err());
/// assert!(parse(b"[1,]").is_err());
/// ```
pub fn parse(input: &[u8]) -> Result<Term, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}
