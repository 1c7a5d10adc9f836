use std::fmt;

use thiserror::Error;

use crate::ast::Token;

/// Byte offset into the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "byte {}", self.offset)
    }
}

/// Errors raised while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },

    #[error("Invalid escape sequence '{escape}' at {position}")]
    InvalidEscape { escape: String, position: Position },

    #[error("Unescaped control character 0x{byte:02x} in string at {position}")]
    ControlCharacter { byte: u8, position: Position },

    #[error("Invalid UTF-8 in string starting at {position}")]
    InvalidUtf8 { position: Position },

    #[error("Malformed number '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },

    #[error("Unexpected token '{text}' at {position}")]
    UnknownIdentifier { text: String, position: Position },

    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
}

/// JSON tokenizer over a byte buffer.
///
/// All scanning state lives in the lexer itself; every parse owns a fresh one.
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    token_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Lexer {
            input,
            position: 0,
            token_start: 0,
        }
    }

    /// Where the most recently returned token started
    pub fn token_position(&self) -> Position {
        Position {
            offset: self.token_start,
        }
    }

    fn here(&self) -> Position {
        Position {
            offset: self.position,
        }
    }

    fn current_byte(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.current_byte() {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        while self.current_byte().is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
            self.advance();
        }

        match &self.input[start..self.position] {
            b"true" => Ok(Token::Boolean(true)),
            b"false" => Ok(Token::Boolean(false)),
            b"null" => Ok(Token::Null),
            text => Err(LexError::UnknownIdentifier {
                text: String::from_utf8_lossy(text).into_owned(),
                position: Position { offset: start },
            }),
        }
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.here();
        let mut result = Vec::new();
        self.advance(); // Consume opening quote

        loop {
            match self.current_byte() {
                None => return Err(LexError::UnterminatedString { position: start }),
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(b'\\') => {
                    let escape_start = self.here();
                    self.advance();
                    let ch = self.read_escape(escape_start)?;
                    let mut buf = [0; 4];
                    result.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                }
                Some(byte) if byte < 0x20 => {
                    return Err(LexError::ControlCharacter {
                        byte,
                        position: self.here(),
                    });
                }
                Some(byte) => {
                    result.push(byte);
                    self.advance();
                }
            }
        }

        String::from_utf8(result)
            .map(Token::String)
            .map_err(|_| LexError::InvalidUtf8 { position: start })
    }

    /// Decodes the escape following a backslash, leaving the cursor after it
    fn read_escape(&mut self, escape_start: Position) -> Result<char, LexError> {
        let Some(byte) = self.current_byte() else {
            return Err(LexError::UnterminatedString {
                position: escape_start,
            });
        };
        self.advance();

        let ch = match byte {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.read_unicode_escape(escape_start),
            other => {
                return Err(LexError::InvalidEscape {
                    escape: format!("\\{}", other as char),
                    position: escape_start,
                });
            }
        };
        Ok(ch)
    }

    fn read_unicode_escape(&mut self, escape_start: Position) -> Result<char, LexError> {
        let high = self.read_hex4(escape_start)?;

        let code = match high {
            0xD800..=0xDBFF => {
                // A high surrogate must be followed by an escaped low surrogate
                if self.input.get(self.position..self.position + 2) != Some(b"\\u") {
                    return Err(self.invalid_escape(escape_start));
                }
                self.position += 2;
                let low = self.read_hex4(escape_start)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.invalid_escape(escape_start));
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(self.invalid_escape(escape_start)),
            code => code,
        };

        char::from_u32(code).ok_or_else(|| self.invalid_escape(escape_start))
    }

    fn read_hex4(&mut self, escape_start: Position) -> Result<u32, LexError> {
        let digits = self
            .input
            .get(self.position..self.position + 4)
            .filter(|d| d.iter().all(u8::is_ascii_hexdigit))
            .ok_or_else(|| self.invalid_escape(escape_start))?;

        let code = digits
            .iter()
            .fold(0, |acc, d| acc * 16 + (*d as char).to_digit(16).unwrap_or(0));
        self.position += 4;
        Ok(code)
    }

    fn invalid_escape(&self, escape_start: Position) -> LexError {
        let end = self.position.min(self.input.len());
        LexError::InvalidEscape {
            escape: String::from_utf8_lossy(&self.input[escape_start.offset..end]).into_owned(),
            position: escape_start,
        }
    }

    fn read_digits(&mut self) -> usize {
        let start = self.position;
        while self.current_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }
        self.position - start
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut valid = true;

        if self.current_byte() == Some(b'-') {
            self.advance();
        }

        let int_start = self.position;
        let int_digits = self.read_digits();
        if int_digits == 0 || (int_digits > 1 && self.input[int_start] == b'0') {
            valid = false;
        }

        if self.current_byte() == Some(b'.') {
            self.advance();
            if self.read_digits() == 0 {
                valid = false;
            }
        }

        if let Some(b'e' | b'E') = self.current_byte() {
            self.advance();
            if let Some(b'+' | b'-') = self.current_byte() {
                self.advance();
            }
            if self.read_digits() == 0 {
                valid = false;
            }
        }

        let text = String::from_utf8_lossy(&self.input[start..self.position]).into_owned();
        if valid {
            Ok(Token::Number(text))
        } else {
            Err(LexError::InvalidNumber {
                text,
                position: Position { offset: start },
            })
        }
    }

    fn single(&mut self, token: Token) -> Result<Token, LexError> {
        self.advance();
        Ok(token)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        match self.current_byte() {
            None => Ok(Token::Eof),
            Some(b'{') => self.single(Token::LBrace),
            Some(b'}') => self.single(Token::RBrace),
            Some(b'[') => self.single(Token::LBracket),
            Some(b']') => self.single(Token::RBracket),
            Some(b':') => self.single(Token::Colon),
            Some(b',') => self.single(Token::Comma),
            Some(b'"') => self.read_string(),
            Some(b'-' | b'0'..=b'9') => self.read_number(),
            Some(b) if b.is_ascii_alphabetic() => self.read_identifier(),
            Some(_) => {
                let rest = String::from_utf8_lossy(&self.input[self.position..]);
                let ch = rest.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexError::UnexpectedChar {
                    ch,
                    position: self.here(),
                })
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new(b"true false null");
    assert_eq!(lexer.next_token(), Ok(Token::Boolean(true)));
    assert_eq!(lexer.next_token(), Ok(Token::Boolean(false)));
    assert_eq!(lexer.next_token(), Ok(Token::Null));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_object_tokens() {
    let mut lexer = Lexer::new(br#"{"key" : [1, -2.5]}"#);
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::String("key".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Colon));
    assert_eq!(lexer.next_token(), Ok(Token::LBracket));
    assert_eq!(lexer.next_token(), Ok(Token::Number("1".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Comma));
    assert_eq!(lexer.next_token(), Ok(Token::Number("-2.5".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::RBracket));
    assert_eq!(lexer.next_token(), Ok(Token::RBrace));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_token_position() {
    let mut lexer = Lexer::new(b"  [ true");
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_position(), Position { offset: 2 });
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_position(), Position { offset: 4 });
}
