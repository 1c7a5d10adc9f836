use std::fmt;

/// A lexical token of a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Number literal, kept as its source text
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -123.456
    /// 1e10
    /// ```
    Number(String),

    /// String literal enclosed in double quotes, escapes already decoded
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "tab\there"
    /// "é"
    /// ```
    String(String),

    /// `true` or `false`
    Boolean(bool),

    /// `null`
    Null,

    // Structural
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Boolean(b) => write!(f, "{}", b),
            Token::Null => write!(f, "null"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Colon => write!(f, ":"),
            Token::Comma => write!(f, ","),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
