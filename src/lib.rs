pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod path;
pub mod resolver;
pub mod term;

pub use ast::{Segment, Token};
pub use error::{Error, Result};
pub use lexer::{LexError, Lexer, Position};
pub use matcher::{
    AssertionError, array_len, key_is_missing, match_null, match_pattern, read, read_string_array,
};
pub use parser::{ParseError, Parser, parse};
pub use path::{Path, PathSyntaxError, compile_path};
pub use resolver::{PathError, ShapeError, resolve};
pub use term::Term;
