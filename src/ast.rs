//! # Syntax types
//!
//! Two small languages meet in this crate:
//!
//! - **[tokens]** - Lexical tokens of a JSON document, produced by the
//!   [`Lexer`](crate::lexer::Lexer) and consumed by the
//!   [`Parser`](crate::parser::Parser)
//! - **[segment]** - Steps of a compiled path expression, produced by
//!   [`compile_path`](crate::path::compile_path) and walked by
//!   [`resolve`](crate::resolver::resolve)
//!
//! ## Path expressions
//!
//! ```text
//! path     := ("." )? segment ("." segment)*  | ""
//! segment  := key ("[" digits "]")?  | digits
//! ```
//!
//! ```text
//! .user.name          // object members
//! .items[0]           // member, then array index
//! [1]                 // index into a root array
//! .items.0            // legacy bare-numeral index, same as .items[0]
//! ```
pub mod segment;
pub mod tokens;

pub use segment::Segment;
pub use tokens::Token;
