use thiserror::Error;

use crate::{
    matcher::AssertionError,
    parser::ParseError,
    path::PathSyntaxError,
    resolver::{PathError, ShapeError},
};

/// Every way a query or assertion can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    PathSyntax(#[from] PathSyntaxError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error("Failed to compile regexp '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Navigation stopped at an object that lacks the requested key
    pub fn is_missing_key(&self) -> bool {
        matches!(self, Error::Path(PathError::MissingKey { .. }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
