//! Typed assertions over a JSON response body.
//!
//! Every operation takes the raw body and a path expression, parses the body,
//! compiles the path, resolves it and then checks the value found there.
//! Nothing is cached between calls and nothing is retried; polling an endpoint
//! until an assertion holds is up to the caller.
//!
//! ```
//! use jsonmatch::matcher;
//!
//! let body = br#"{"data": {"users": [{"name": "apa", "age": -12.5}]}}"#;
//!
//! matcher::match_pattern(body, ".data.users[0].name", "^apa$").unwrap();
//! matcher::array_len(body, ".data.users", 1).unwrap();
//! assert_eq!(matcher::read(body, "data.users.0.age").unwrap(), "-12.5");
//! matcher::key_is_missing(body, ".data.groups").unwrap();
//! ```

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{
    ast::Segment,
    error::{Error, Result},
    parser::parse,
    path::{compile_path, render_path},
    resolver::{ShapeError, resolve, step},
    term::Term,
};

/// Navigation succeeded but the asserted property does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    #[error("Match error: expected null at '{path}', got {found}. JSON: {json}")]
    NotNull {
        path: String,
        found: &'static str,
        json: String,
    },

    #[error("Match error: values mismatch at '{path}', pattern: '{pattern}' value: '{value}'. JSON: {json}")]
    Mismatch {
        path: String,
        pattern: String,
        value: String,
        json: String,
    },

    #[error("Match error: expected an array of length {expected} at '{path}', got {actual}. JSON: {json}")]
    WrongLength {
        path: String,
        expected: usize,
        actual: usize,
        json: String,
    },

    #[error("Match error: expected '{path}' to be missing, but it is present. JSON: {json}")]
    KeyPresent { path: String, json: String },
}

/// Succeeds when the value at `path` is JSON `null`.
pub fn match_null(json: &[u8], path: &str) -> Result<()> {
    traced("match_null", path, || {
        let root = parse(json)?;
        let segments = compile_path(path)?;
        let found = resolve(&root, &segments)?;

        match found {
            Term::Null => Ok(()),
            other => Err(AssertionError::NotNull {
                path: render_path(&segments),
                found: other.type_name(),
                json: document(json),
            }
            .into()),
        }
    })
}

/// Succeeds when `pattern` matches somewhere in the text of the scalar at
/// `path`. Numbers are matched against their source text.
pub fn match_pattern(json: &[u8], path: &str, pattern: &str) -> Result<()> {
    traced("match", path, || {
        let re = Regex::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let root = parse(json)?;
        let segments = compile_path(path)?;
        let value = scalar_at(&root, &segments)?;

        if !re.is_match(value) {
            return Err(AssertionError::Mismatch {
                path: render_path(&segments),
                pattern: pattern.to_string(),
                value: value.to_string(),
                json: document(json),
            }
            .into());
        }
        Ok(())
    })
}

/// Succeeds when the value at `path` is an array of exactly `length` elements.
pub fn array_len(json: &[u8], path: &str, length: usize) -> Result<()> {
    traced("array_len", path, || {
        let root = parse(json)?;
        let segments = compile_path(path)?;
        let elements = array_at(&root, &segments)?;

        if elements.len() != length {
            return Err(AssertionError::WrongLength {
                path: render_path(&segments),
                expected: length,
                actual: elements.len(),
                json: document(json),
            }
            .into());
        }
        Ok(())
    })
}

/// Returns the text of the scalar at `path`.
pub fn read(json: &[u8], path: &str) -> Result<String> {
    traced("read", path, || {
        let root = parse(json)?;
        let segments = compile_path(path)?;
        scalar_at(&root, &segments).map(str::to_string)
    })
}

/// Returns the text of every element of the array at `path`.
///
/// Fails without a partial result if any element is an array or object.
pub fn read_string_array(json: &[u8], path: &str) -> Result<Vec<String>> {
    traced("read_string_array", path, || {
        let root = parse(json)?;
        let segments = compile_path(path)?;
        let elements = array_at(&root, &segments)?;

        elements
            .iter()
            .enumerate()
            .map(|(i, element)| {
                element.scalar_text().map(str::to_string).ok_or_else(|| {
                    let mut walked = segments.clone();
                    walked.push(Segment::index(i));
                    shape_error(&walked, "scalar", element)
                })
            })
            .collect()
    })
}

/// Succeeds when resolving `path` stops on a missing key at its final segment.
///
/// A present key fails regardless of its value, `null` included. Any other
/// failure on the way (a missing intermediate key, a shape mismatch, an index
/// out of bounds) is returned unchanged. A bare `null` document has no keys,
/// so the root path counts as missing there.
pub fn key_is_missing(json: &[u8], path: &str) -> Result<()> {
    traced("key_is_missing", path, || {
        let root = parse(json)?;
        let segments = compile_path(path)?;

        let present = || -> Result<()> {
            Err(AssertionError::KeyPresent {
                path: render_path(&segments),
                json: document(json),
            }
            .into())
        };

        let Some((last, parents)) = segments.split_last() else {
            return match root {
                Term::Null => Ok(()),
                _ => present(),
            };
        };

        let parent = resolve(&root, parents)?;
        match step(parent, last, &segments) {
            Ok(_) => present(),
            Err(e) if e.is_missing_key() => Ok(()),
            Err(e) => Err(e),
        }
    })
}

fn scalar_at<'t>(root: &'t Term, segments: &[Segment]) -> Result<&'t str> {
    let found = resolve(root, segments)?;
    found
        .scalar_text()
        .ok_or_else(|| shape_error(segments, "scalar", found))
}

fn array_at<'t>(root: &'t Term, segments: &[Segment]) -> Result<&'t [Term]> {
    match resolve(root, segments)? {
        Term::Array(elements) => Ok(elements.as_slice()),
        other => Err(shape_error(segments, "array", other)),
    }
}

fn shape_error(segments: &[Segment], expected: &'static str, found: &Term) -> Error {
    ShapeError {
        path: render_path(segments),
        expected,
        found: found.type_name(),
    }
    .into()
}

fn document(json: &[u8]) -> String {
    String::from_utf8_lossy(json).trim().to_string()
}

fn traced<T>(operation: &'static str, path: &str, run: impl FnOnce() -> Result<T>) -> Result<T> {
    debug!(operation, path, "Running assertion");
    let result = run();
    if let Err(e) = &result {
        debug!(operation, path, error = %e, "Assertion failed");
    }
    result
}
