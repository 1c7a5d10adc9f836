use thiserror::Error;
use tracing::trace;

use crate::{ast::Segment, error::Result, path::render_path, term::Term};

/// The value found does not have the shape the operation needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Shape error: expected {expected} at '{path}', found {found}")]
pub struct ShapeError {
    pub path: String,
    pub expected: &'static str,
    pub found: &'static str,
}

/// Navigation failed on an absent key or an out-of-range index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Path error: missing key '{key}' at '{path}', available keys: [{}]", .available.join(", "))]
    MissingKey {
        key: String,
        path: String,
        available: Vec<String>,
    },

    #[error("Path error: index {index} out of bounds at '{path}', array length is {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        path: String,
    },
}

/// Walk `term` along `segments` and return the value found there.
///
/// The empty path yields `term` itself. Resolution never modifies the tree.
///
/// # Examples
///
/// ```
/// use jsonmatch::{compile_path, parse, resolve, Term};
///
/// let doc = parse(br#"{"keyA": ["value1", "value2"]}"#).unwrap();
/// let found = resolve(&doc, &compile_path(".keyA[1]").unwrap()).unwrap();
/// assert_eq!(found, &Term::String("value2".to_string()));
///
/// let err = resolve(&doc, &compile_path(".keyB").unwrap()).unwrap_err();
/// assert!(err.is_missing_key());
/// ```
pub fn resolve<'t>(term: &'t Term, segments: &[Segment]) -> Result<&'t Term> {
    segments
        .iter()
        .enumerate()
        .try_fold(term, |current, (depth, segment)| {
            step(current, segment, &segments[..=depth])
        })
}

/// Apply a single segment to `current`; `walked` is the path up to and
/// including `segment`, used for error context.
pub(crate) fn step<'t>(current: &'t Term, segment: &Segment, walked: &[Segment]) -> Result<&'t Term> {
    let mut found = current;

    if !segment.key.is_empty() {
        let Term::Object(members) = current else {
            return Err(ShapeError {
                path: render_path(&walked[..walked.len() - 1]),
                expected: "object",
                found: current.type_name(),
            }
            .into());
        };

        found = members.get(&segment.key).ok_or_else(|| PathError::MissingKey {
            key: segment.key.clone(),
            path: render_path(&walked[..walked.len() - 1]),
            available: current.sorted_keys().unwrap_or_default(),
        })?;
    }

    if let Some(index) = segment.index {
        let location = || {
            let mut prefix = walked.to_vec();
            if let Some(last) = prefix.last_mut() {
                last.index = None;
            }
            render_path(&prefix)
        };

        let Term::Array(elements) = found else {
            return Err(ShapeError {
                path: location(),
                expected: "array",
                found: found.type_name(),
            }
            .into());
        };

        found = elements.get(index).ok_or_else(|| PathError::IndexOutOfBounds {
            index,
            len: elements.len(),
            path: location(),
        })?;
    }

    trace!(segment = %segment, found = found.type_name(), "Resolved segment");
    Ok(found)
}
