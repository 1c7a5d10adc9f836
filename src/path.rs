use thiserror::Error;

use crate::ast::Segment;

/// Malformed path expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathSyntaxError {
    /// A segment with neither a key nor a bracketed index, as in `a..b`
    #[error("Path syntax error in '{path}': empty segment")]
    EmptyKey { path: String },

    /// Bracket content is not a non-negative integer, or the bracket is not closed
    #[error("Path syntax error in '{path}': invalid array index in segment '{segment}'")]
    InvalidIndex { path: String, segment: String },
}

/// A compiled path: an ordered list of segments, empty for the root document.
pub type Path = Vec<Segment>;

/// Compile a path expression into segments.
///
/// Both index syntaxes compile to the same representation: `key[N]` becomes a
/// single indexed segment, and a bare numeral segment `N` (the legacy form)
/// becomes an index with an empty key applied to the value reached so far.
///
/// # Examples
///
/// ```
/// use jsonmatch::{compile_path, Segment};
///
/// assert_eq!(compile_path("").unwrap(), Vec::<Segment>::new());
/// assert_eq!(compile_path(".").unwrap(), Vec::<Segment>::new());
/// assert_eq!(
///     compile_path(".data.items[2]").unwrap(),
///     vec![Segment::key("data"), Segment::indexed("items", 2)]
/// );
/// assert_eq!(
///     compile_path("items.2").unwrap(),
///     vec![Segment::key("items"), Segment::index(2)]
/// );
/// assert_eq!(compile_path(".[1]").unwrap(), vec![Segment::index(1)]);
/// assert!(compile_path("a..b").is_err());
/// ```
pub fn compile_path(path: &str) -> Result<Path, PathSyntaxError> {
    let rest = path.strip_prefix('.').unwrap_or(path);
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    rest.split('.')
        .map(|raw| compile_segment(path, raw))
        .collect()
}

fn compile_segment(path: &str, raw: &str) -> Result<Segment, PathSyntaxError> {
    let Some((key, bracketed)) = raw.split_once('[') else {
        if raw.is_empty() {
            return Err(PathSyntaxError::EmptyKey {
                path: path.to_string(),
            });
        }
        if let Some(index) = parse_index(raw) {
            return Ok(Segment::index(index));
        }
        return Ok(Segment::key(raw));
    };

    let index = bracketed
        .strip_suffix(']')
        .and_then(parse_index)
        .ok_or_else(|| PathSyntaxError::InvalidIndex {
            path: path.to_string(),
            segment: raw.to_string(),
        })?;

    Ok(Segment::indexed(key, index))
}

/// Digits-only text is always an index; values past `usize::MAX` saturate so
/// that resolution reports them as out of bounds.
fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Render segments back into canonical bracket syntax, `.` for the root.
///
/// ```
/// use jsonmatch::{compile_path, path::render_path};
///
/// assert_eq!(render_path(&compile_path("a.b.0").unwrap()), ".a.b[0]");
/// assert_eq!(render_path(&compile_path("[3]").unwrap()), "[3]");
/// assert_eq!(render_path(&[]), ".");
/// ```
pub fn render_path(segments: &[Segment]) -> String {
    let mut rendered = String::new();
    for segment in segments {
        if !segment.key.is_empty() {
            rendered.push('.');
        }
        rendered.push_str(&segment.to_string());
    }

    if rendered.is_empty() {
        rendered.push('.');
    }
    rendered
}
