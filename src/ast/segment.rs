use std::fmt;

/// One navigation step of a compiled path.
///
/// A segment with a non-empty `key` descends into that object member. When
/// `index` is present the value reached so far (the member, or the current
/// value itself when `key` is empty) is indexed as an array.
///
/// # Examples
///
/// - `.user` → `Segment { key: "user", index: None }`
/// - `.items[2]` → `Segment { key: "items", index: Some(2) }`
/// - `[1]` or the legacy `.1` → `Segment { key: "", index: Some(1) }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Object member name; empty for a bare array index
    pub key: String,

    /// Array index applied after the key lookup
    pub index: Option<usize>,
}

impl Segment {
    /// Plain object key lookup, as in `.name`.
    pub fn key(key: impl Into<String>) -> Self {
        Segment {
            key: key.into(),
            index: None,
        }
    }

    /// Key lookup followed by an array index, as in `.items[2]`.
    pub fn indexed(key: impl Into<String>, index: usize) -> Self {
        Segment {
            key: key.into(),
            index: Some(index),
        }
    }

    /// Bare array index on the current value, as in `.2` or `[2]`.
    pub fn index(index: usize) -> Self {
        Segment::indexed(String::new(), index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}
