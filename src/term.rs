use std::collections::HashMap;

/// One parsed JSON value.
///
/// Numbers keep the exact text they had in the source document, so that
/// `-123.456` is matched and read back as `-123.456` and never reformatted.
/// A tree is immutable once built and owned by the call that parsed it.
///
/// # Examples
///
/// ```
/// use jsonmatch::Term;
/// use std::collections::HashMap;
///
/// let number = Term::Number("-123.456".to_string());
/// assert_eq!(number.scalar_text(), Some("-123.456"));
///
/// let mut obj = HashMap::new();
/// obj.insert("key".to_string(), Term::String("value".to_string()));
/// let object = Term::Object(obj);
/// assert_eq!(object.type_name(), "object");
/// assert_eq!(object.scalar_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// JSON null
    Null,

    /// JSON boolean
    Bool(bool),

    /// Number, as written in the source
    Number(String),

    /// Unescaped UTF-8 string
    String(String),

    /// Ordered array of values
    Array(Vec<Term>),

    /// Object members; the last occurrence of a duplicate key wins
    Object(HashMap<String, Term>),
}

impl Term {
    /// Human-readable type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Term::Null => "null",
            Term::Bool(_) => "boolean",
            Term::Number(_) => "number",
            Term::String(_) => "string",
            Term::Array(_) => "array",
            Term::Object(_) => "object",
        }
    }

    /// Anything but an array or object
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Term::Array(_) | Term::Object(_))
    }

    /// Text of a scalar value, `None` for arrays and objects.
    ///
    /// Strings yield their unescaped content, numbers their raw source text,
    /// booleans `true`/`false` and null `null`.
    pub fn scalar_text(&self) -> Option<&str> {
        match self {
            Term::Null => Some("null"),
            Term::Bool(true) => Some("true"),
            Term::Bool(false) => Some("false"),
            Term::Number(n) => Some(n),
            Term::String(s) => Some(s),
            Term::Array(_) | Term::Object(_) => None,
        }
    }

    /// Member names of an object in sorted order, `None` for anything else
    pub fn sorted_keys(&self) -> Option<Vec<String>> {
        match self {
            Term::Object(obj) => {
                let mut keys: Vec<String> = obj.keys().cloned().collect();
                keys.sort();
                Some(keys)
            }
            _ => None,
        }
    }
}
