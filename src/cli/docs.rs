//! Documentation content for the jsonmatch CLI

/// Path syntax reference printed by `jsonmatch syntax`
pub fn get_syntax_doc() -> &'static str {
    SYNTAX_DOC
}

const SYNTAX_DOC: &str = r#"JSONMATCH PATH SYNTAX

ROOT ACCESS
  ""  or  .
    The entire JSON document. Any JSON value may be the root.

    Example:
      Input:  null
      Command: jsonmatch null .
      Output: OK

FIELD ACCESS
  .field
    Access an object member by name. The leading dot is optional.

    Example:
      Input:  {"user": {"name": "Alice"}}
      Command: jsonmatch read .user.name
      Output: Alice

    Constraints:
      - A missing member is an error that lists the keys present
      - Names are case-sensitive and may not contain '.' or '['

ARRAY INDEX ACCESS
  .field[index]
  .field.index
    Access array elements by zero-based index. Both forms are equivalent.

    Example:
      Input:  {"items": ["a", "b", "c"]}
      Command: jsonmatch read .items[1]
      Output: b

    Root arrays:
      [1]   or  .[1]  or  .1

    Constraints:
      - Index out of bounds is an error reporting the array length
      - Index must be a non-negative integer

ASSERTIONS
  null PATH           value is null
  match PATH REGEX    regex matches somewhere in the scalar's text
  len PATH N          value is an array of exactly N elements
  read PATH           print the scalar's text
  read-array PATH     print the array's scalar elements as a JSON array
  missing PATH        the final key of PATH is absent

  Numbers are matched and read exactly as written: -123.456 stays -123.456.
"#;
