// Matcher Tests
//
// Assertions over raw response bodies, including the scenarios the step
// definitions of the acceptance suites rely on.

use jsonmatch::matcher::{
    AssertionError, array_len, key_is_missing, match_null, match_pattern, read, read_string_array,
};
use jsonmatch::{Error, ParseError, PathError, PathSyntaxError, ShapeError};

// ============================================================================
// match_null
// ============================================================================

#[test]
fn test_match_null_root_document() {
    assert!(match_null(b" null  ", "").is_ok());
    assert!(match_null(b"null", "").is_ok());
    assert!(match_null(b"null", ".").is_ok());
}

#[test]
fn test_match_null_nested() {
    assert!(match_null(br#"{"key": null}"#, ".key").is_ok());
    assert!(match_null(br#"{"key": [null]}"#, ".key[0]").is_ok());
    assert!(match_null(br#"{"key": [null]}"#, ".key.0").is_ok());
}

#[test]
fn test_match_null_rejects_non_null() {
    let test_cases = vec![
        (r#"{"key": []}"#, "array"),
        (r#"{"key": [null]}"#, "array"),
        (r#"{"key": {}}"#, "object"),
        (r#"{"key": ""}"#, "string"),
        (r#"{"key": "abc"}"#, "string"),
        (r#"{"key": 0}"#, "number"),
        (r#"{"key": false}"#, "boolean"),
    ];

    for (json, actual) in test_cases {
        match match_null(json.as_bytes(), ".key") {
            Err(Error::Assertion(AssertionError::NotNull { found, .. })) => {
                assert_eq!(found, actual, "Failed for {}", json)
            }
            other => panic!("Expected NotNull for {}, got {:?}", json, other),
        }
    }
}

#[test]
fn test_match_null_absent_or_invalid() {
    assert!(matches!(
        match_null(b"", "").unwrap_err(),
        Error::Parse(ParseError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        match_null(br#"{"other": null}"#, ".key").unwrap_err(),
        Error::Path(PathError::MissingKey { .. })
    ));
    assert!(matches!(
        match_null(b"null", ".key").unwrap_err(),
        Error::Shape(ShapeError { expected: "object", found: "null", .. })
    ));
}

#[test]
fn test_match_null_deeply_nested_document() {
    assert!(matches!(
        match_null("[".repeat(200_000).as_bytes(), "").unwrap_err(),
        Error::Parse(ParseError::TooDeep { .. })
    ));
}

// ============================================================================
// match_pattern
// ============================================================================

#[test]
fn test_match_smoke() {
    assert!(match_pattern(br#"{"key" : "value"}"#, ".key", "value").is_ok());
}

#[test]
fn test_match_nested() {
    let json = br#"{"keyA" : {"keyB" : "valueB", "keyC": "valueC"}}"#;
    assert!(match_pattern(json, ".keyA.keyB", "valueB").is_ok());
    assert!(match_pattern(json, ".keyA.keyC", "valueC").is_ok());
}

#[test]
fn test_match_mismatch() {
    let err = match_pattern(br#"{"keyA" : {"keyB" : "valueA"}}"#, ".keyA.keyB", "valueB").unwrap_err();
    match err {
        Error::Assertion(AssertionError::Mismatch {
            path,
            pattern,
            value,
            json,
        }) => {
            assert_eq!(path, ".keyA.keyB");
            assert_eq!(pattern, "valueB");
            assert_eq!(value, "valueA");
            assert_eq!(json, r#"{"keyA" : {"keyB" : "valueA"}}"#);
        }
        other => panic!("Expected Mismatch, got {:?}", other),
    }
}

#[test]
fn test_match_numbers_use_source_text() {
    let test_cases = vec![
        (r#"{"key" : 12345}"#, "12345"),
        (r#"{"key" : 123.456}"#, r"\d{3}\.\d{3}"),
        (r#"{"key" : -12345}"#, "-12345"),
        (r#"{"key" : -123.456}"#, r"^-\d{3}\.\d{3}$"),
        (r#"{"key" : 1.50}"#, r"^1\.50$"),
        (r#"{"key" : 1e10}"#, r"^1e10$"),
    ];

    for (json, pattern) in test_cases {
        assert!(
            match_pattern(json.as_bytes(), ".key", pattern).is_ok(),
            "Failed for {} with {}",
            json,
            pattern
        );
    }
}

#[test]
fn test_match_is_unanchored() {
    let json = br#"{"email": "user-42@example.com"}"#;
    assert!(match_pattern(json, ".email", "@example").is_ok());
    assert!(match_pattern(json, ".email", r"^user-\d+@").is_ok());
    assert!(match_pattern(json, ".email", "^example").is_err());
}

#[test]
fn test_match_booleans_and_null() {
    let json = br#"{"active": true, "deleted": null}"#;
    assert!(match_pattern(json, ".active", "^true$").is_ok());
    assert!(match_pattern(json, ".deleted", "^null$").is_ok());
}

#[test]
fn test_match_array_elements() {
    assert!(match_pattern(br#"{"keyA" : ["value1", "value2"]}"#, ".keyA[1]", "value2").is_ok());
    assert!(match_pattern(br#"["value1", "value2"]"#, "[1]", "value2").is_ok());
    assert!(match_pattern(br#"["value1", "value2"]"#, ".[1]", "value2").is_ok());
    assert!(match_pattern(br#"["value1", "value2"]"#, ".1", "value2").is_ok());
}

#[test]
fn test_match_composite_is_shape_error() {
    let err = match_pattern(br#"{"key": {"a": 1}}"#, ".key", ".*").unwrap_err();
    assert!(matches!(
        err,
        Error::Shape(ShapeError { expected: "scalar", found: "object", .. })
    ));

    let err = match_pattern(br#"{"key": [1]}"#, ".key", ".*").unwrap_err();
    assert!(matches!(
        err,
        Error::Shape(ShapeError { expected: "scalar", found: "array", .. })
    ));
}

#[test]
fn test_match_invalid_regex() {
    let err = match_pattern(br#"{"key": "value"}"#, ".key", "[unclosed").unwrap_err();
    match err {
        Error::Pattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
        other => panic!("Expected Pattern, got {:?}", other),
    }
}

// ============================================================================
// array_len
// ============================================================================

#[test]
fn test_array_len() {
    assert!(array_len(br#"{"data": ["value1", "value2"]}"#, ".data", 2).is_ok());
    assert!(array_len(br#"["value1", "value2"]"#, ".", 2).is_ok());
    assert!(array_len(br#"["value1", "value2"]"#, "", 2).is_ok());
    assert!(array_len(br#"["value1"]"#, "", 1).is_ok());
    assert!(array_len(br#"["value1", 1]"#, "", 2).is_ok());
    assert!(array_len(br#"{"data": []}"#, ".data", 0).is_ok());
}

#[test]
fn test_array_len_is_exact() {
    let json = br#"{"data": [1, 2, 3]}"#;
    assert!(array_len(json, ".data", 3).is_ok());
    assert!(array_len(json, ".data", 2).is_err());
    assert!(array_len(json, ".data", 4).is_err());
}

#[test]
fn test_array_len_wrong_length_message() {
    let err = array_len(br#"["value1"]"#, "", 2).unwrap_err();
    match &err {
        Error::Assertion(AssertionError::WrongLength { expected, actual, .. }) => {
            assert_eq!(*expected, 2);
            assert_eq!(*actual, 1);
        }
        other => panic!("Expected WrongLength, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("length 2"), "{}", message);
    assert!(message.contains("got 1"), "{}", message);
}

#[test]
fn test_array_len_not_an_array() {
    for json in [r#"{"data": "value1"}"#, r#"{"data": null}"#, r#"{"data": {}}"#] {
        let err = array_len(json.as_bytes(), ".data", 1).unwrap_err();
        assert!(
            matches!(err, Error::Shape(ShapeError { expected: "array", .. })),
            "Failed for {}: {:?}",
            json,
            err
        );
    }
}

#[test]
fn test_array_len_malformed_document() {
    // Missing colon between key and value
    let err = array_len(br#"{"data" ["value1", "value2"]}"#, ".data", 2).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

// ============================================================================
// read
// ============================================================================

#[test]
fn test_read_scalars() {
    let json = r#"{"key": "value", "n": -123.456, "b": false, "z": null, "s": "a \"quoted\" é"}"#.as_bytes();
    assert_eq!(read(json, ".key").unwrap(), "value");
    assert_eq!(read(json, ".n").unwrap(), "-123.456");
    assert_eq!(read(json, ".b").unwrap(), "false");
    assert_eq!(read(json, ".z").unwrap(), "null");
    assert_eq!(read(json, ".s").unwrap(), "a \"quoted\" é");
}

#[test]
fn test_read_root_scalar() {
    assert_eq!(read(b"42", "").unwrap(), "42");
    assert_eq!(read(br#""text""#, ".").unwrap(), "text");
}

#[test]
fn test_read_composite_fails() {
    let err = read(br#"{"key" : {"value" : 98} }"#, ".key").unwrap_err();
    assert!(matches!(
        err,
        Error::Shape(ShapeError { expected: "scalar", found: "object", .. })
    ));
}

#[test]
fn test_read_missing_key() {
    let err = read(br#"{"apa" : "value" }"#, ".key").unwrap_err();
    match err {
        Error::Path(PathError::MissingKey { key, available, .. }) => {
            assert_eq!(key, "key");
            assert_eq!(available, vec!["apa"]);
        }
        other => panic!("Expected MissingKey, got {:?}", other),
    }
}

#[test]
fn test_read_oversized_index() {
    for path in [".a[99999999999999999999999]", ".a.99999999999999999999999"] {
        let err = read(br#"{"a":[1]}"#, path).unwrap_err();
        assert!(
            matches!(err, Error::Path(PathError::IndexOutOfBounds { len: 1, .. })),
            "Expected IndexOutOfBounds for {}, got {:?}",
            path,
            err
        );
    }
}

// ============================================================================
// read_string_array
// ============================================================================

#[test]
fn test_read_string_array() {
    assert_eq!(
        read_string_array(br#"{"key" : ["value1", "value2"]}"#, ".key").unwrap(),
        vec!["value1", "value2"]
    );
    assert_eq!(read_string_array(br#"["apa"]"#, "").unwrap(), vec!["apa"]);
    assert_eq!(read_string_array(br#"["apa", ""]"#, "").unwrap(), vec!["apa", ""]);
    assert_eq!(
        read_string_array(br#"[1, -2.5, true, null]"#, "").unwrap(),
        vec!["1", "-2.5", "true", "null"]
    );
    assert!(read_string_array(b"[]", "").unwrap().is_empty());
}

#[test]
fn test_read_string_array_failures() {
    assert!(matches!(
        read_string_array(br#"{"key" : "value" }"#, ".key").unwrap_err(),
        Error::Shape(ShapeError { expected: "array", found: "string", .. })
    ));
    assert!(matches!(
        read_string_array(br#"{"key" : {"value" : 98} }"#, ".key").unwrap_err(),
        Error::Shape(ShapeError { expected: "array", found: "object", .. })
    ));
    assert!(matches!(
        read_string_array(br#"{"apa" : ["value1", "value2"] }"#, ".key").unwrap_err(),
        Error::Path(PathError::MissingKey { .. })
    ));
}

#[test]
fn test_read_string_array_names_offending_element() {
    let err = read_string_array(br#"["apa", {"a":1}]"#, "").unwrap_err();
    match err {
        Error::Shape(ShapeError { path, expected, found }) => {
            assert_eq!(path, "[1]");
            assert_eq!(expected, "scalar");
            assert_eq!(found, "object");
        }
        other => panic!("Expected ShapeError, got {:?}", other),
    }

    let err = read_string_array(br#"{"list": ["a", "b", ["c"]]}"#, ".list").unwrap_err();
    assert!(err.to_string().contains(".list[2]"), "{}", err);
}

// ============================================================================
// key_is_missing
// ============================================================================

#[test]
fn test_key_is_missing() {
    assert!(key_is_missing(b"{}", "a").is_ok());
    assert!(key_is_missing(br#"{"a": { "b": "test"} }"#, "a.c").is_ok());
    assert!(key_is_missing(br#"{"a": { "b": "test"} }"#, ".a.c").is_ok());
    assert!(key_is_missing(br#"{"a": [{"b": 1}]}"#, ".a[0].c").is_ok());
    assert!(key_is_missing(b" null  ", "").is_ok());
}

#[test]
fn test_key_is_missing_when_present() {
    let test_cases = vec![
        (r#"{"a":1}"#, "a"),
        (r#"{"a":1}"#, ".a"),
        (r#"{"a": { "b": "test"} }"#, ".a.b"),
        (r#"{"a": null}"#, ".a"),
        (r#"{"a": []}"#, ".a"),
        (r#"{"a": ["x"]}"#, ".a[0]"),
        ("{}", ""),
    ];

    for (json, path) in test_cases {
        let err = key_is_missing(json.as_bytes(), path).unwrap_err();
        assert!(
            matches!(err, Error::Assertion(AssertionError::KeyPresent { .. })),
            "Expected KeyPresent for {} at {}, got {:?}",
            json,
            path,
            err
        );
    }
}

#[test]
fn test_key_is_missing_propagates_other_errors() {
    // Intermediate key absent
    assert!(matches!(
        key_is_missing(br#"{"a": {}}"#, ".x.c").unwrap_err(),
        Error::Path(PathError::MissingKey { .. })
    ));
    // Index out of bounds
    assert!(matches!(
        key_is_missing(br#"{"a": []}"#, ".a[0]").unwrap_err(),
        Error::Path(PathError::IndexOutOfBounds { .. })
    ));
    // Walking into a scalar
    assert!(matches!(
        key_is_missing(br#"{"a": "text"}"#, ".a.b").unwrap_err(),
        Error::Shape(_)
    ));
    assert!(matches!(
        key_is_missing(b"{", ".a").unwrap_err(),
        Error::Parse(_)
    ));
    assert!(matches!(
        key_is_missing(b"{}", "a..b").unwrap_err(),
        Error::PathSyntax(PathSyntaxError::EmptyKey { .. })
    ));
}
