//! Run one assertion against a JSON document

use super::CliError;
use crate::matcher;

/// Which assertion to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    Null,
    Match { pattern: String },
    Len { length: usize },
    Read,
    ReadArray,
    Missing,
}

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub assertion: Assertion,
    /// Path expression, `.` or empty for the whole document
    pub path: String,
    /// JSON document
    pub input: Option<String>,
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutput {
    /// The assertion holds
    Passed,
    /// Text of the scalar read
    Scalar(String),
    /// Texts of the array elements read
    Strings(Vec<String>),
}

/// Execute a check against the input document
pub fn execute_check(options: &CheckOptions) -> Result<CheckOutput, CliError> {
    let json = options.input.as_deref().ok_or(CliError::NoInput)?.as_bytes();
    let path = options.path.as_str();

    let output = match &options.assertion {
        Assertion::Null => matcher::match_null(json, path).map(|_| CheckOutput::Passed),
        Assertion::Match { pattern } => {
            matcher::match_pattern(json, path, pattern).map(|_| CheckOutput::Passed)
        }
        Assertion::Len { length } => {
            matcher::array_len(json, path, *length).map(|_| CheckOutput::Passed)
        }
        Assertion::Read => matcher::read(json, path).map(CheckOutput::Scalar),
        Assertion::ReadArray => matcher::read_string_array(json, path).map(CheckOutput::Strings),
        Assertion::Missing => matcher::key_is_missing(json, path).map(|_| CheckOutput::Passed),
    }?;

    Ok(output)
}

impl CheckOutput {
    /// Text printed on stdout; string arrays are printed as a JSON array
    pub fn render(&self, pretty: bool) -> Result<String, CliError> {
        match self {
            CheckOutput::Passed => Ok("OK".to_string()),
            CheckOutput::Scalar(text) => Ok(text.clone()),
            CheckOutput::Strings(items) => {
                let json = if pretty {
                    serde_json::to_string_pretty(items)
                } else {
                    serde_json::to_string(items)
                }?;
                Ok(json)
            }
        }
    }
}
