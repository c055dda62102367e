//! Error types for name splitting and citation formatting.

use std::error::Error;
use std::fmt;

/// Syntax errors detected while splitting a name in strict mode.
///
/// In lenient mode each of these has a documented recovery and is never
/// returned; see [`split_name`](crate::name::split_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameErrorKind {
    /// A closing brace with no corresponding open brace.
    UnmatchedBrace,
    /// Input ended with braces still open.
    UnterminatedBrace,
    /// Input ended with an empty section following a comma.
    TrailingComma,
    /// A fourth top-level section was started.
    TooManyCommas,
}

impl fmt::Display for NameErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameErrorKind::UnmatchedBrace => f.write_str("unmatched closing brace"),
            NameErrorKind::UnterminatedBrace => f.write_str("unterminated opening brace"),
            NameErrorKind::TrailingComma => f.write_str("trailing comma at end of name"),
            NameErrorKind::TooManyCommas => f.write_str("too many commas"),
        }
    }
}

impl Error for NameErrorKind {}

/// An error which occurred while splitting a name, together with the
/// offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameError {
    /// The name string which failed to split.
    pub input: String,
    /// The syntax error which occurred.
    pub kind: NameErrorKind,
}

impl NameError {
    pub(crate) fn new(input: &str, kind: NameErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in name '{}'", self.kind, self.input)
    }
}

impl Error for NameError {}

impl From<NameError> for NameErrorKind {
    fn from(err: NameError) -> Self {
        err.kind
    }
}

/// Errors raised while formatting a citation string from an entry.
///
/// An unrecognized entry type is deliberately not an error; see
/// [`FormatWarning`](crate::citation::FormatWarning).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A field required by the entry type's template is absent.
    MissingField {
        /// The entry type being formatted.
        entry_type: String,
        /// The absent field.
        field: &'static str,
    },
    /// The entry matches none of the documented sub-cases for its type.
    Unrepresentable {
        /// The entry type being formatted.
        entry_type: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingField { entry_type, field } => {
                write!(
                    f,
                    "entry of type '{entry_type}' is missing required field '{field}'"
                )
            }
            FormatError::Unrepresentable { entry_type } => {
                write!(
                    f,
                    "entry of type '{entry_type}' matches no known reference format"
                )
            }
        }
    }
}

impl Error for FormatError {}
