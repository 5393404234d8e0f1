//! Database-facing column values and platform declarations.

use std::fmt;

/// A raw value as read from or written to a database column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnValue {
    /// SQL `NULL`.
    Null,
    /// Character data.
    Text(String),
    /// Integer data.
    Integer(i64),
    /// Binary data.
    Bytes(Vec<u8>),
}

impl ColumnValue {
    /// Returns the name of this value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Returns true if this is `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text content, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<&str> for ColumnValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ColumnValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Vec<u8>> for ColumnValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl<T: Into<ColumnValue>> From<Option<T>> for ColumnValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Column options passed to a platform when declaring a column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Maximum length for character columns.
    pub length: Option<u32>,
}

impl ColumnSpec {
    /// Creates a column spec with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the length.
    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
}

/// SQL dialect used to render column declarations.
pub trait Platform {
    /// Renders a variable-length character column declaration.
    fn varchar_type_declaration(&self, column: &ColumnSpec) -> String;

    /// Renders a character large object column declaration.
    fn clob_type_declaration(&self, column: &ColumnSpec) -> String;
}

/// Plain ANSI SQL declarations.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiPlatform;

impl AnsiPlatform {
    /// Length used when a varchar column specifies none.
    pub const DEFAULT_VARCHAR_LENGTH: u32 = 255;
}

impl Platform for AnsiPlatform {
    fn varchar_type_declaration(&self, column: &ColumnSpec) -> String {
        format!(
            "VARCHAR({})",
            column.length.unwrap_or(Self::DEFAULT_VARCHAR_LENGTH)
        )
    }

    fn clob_type_declaration(&self, _column: &ColumnSpec) -> String {
        "CLOB".to_string()
    }
}
