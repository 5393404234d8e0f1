//! Error types for smart enum operations.
//!
//! Uses `thiserror` for ergonomic error definition. There are exactly two
//! kinds of failure: a raw value that is not declared by its kind, and a
//! kind that cannot be bound at runtime.

use std::fmt;

use thiserror::Error;

/// Result type for smart enum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for smart enum operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue {
            value: value.into(),
            kind: kind.into(),
        })
    }

    /// Creates an invalid enum kind error.
    #[must_use]
    pub fn invalid_enum_kind(kind: impl Into<String>, reason: KindDefect) -> Self {
        Self::new(ErrorKind::InvalidEnumKind {
            kind: kind.into(),
            reason,
        })
    }

    /// Returns true if this error reports an undeclared value.
    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidValue { .. })
    }

    /// Returns true if this error reports an unusable enum kind.
    #[must_use]
    pub fn is_invalid_enum_kind(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidEnumKind { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The raw value is not one of the values declared by the kind.
    #[error("the value \"{value}\" is not valid for enum kind \"{kind}\"")]
    InvalidValue {
        /// The offending raw value.
        value: String,
        /// Name of the kind the value was checked against.
        kind: String,
    },

    /// The identifier does not resolve to a usable enum kind.
    #[error("\"{kind}\" is not a valid enum kind: {reason}")]
    InvalidEnumKind {
        /// The kind name (or identifier) that was rejected.
        kind: String,
        /// Why the kind was rejected.
        reason: KindDefect,
    },
}

/// Reasons a kind fails the conformance probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KindDefect {
    /// No kind is registered under the requested name.
    Unregistered,
    /// The kind declares an empty name.
    EmptyName,
    /// The kind declares the same raw value more than once.
    DuplicateValue(String),
    /// A different kind is already registered under the same name.
    NameConflict,
}

impl fmt::Display for KindDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered => write!(f, "no such kind is registered"),
            Self::EmptyName => write!(f, "kind name is empty"),
            Self::DuplicateValue(value) => write!(f, "value \"{value}\" is declared twice"),
            Self::NameConflict => write!(f, "name is taken by another kind"),
        }
    }
}
