//! Error types for the adapters.
//!
//! Core errors never cross an adapter boundary; each adapter maps them onto
//! its own failure type.

use thiserror::Error;

/// A column value could not be converted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value has the right shape but does not convert.
    #[error("could not convert database value \"{value}\" to type {column}")]
    Failed {
        /// The offending value, rendered as text.
        value: String,
        /// Name of the column type.
        column: String,
    },

    /// The value has the wrong type.
    #[error(
        "could not convert value of type {actual} to type {column}; expected one of: {expected}",
        expected = .expected.join(", ")
    )]
    InvalidType {
        /// Type of the offending value.
        actual: String,
        /// Name of the target type.
        column: String,
        /// Accepted types.
        expected: Vec<String>,
    },

    /// An encoded list could not be decoded.
    #[error("could not decode value for type {column}: {message}")]
    Unserialization {
        /// Name of the column type.
        column: String,
        /// Decoder message.
        message: String,
    },

    /// A list could not be encoded.
    #[error("could not encode value for type {column}: {message}")]
    Serialization {
        /// Name of the column type.
        column: String,
        /// Encoder message.
        message: String,
    },
}

impl ConversionError {
    /// Creates a conversion failure.
    #[must_use]
    pub fn failed(value: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Failed {
            value: value.into(),
            column: column.into(),
        }
    }

    /// Creates an invalid type failure.
    #[must_use]
    pub fn invalid_type(
        actual: impl Into<String>,
        column: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidType {
            actual: actual.into(),
            column: column.into(),
            expected: expected.iter().map(ToString::to_string).collect(),
        }
    }

    /// Creates a decoding failure.
    #[must_use]
    pub fn unserialization(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unserialization {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// A form value could not be transformed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("transformation failed: {reason}")]
pub struct TransformationFailed {
    /// What went wrong.
    pub reason: String,
}

impl TransformationFailed {
    /// Creates a transformation failure.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A form field was configured incorrectly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required option was given an unacceptable value.
    #[error("the option \"{option}\" with value \"{value}\" is invalid")]
    InvalidOption {
        /// Option name.
        option: &'static str,
        /// The rejected value.
        value: String,
    },
}
