//! Configuration for the column adapters.
//!
//! Both configs deserialize from partial documents; missing fields take
//! their defaults.

use serde::{Deserialize, Serialize};

/// How a list column encodes its raw values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListEncoding {
    /// A JSON array of strings stored as text.
    #[default]
    Json,
    /// A `MessagePack` array of strings stored as bytes.
    MessagePack,
}

/// Configuration for [`EnumColumnType`](crate::EnumColumnType).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Varchar length used when the column does not specify one.
    pub default_length: u32,

    /// Whether the column asks the schema tool for a type comment hint.
    pub comment_hint: bool,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            default_length: 50,
            comment_hint: true,
        }
    }
}

impl ColumnConfig {
    /// Builder method to set the default varchar length.
    #[must_use]
    pub fn with_default_length(mut self, length: u32) -> Self {
        self.default_length = length;
        self
    }

    /// Builder method to enable/disable the comment hint.
    #[must_use]
    pub fn with_comment_hint(mut self, hint: bool) -> Self {
        self.comment_hint = hint;
        self
    }
}

/// Configuration for [`EnumListColumnType`](crate::EnumListColumnType).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListColumnConfig {
    /// Encoding of the stored list.
    pub encoding: ListEncoding,

    /// Whether the column asks the schema tool for a type comment hint.
    pub comment_hint: bool,
}

impl Default for ListColumnConfig {
    fn default() -> Self {
        Self {
            encoding: ListEncoding::Json,
            comment_hint: true,
        }
    }
}

impl ListColumnConfig {
    /// Creates a configuration storing lists as `MessagePack` bytes.
    #[must_use]
    pub fn binary() -> Self {
        Self {
            encoding: ListEncoding::MessagePack,
            ..Self::default()
        }
    }

    /// Builder method to set the encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: ListEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Builder method to enable/disable the comment hint.
    #[must_use]
    pub fn with_comment_hint(mut self, hint: bool) -> Self {
        self.comment_hint = hint;
        self
    }
}
