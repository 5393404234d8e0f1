//! Column type storing a single enum value as its raw string.

use smart_enums_core::{EnumFactory, EnumValue};
use tracing::debug;

use crate::column::{ColumnSpec, ColumnValue, Platform};
use crate::config::ColumnConfig;
use crate::error::ConversionError;

/// A varchar column holding one enum value, or `NULL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumColumnType {
    name: String,
    kind: String,
    config: ColumnConfig,
}

impl EnumColumnType {
    /// Creates a column type named `name` for the kind registered as `kind`.
    ///
    /// The kind is resolved on every conversion, so it may be registered
    /// after the column type is created.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            config: ColumnConfig::default(),
        }
    }

    /// Builder method to replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ColumnConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the column type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the kind stored in this column.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Renders the column declaration, applying the default length.
    #[must_use]
    pub fn sql_declaration(&self, column: &ColumnSpec, platform: &dyn Platform) -> String {
        let column = ColumnSpec {
            length: Some(column.length.unwrap_or(self.config.default_length)),
        };
        platform.varchar_type_declaration(&column)
    }

    /// Returns whether the schema tool should emit a type comment hint.
    #[must_use]
    pub fn requires_sql_comment_hint(&self) -> bool {
        self.config.comment_hint
    }

    /// Converts a stored value into an enum instance.
    ///
    /// `NULL` converts to `None`.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the value is not text, if the kind is
    /// not registered, or if the text is not a declared value.
    pub fn convert_to_enum(
        &self,
        value: &ColumnValue,
    ) -> Result<Option<EnumValue>, ConversionError> {
        let raw = match value {
            ColumnValue::Null => return Ok(None),
            ColumnValue::Text(raw) => raw,
            other => {
                return Err(ConversionError::invalid_type(
                    other.type_name(),
                    &self.name,
                    &["text"],
                ));
            }
        };

        EnumFactory::for_kind(&self.kind)
            .and_then(|factory| factory.from_value(raw))
            .map(Some)
            .map_err(|err| {
                debug!(column = %self.name, error = %err, "column value rejected");
                ConversionError::failed(raw.as_str(), &self.name)
            })
    }

    /// Converts an enum instance into its stored value.
    ///
    /// `None` converts to `NULL`.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the column's kind is not registered or
    /// if the instance belongs to another kind, including one that shares the
    /// registered kind's name.
    pub fn convert_to_column(
        &self,
        value: Option<EnumValue>,
    ) -> Result<ColumnValue, ConversionError> {
        let Some(value) = value else {
            return Ok(ColumnValue::Null);
        };

        match EnumFactory::for_kind(&self.kind) {
            Ok(factory) if factory.owns(value) => Ok(ColumnValue::Text(value.value().to_string())),
            _ => Err(ConversionError::invalid_type(
                value.kind_name(),
                &self.name,
                &["null", self.kind.as_str()],
            )),
        }
    }
}
