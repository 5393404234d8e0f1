//! Column type storing an ordered list of enum values.
//!
//! The raw values are encoded as a single column value: a JSON array in a
//! text column, or a `MessagePack` array in a binary column, depending on
//! [`ListEncoding`].

use smart_enums_core::{EnumFactory, EnumValue};
use tracing::debug;

use crate::column::{ColumnSpec, ColumnValue, Platform};
use crate::config::{ListColumnConfig, ListEncoding};
use crate::error::ConversionError;

/// A large-object column holding an encoded list of enum values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumListColumnType {
    name: String,
    kind: String,
    config: ListColumnConfig,
}

impl EnumListColumnType {
    /// Creates a list column type named `name` for the kind registered as
    /// `kind`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            config: ListColumnConfig::default(),
        }
    }

    /// Builder method to replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ListColumnConfig) -> Self {
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

    /// Renders the column declaration.
    #[must_use]
    pub fn sql_declaration(&self, column: &ColumnSpec, platform: &dyn Platform) -> String {
        platform.clob_type_declaration(column)
    }

    /// Returns whether the schema tool should emit a type comment hint.
    #[must_use]
    pub fn requires_sql_comment_hint(&self) -> bool {
        self.config.comment_hint
    }

    /// Converts a stored value into enum instances, preserving order.
    ///
    /// `NULL` and empty values convert to an empty list.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the value has the wrong type for the
    /// configured encoding, cannot be decoded into a list of strings, names
    /// an unregistered kind, or contains an undeclared value.
    pub fn convert_to_enums(
        &self,
        value: &ColumnValue,
    ) -> Result<Vec<EnumValue>, ConversionError> {
        let raws = match (value, self.config.encoding) {
            (ColumnValue::Null, _) => return Ok(Vec::new()),
            (ColumnValue::Text(text), _) if text.is_empty() => return Ok(Vec::new()),
            (ColumnValue::Bytes(bytes), _) if bytes.is_empty() => return Ok(Vec::new()),
            (ColumnValue::Text(text), ListEncoding::Json) => {
                serde_json::from_str::<Vec<String>>(text).map_err(|err| self.undecodable(&err))?
            }
            (ColumnValue::Bytes(bytes), ListEncoding::MessagePack) => {
                rmp_serde::from_slice::<Vec<String>>(bytes)
                    .map_err(|err| self.undecodable(&err))?
            }
            (other, encoding) => {
                return Err(ConversionError::invalid_type(
                    other.type_name(),
                    &self.name,
                    &[Self::stored_type(encoding)],
                ));
            }
        };

        EnumFactory::for_kind(&self.kind)
            .and_then(|factory| factory.from_values(&raws))
            .map_err(|err| {
                debug!(column = %self.name, error = %err, "list column value rejected");
                ConversionError::invalid_type(value.to_string(), &self.name, &["string"])
            })
    }

    /// Encodes enum instances into a stored value.
    ///
    /// `None` encodes as an empty list.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the list is not empty and the column's
    /// kind is not registered, or if any instance belongs to another kind,
    /// including one that shares the registered kind's name.
    pub fn convert_to_column(
        &self,
        values: Option<&[EnumValue]>,
    ) -> Result<ColumnValue, ConversionError> {
        let values = values.unwrap_or_default();

        if let Some(first) = values.first() {
            let factory = EnumFactory::for_kind(&self.kind).map_err(|err| {
                debug!(column = %self.name, error = %err, "list column kind not resolved");
                self.foreign(*first)
            })?;
            if let Some(foreign) = values.iter().find(|v| !factory.owns(**v)) {
                return Err(self.foreign(*foreign));
            }
        }

        let raws: Vec<&str> = values.iter().map(|v| v.value()).collect();
        match self.config.encoding {
            ListEncoding::Json => serde_json::to_string(&raws)
                .map(ColumnValue::Text)
                .map_err(|err| self.unencodable(&err)),
            ListEncoding::MessagePack => rmp_serde::to_vec(&raws)
                .map(ColumnValue::Bytes)
                .map_err(|err| self.unencodable(&err)),
        }
    }

    fn foreign(&self, value: EnumValue) -> ConversionError {
        ConversionError::invalid_type(
            value.kind_name(),
            &self.name,
            &["null", self.kind.as_str()],
        )
    }

    fn stored_type(encoding: ListEncoding) -> &'static str {
        match encoding {
            ListEncoding::Json => "text",
            ListEncoding::MessagePack => "bytes",
        }
    }

    fn undecodable(&self, err: &dyn std::error::Error) -> ConversionError {
        ConversionError::unserialization(&self.name, err.to_string())
    }

    fn unencodable(&self, err: &dyn std::error::Error) -> ConversionError {
        ConversionError::Serialization {
            column: self.name.clone(),
            message: err.to_string(),
        }
    }
}
