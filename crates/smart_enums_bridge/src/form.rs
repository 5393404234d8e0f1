//! Form adapters.
//!
//! Submitted form data arrives as JSON: a string for a single choice, an
//! array of strings for a multiple choice, or `null` when nothing was
//! chosen. [`EnumTransformer`] converts between that view data and enum
//! instances; [`EnumChoiceField`] wires a transformer to the choices of a
//! registered kind.

use indexmap::IndexMap;
use serde_json::Value;
use smart_enums_core::{EnumFactory, EnumFormatter, EnumValue};
use tracing::debug;

use crate::error::{FormError, TransformationFailed};

/// Model data held by an enum form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormModel {
    /// A single chosen instance.
    Single(EnumValue),
    /// Several chosen instances, in submission order.
    List(Vec<EnumValue>),
}

impl From<EnumValue> for FormModel {
    fn from(value: EnumValue) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<EnumValue>> for FormModel {
    fn from(values: Vec<EnumValue>) -> Self {
        Self::List(values)
    }
}

/// Converts between enum instances and raw form values for one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumTransformer {
    kind: String,
}

impl EnumTransformer {
    /// Creates a transformer for the kind registered as `kind`.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Returns the kind name.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Projects model data to view data.
    ///
    /// # Errors
    ///
    /// Fails if the kind is not registered or if an instance belongs to
    /// another kind, including one that shares the registered kind's name.
    pub fn transform(&self, model: Option<&FormModel>) -> Result<Value, TransformationFailed> {
        let Some(model) = model else {
            return Ok(Value::Null);
        };

        let factory = self.factory()?;
        match model {
            FormModel::Single(value) => self.project(&factory, *value),
            FormModel::List(values) => values
                .iter()
                .map(|value| self.project(&factory, *value))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }

    /// Converts view data back to model data.
    ///
    /// # Errors
    ///
    /// Fails if the input is neither `null`, a string, nor an array of
    /// strings, if the kind is not registered, or if a value is undeclared.
    pub fn reverse_transform(
        &self,
        input: &Value,
    ) -> Result<Option<FormModel>, TransformationFailed> {
        match input {
            Value::Null => Ok(None),
            Value::String(raw) => {
                let factory = self.factory()?;
                factory
                    .from_value(raw)
                    .map(|value| Some(FormModel::Single(value)))
                    .map_err(|err| self.rejected(&err))
            }
            Value::Array(items) => {
                let raws = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| {
                            TransformationFailed::new("expected an array of strings")
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let factory = self.factory()?;
                factory
                    .from_values(raws)
                    .map(|values| Some(FormModel::List(values)))
                    .map_err(|err| self.rejected(&err))
            }
            _ => Err(TransformationFailed::new(
                "expected null, a string, or an array of strings",
            )),
        }
    }

    fn project(
        &self,
        factory: &EnumFactory,
        value: EnumValue,
    ) -> Result<Value, TransformationFailed> {
        if factory.owns(value) {
            Ok(Value::String(value.value().to_string()))
        } else {
            Err(TransformationFailed::new(format!(
                "expected a {} instance, got {}",
                self.kind,
                value.kind_name()
            )))
        }
    }

    fn factory(&self) -> Result<EnumFactory, TransformationFailed> {
        EnumFactory::for_kind(&self.kind).map_err(|err| self.rejected(&err))
    }

    fn rejected(&self, err: &smart_enums_core::Error) -> TransformationFailed {
        debug!(kind = %self.kind, error = %err, "form value rejected");
        TransformationFailed::new(format!("invalid {} value", self.kind))
    }
}

/// A choice field offering every value of one kind.
#[derive(Clone, Debug)]
pub struct EnumChoiceField {
    transformer: EnumTransformer,
    choices: IndexMap<&'static str, &'static str>,
    multiple: bool,
}

impl EnumChoiceField {
    /// Option name under which the kind is configured.
    pub const KIND_OPTION: &'static str = "enum_kind";

    /// Creates a single-choice field for the kind registered as `kind`.
    ///
    /// # Errors
    ///
    /// Fails if no kind is registered under `kind`.
    pub fn new(kind: &str) -> Result<Self, FormError> {
        let choices = EnumFormatter::for_kind(kind)
            .map_err(|_| FormError::InvalidOption {
                option: Self::KIND_OPTION,
                value: kind.to_string(),
            })?
            .to_value_key_list();

        Ok(Self {
            transformer: EnumTransformer::new(kind),
            choices,
            multiple: false,
        })
    }

    /// Builder method to allow several choices.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Returns true if several choices are allowed.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Returns the choices, mapping each label (description) to its value.
    #[must_use]
    pub fn choices(&self) -> &IndexMap<&'static str, &'static str> {
        &self.choices
    }

    /// Returns the field's transformer.
    #[must_use]
    pub fn transformer(&self) -> &EnumTransformer {
        &self.transformer
    }

    /// Renders model data as view data.
    ///
    /// # Errors
    ///
    /// See [`EnumTransformer::transform`].
    pub fn view(&self, model: Option<&FormModel>) -> Result<Value, TransformationFailed> {
        self.transformer.transform(model)
    }

    /// Converts submitted view data into model data.
    ///
    /// # Errors
    ///
    /// Fails if the submission shape does not match the field (an array for
    /// a multiple field, a string otherwise) or if the transformer rejects it.
    pub fn submit(&self, input: &Value) -> Result<Option<FormModel>, TransformationFailed> {
        match (input, self.multiple) {
            (Value::Null, _) | (Value::Array(_), true) | (Value::String(_), false) => {
                self.transformer.reverse_transform(input)
            }
            (_, true) => Err(TransformationFailed::new("expected an array of choices")),
            (_, false) => Err(TransformationFailed::new("expected a single choice")),
        }
    }
}
