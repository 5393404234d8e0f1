//! Presentation tables for one kind.

use indexmap::IndexMap;
use tracing::warn;

use crate::error::Result;
use crate::factory::EnumFactory;
use crate::kind::EnumKind;

/// Builds value/description lookup tables from a bound factory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EnumFormatter {
    factory: EnumFactory,
}

impl EnumFormatter {
    /// Creates a formatter over `factory`.
    #[must_use]
    pub fn new(factory: EnumFactory) -> Self {
        Self { factory }
    }

    /// Creates a formatter for `K`.
    ///
    /// # Errors
    ///
    /// Returns an invalid enum kind error if `K` fails the conformance probe.
    pub fn of<K: EnumKind>() -> Result<Self> {
        EnumFactory::of::<K>().map(Self::new)
    }

    /// Creates a formatter for the kind registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an invalid enum kind error if no kind is registered under
    /// `name`.
    pub fn for_kind(name: &str) -> Result<Self> {
        EnumFactory::for_kind(name).map(Self::new)
    }

    /// Returns the underlying factory.
    #[must_use]
    pub fn factory(&self) -> &EnumFactory {
        &self.factory
    }

    /// Maps each value to its description, in declaration order.
    #[must_use]
    pub fn to_key_value_list(&self) -> IndexMap<&'static str, &'static str> {
        self.factory
            .all()
            .into_iter()
            .map(|e| (e.value(), e.description()))
            .collect()
    }

    /// Maps each description to its value.
    ///
    /// When two values share a description, the later value wins and keeps
    /// the position of the first one.
    #[must_use]
    pub fn to_value_key_list(&self) -> IndexMap<&'static str, &'static str> {
        let mut inverse = IndexMap::new();
        for (value, description) in self.to_key_value_list() {
            if let Some(dropped) = inverse.insert(description, value) {
                warn!(
                    kind = self.factory.kind_name(),
                    description, dropped, kept = value, "description shared by two values"
                );
            }
        }
        inverse
    }
}
