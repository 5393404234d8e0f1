//! Runtime-bound access to one kind.
//!
//! [`EnumFactory`] lets callers that hold a kind only as a runtime handle or
//! a name validate, construct, and enumerate instances. It never bypasses
//! the instance cache, so everything it returns is identity-equal to what
//! the typed entry points return.

use tracing::debug;

use crate::engine;
use crate::error::{Error, Result};
use crate::instance::EnumValue;
use crate::kind::{EnumKind, KindHandle};
use crate::registry;

/// A handle bound to one enum kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EnumFactory {
    kind: KindHandle,
}

impl EnumFactory {
    /// Binds a factory to `K`.
    ///
    /// # Errors
    ///
    /// Returns an invalid enum kind error if `K` fails the conformance probe.
    pub fn of<K: EnumKind>() -> Result<Self> {
        Self::bind(KindHandle::of::<K>())
    }

    /// Binds a factory to the kind registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an invalid enum kind error if no kind is registered under
    /// `name`.
    pub fn for_kind(name: &str) -> Result<Self> {
        let kind = registry::resolve(name)?;
        debug!(kind = kind.name(), "bound factory by name");
        Ok(Self { kind })
    }

    /// Binds a factory to an arbitrary kind handle.
    ///
    /// # Errors
    ///
    /// Returns an invalid enum kind error if the kind fails the conformance
    /// probe.
    pub fn bind(kind: KindHandle) -> Result<Self> {
        kind.descriptor()
            .check()
            .map_err(|reason| Error::invalid_enum_kind(kind.name(), reason))?;
        Ok(Self { kind })
    }

    /// Returns the bound kind.
    #[must_use]
    pub fn kind(&self) -> KindHandle {
        self.kind
    }

    /// Returns the name of the bound kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns true if `value` belongs to the bound kind.
    #[must_use]
    pub fn owns(&self, value: EnumValue) -> bool {
        value.kind().id() == self.kind.id()
    }

    /// Returns the canonical instance for `raw`.
    ///
    /// # Errors
    ///
    /// Returns an invalid value error if `raw` is not declared by the kind.
    pub fn from_value(&self, raw: &str) -> Result<EnumValue> {
        engine::resolve(self.kind, raw).map(EnumValue::new)
    }

    /// Returns the canonical instances for `raws`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an invalid value error for the first undeclared element.
    pub fn from_values<I, S>(&self, raws: I) -> Result<Vec<EnumValue>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(engine::resolve_all(self.kind, raws)?
            .into_iter()
            .map(EnumValue::new)
            .collect())
    }

    /// Returns every declared instance, in declaration order.
    #[must_use]
    pub fn all(&self) -> Vec<EnumValue> {
        engine::enumerate(self.kind)
            .into_iter()
            .map(EnumValue::new)
            .collect()
    }
}
