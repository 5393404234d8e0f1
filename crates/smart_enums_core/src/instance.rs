//! Canonical enum instances.
//!
//! [`Enum<K>`] is the typed handle used when the kind is known at compile
//! time; [`EnumValue`] is the type-erased handle used by runtime-bound
//! collaborators. Both are `Copy` references to the single cached instance
//! of their `(kind, value)` pair, so equality and hashing go by address.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::engine::{self, Instance};
use crate::error::Result;
use crate::kind::{EnumKind, KindHandle, KindId, Position};

/// A type-erased canonical enum instance.
#[derive(Copy, Clone)]
pub struct EnumValue(&'static Instance);

impl EnumValue {
    pub(crate) fn new(instance: &'static Instance) -> Self {
        Self(instance)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.0.value()
    }

    /// Returns the description declared for this value.
    #[must_use]
    pub fn description(self) -> &'static str {
        self.0.description()
    }

    /// Returns the kind this instance belongs to.
    #[must_use]
    pub fn kind(self) -> KindHandle {
        self.0.kind()
    }

    /// Returns the name of the kind this instance belongs to.
    #[must_use]
    pub fn kind_name(self) -> &'static str {
        self.0.kind().name()
    }

    /// Returns true if this instance belongs to `K`.
    #[must_use]
    pub fn is<K: EnumKind>(self) -> bool {
        self.0.kind().id() == KindId::of::<K>()
    }

    /// Recovers the typed handle if this instance belongs to `K`.
    #[must_use]
    pub fn downcast<K: EnumKind>(self) -> Option<Enum<K>> {
        self.is::<K>().then(|| Enum::wrap(self))
    }

    /// Returns true if both handles point at the same canonical instance.
    #[must_use]
    pub fn ptr_eq(self, other: Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(*other)
    }
}

impl Eq for EnumValue {}

impl Hash for EnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state);
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind_name(), self.value())
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl AsRef<str> for EnumValue {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// A canonical instance of the kind `K`.
///
/// Obtained only through validated entry points: [`Enum::from_value`],
/// [`Enum::from_values`], [`Enum::all`], or the named constructors
/// generated by [`smart_enum!`](crate::smart_enum).
pub struct Enum<K: EnumKind> {
    inner: EnumValue,
    _kind: PhantomData<fn() -> K>,
}

impl<K: EnumKind> Enum<K> {
    fn wrap(inner: EnumValue) -> Self {
        Self {
            inner,
            _kind: PhantomData,
        }
    }

    fn kind_handle() -> KindHandle {
        KindHandle::of::<K>()
    }

    /// Returns the canonical instance for `raw`.
    ///
    /// # Errors
    ///
    /// Returns an invalid value error if `raw` is not declared by `K`.
    pub fn from_value(raw: &str) -> Result<Self> {
        engine::resolve(Self::kind_handle(), raw)
            .map(|instance| Self::wrap(EnumValue::new(instance)))
    }

    /// Returns the canonical instances for `raws`, preserving order and length.
    ///
    /// # Errors
    ///
    /// Returns an invalid value error for the first undeclared element; no
    /// partial list is returned.
    pub fn from_values<I, S>(raws: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(engine::resolve_all(Self::kind_handle(), raws)?
            .into_iter()
            .map(|instance| Self::wrap(EnumValue::new(instance)))
            .collect())
    }

    /// Returns every declared instance, in declaration order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        engine::enumerate(Self::kind_handle())
            .into_iter()
            .map(|instance| Self::wrap(EnumValue::new(instance)))
            .collect()
    }

    /// Returns the canonical instance at a declared position.
    ///
    /// This is what the named constructors generated by
    /// [`smart_enum!`](crate::smart_enum) call.
    #[must_use]
    pub fn at(position: Position<K>) -> Self {
        Self::wrap(EnumValue::new(engine::canonical(Self::kind_handle(), position.index())))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.inner.value()
    }

    /// Returns the description declared for this value.
    #[must_use]
    pub fn description(self) -> &'static str {
        self.inner.description()
    }

    /// Returns the type-erased handle.
    #[must_use]
    pub fn erase(self) -> EnumValue {
        self.inner
    }

    /// Returns true if both handles point at the same canonical instance.
    #[must_use]
    pub fn ptr_eq(self, other: Self) -> bool {
        self.inner.ptr_eq(other.inner)
    }
}

impl<K: EnumKind> Clone for Enum<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: EnumKind> Copy for Enum<K> {}

impl<K: EnumKind> PartialEq for Enum<K> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: EnumKind> Eq for Enum<K> {}

impl<K: EnumKind> PartialEq<EnumValue> for Enum<K> {
    fn eq(&self, other: &EnumValue) -> bool {
        self.inner == *other
    }
}

impl<K: EnumKind> PartialEq<Enum<K>> for EnumValue {
    fn eq(&self, other: &Enum<K>) -> bool {
        *self == other.inner
    }
}

impl<K: EnumKind> Hash for Enum<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<K: EnumKind> fmt::Debug for Enum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<K: EnumKind> fmt::Display for Enum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<K: EnumKind> AsRef<str> for Enum<K> {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl<K: EnumKind> From<Enum<K>> for EnumValue {
    fn from(value: Enum<K>) -> Self {
        value.inner
    }
}

impl<K: EnumKind> TryFrom<&str> for Enum<K> {
    type Error = crate::Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::from_value(raw)
    }
}

impl<K: EnumKind> std::str::FromStr for Enum<K> {
    type Err = crate::Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::from_value(raw)
    }
}

#[cfg(feature = "serde")]
impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

#[cfg(feature = "serde")]
impl<K: EnumKind> Serialize for Enum<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, K: EnumKind> Deserialize<'de> for Enum<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_value(&raw).map_err(serde::de::Error::custom)
    }
}
