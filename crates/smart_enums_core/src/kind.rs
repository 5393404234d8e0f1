//! Enum kind definitions.
//!
//! A kind is a named, closed, ordered table of `(value, description)` pairs.
//! Kinds are declared statically by implementing [`EnumKind`] on a marker
//! type (usually through the [`smart_enum!`](crate::smart_enum) macro).

use std::any::TypeId;
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use crate::error::KindDefect;

/// A statically declared enum kind.
///
/// Implementors are zero-sized marker types. The table is immutable for the
/// lifetime of the process and is the single source of truth for which raw
/// values are legal and what they mean.
///
/// ```
/// use smart_enums_core::{Enum, EnumKind};
///
/// struct Status;
///
/// impl EnumKind for Status {
///     const NAME: &'static str = "Status";
///     const VALUES: &'static [(&'static str, &'static str)] =
///         &[("open", "Open"), ("closed", "Closed")];
/// }
///
/// let open = Enum::<Status>::from_value("open").unwrap();
/// assert_eq!(open.description(), "Open");
/// ```
pub trait EnumKind: Send + Sync + 'static {
    /// Human-readable kind name, used in error messages and the registry.
    const NAME: &'static str;

    /// Declared `(value, description)` pairs, in declaration order.
    const VALUES: &'static [(&'static str, &'static str)];
}

/// Identity of a kind, distinct even for kinds that share a name.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct KindId(TypeId);

impl KindId {
    /// Returns the identity of `K`.
    #[must_use]
    pub fn of<K: EnumKind>() -> Self {
        Self(TypeId::of::<K>())
    }
}

impl fmt::Debug for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KindId({:?})", self.0)
    }
}

/// The static table of one kind: its name and ordered entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindDescriptor {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl KindDescriptor {
    /// Creates a descriptor from a name and an entry table.
    #[must_use]
    pub const fn new(
        name: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { name, entries }
    }

    /// Returns the descriptor declared by `K`.
    #[must_use]
    pub const fn of<K: EnumKind>() -> Self {
        Self::new(K::NAME, K::VALUES)
    }

    /// Returns the kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns the declared entries in order.
    #[must_use]
    pub const fn entries(self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Returns the number of declared values.
    #[must_use]
    pub const fn len(self) -> usize {
        self.entries.len()
    }

    /// Returns true if the kind declares no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the declared raw values in order.
    pub fn values(self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|&(value, _)| value)
    }

    /// Finds the position of `raw` among the declared values.
    ///
    /// Comparison is exact string equality: no trimming, no case folding,
    /// and numeric-looking values such as `"1"` and `"01"` stay distinct.
    #[must_use]
    pub fn position(self, raw: &str) -> Option<usize> {
        self.entries.iter().position(|&(value, _)| value == raw)
    }

    /// Returns true if `raw` is a declared value.
    #[must_use]
    pub fn supports(self, raw: &str) -> bool {
        self.position(raw).is_some()
    }

    /// Looks up the description declared for `raw`.
    #[must_use]
    pub fn description_of(self, raw: &str) -> Option<&'static str> {
        self.position(raw).map(|index| self.entries[index].1)
    }

    /// Runs the conformance probe: a non-empty name and unique values.
    ///
    /// # Errors
    ///
    /// Returns the first [`KindDefect`] found.
    pub fn check(self) -> Result<(), KindDefect> {
        if self.name.is_empty() {
            return Err(KindDefect::EmptyName);
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        for value in self.values() {
            if !seen.insert(value) {
                return Err(KindDefect::DuplicateValue(value.to_string()));
            }
        }

        Ok(())
    }
}

/// A kind bound at runtime: its identity plus its table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindHandle {
    id: KindId,
    descriptor: KindDescriptor,
}

impl KindHandle {
    /// Returns the handle of `K`.
    #[must_use]
    pub fn of<K: EnumKind>() -> Self {
        Self {
            id: KindId::of::<K>(),
            descriptor: KindDescriptor::of::<K>(),
        }
    }

    /// Returns the kind identity.
    #[must_use]
    pub const fn id(self) -> KindId {
        self.id
    }

    /// Returns the kind table.
    #[must_use]
    pub const fn descriptor(self) -> KindDescriptor {
        self.descriptor
    }

    /// Returns the kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor.name
    }
}

/// The position of a declared value in the table of `K`.
///
/// A `Position<K>` can only be obtained through [`Position::of`], so its
/// index is always in range for `K`. [`smart_enum!`](crate::smart_enum)
/// builds one per named constructor during constant evaluation, which turns
/// an undeclared constructor value into a compile error.
pub struct Position<K: EnumKind> {
    index: usize,
    _kind: PhantomData<fn() -> K>,
}

impl<K: EnumKind> Position<K> {
    /// Finds `value` among the values declared by `K`.
    ///
    /// Usable in constant evaluation. Comparison is exact, as in
    /// [`KindDescriptor::position`].
    #[must_use]
    pub const fn of(value: &str) -> Option<Self> {
        let entries = K::VALUES;
        let mut i = 0;
        while i < entries.len() {
            if const_str_eq(entries[i].0, value) {
                return Some(Self {
                    index: i,
                    _kind: PhantomData,
                });
            }
            i += 1;
        }
        None
    }

    /// Returns the index into the table of `K`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl<K: EnumKind> Clone for Position<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: EnumKind> Copy for Position<K> {}

impl<K: EnumKind> PartialEq for Position<K> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<K: EnumKind> Eq for Position<K> {}

impl<K: EnumKind> fmt::Debug for Position<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", K::NAME, self.index)
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
