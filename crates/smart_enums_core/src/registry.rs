//! Process-wide registry of kinds addressable by name.
//!
//! Collaborators that only know a kind by its name (a column type, a form
//! option) resolve it here. Registration runs the conformance probe once and
//! records the verdict, so later lookups never re-check the table.

use std::sync::LazyLock;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::error::{Error, KindDefect, Result};
use crate::kind::{EnumKind, KindHandle};

static KINDS: LazyLock<DashMap<&'static str, KindHandle>> = LazyLock::new(DashMap::new);

/// Registers `K` under its declared name.
///
/// Registering the same kind again is a no-op.
///
/// # Errors
///
/// Returns an invalid enum kind error if `K` fails the conformance probe or
/// if a different kind is already registered under the same name.
pub fn register<K: EnumKind>() -> Result<KindHandle> {
    register_handle(KindHandle::of::<K>())
}

/// Registers an already-built kind handle.
///
/// # Errors
///
/// See [`register`].
pub fn register_handle(kind: KindHandle) -> Result<KindHandle> {
    kind.descriptor()
        .check()
        .map_err(|reason| Error::invalid_enum_kind(kind.name(), reason))?;

    match KINDS.entry(kind.name()) {
        Entry::Occupied(existing) if existing.get().id() == kind.id() => Ok(kind),
        Entry::Occupied(_) => {
            debug!(kind = kind.name(), "kind name already taken");
            Err(Error::invalid_enum_kind(kind.name(), KindDefect::NameConflict))
        }
        Entry::Vacant(slot) => {
            debug!(kind = kind.name(), values = kind.descriptor().len(), "registered kind");
            slot.insert(kind);
            Ok(kind)
        }
    }
}

/// Resolves a registered kind by name.
///
/// # Errors
///
/// Returns an invalid enum kind error if no kind is registered under `name`.
pub fn resolve(name: &str) -> Result<KindHandle> {
    KINDS
        .get(name)
        .map(|entry| *entry.value())
        .ok_or_else(|| Error::invalid_enum_kind(name, KindDefect::Unregistered))
}

/// Returns true if a kind is registered under `name`.
#[must_use]
pub fn is_registered(name: &str) -> bool {
    KINDS.contains_key(name)
}

/// Returns the names of all registered kinds, sorted.
#[must_use]
pub fn registered_names() -> Vec<&'static str> {
    let mut names: Vec<_> = KINDS.iter().map(|entry| *entry.key()).collect();
    names.sort_unstable();
    names
}
