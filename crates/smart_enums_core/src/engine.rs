//! The canonical instance cache.
//!
//! Every legal `(kind, value)` pair maps to exactly one [`Instance`] for the
//! lifetime of the process. Instances are created lazily on first successful
//! validation and are never mutated or removed, so references handed out are
//! `'static` and can be compared by address.
//!
//! The cache is a process-wide [`DashMap`] keyed by kind identity and raw
//! value. Get-or-create goes through the shard-locked entry API, so two
//! threads racing on the same key observe the same instance.

use std::sync::LazyLock;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::kind::{KindHandle, KindId};

/// One canonical enum instance.
///
/// Holds the kind and the position of its value in the kind's table; both
/// the raw value and the description are read from the table on demand.
#[derive(Debug)]
pub(crate) struct Instance {
    kind: KindHandle,
    index: usize,
}

impl Instance {
    pub(crate) fn kind(&self) -> KindHandle {
        self.kind
    }

    pub(crate) fn value(&self) -> &'static str {
        self.kind.descriptor().entries()[self.index].0
    }

    pub(crate) fn description(&self) -> &'static str {
        self.kind.descriptor().entries()[self.index].1
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct CacheKey {
    kind: KindId,
    value: &'static str,
}

static INSTANCES: LazyLock<DashMap<CacheKey, &'static Instance>> = LazyLock::new(DashMap::new);

/// Returns the canonical instance for the value at `index`, creating it on
/// first access.
///
/// `index` must come from the kind's own table: a [`Position`](crate::Position),
/// a successful [`KindDescriptor::position`](crate::KindDescriptor::position),
/// or a range over its length.
pub(crate) fn canonical(kind: KindHandle, index: usize) -> &'static Instance {
    let value = kind.descriptor().entries()[index].0;
    let key = CacheKey {
        kind: kind.id(),
        value,
    };

    if let Some(found) = INSTANCES.get(&key) {
        return *found.value();
    }

    *INSTANCES.entry(key).or_insert_with(|| {
        trace!(kind = kind.name(), value, "creating canonical instance");
        Box::leak(Box::new(Instance { kind, index }))
    })
}

/// Validates `raw` against the kind and returns its canonical instance.
pub(crate) fn resolve(kind: KindHandle, raw: &str) -> Result<&'static Instance> {
    match kind.descriptor().position(raw) {
        Some(index) => Ok(canonical(kind, index)),
        None => {
            debug!(kind = kind.name(), value = raw, "rejected undeclared value");
            Err(Error::invalid_value(raw, kind.name()))
        }
    }
}

/// Validates every element, then resolves them in order.
///
/// Validation happens before any instance is created, so a batch containing
/// an undeclared value leaves the cache untouched.
pub(crate) fn resolve_all<I, S>(kind: KindHandle, raws: I) -> Result<Vec<&'static Instance>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let descriptor = kind.descriptor();
    let indices = raws
        .into_iter()
        .map(|raw| {
            let raw = raw.as_ref();
            descriptor.position(raw).ok_or_else(|| {
                debug!(kind = kind.name(), value = raw, "rejected undeclared value in batch");
                Error::invalid_value(raw, kind.name())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(indices
        .into_iter()
        .map(|index| canonical(kind, index))
        .collect())
}

/// Returns one canonical instance per declared value, in declared order.
pub(crate) fn enumerate(kind: KindHandle) -> Vec<&'static Instance> {
    (0..kind.descriptor().len())
        .map(|index| canonical(kind, index))
        .collect()
}

/// Returns true if the canonical instance for `(kind, value)` already exists.
#[must_use]
pub fn is_cached(kind: KindHandle, value: &str) -> bool {
    let descriptor = kind.descriptor();
    descriptor.position(value).is_some_and(|index| {
        INSTANCES.contains_key(&CacheKey {
            kind: kind.id(),
            value: descriptor.entries()[index].0,
        })
    })
}

/// Returns the number of canonical instances created so far for `kind`.
#[must_use]
pub fn cached_count(kind: KindHandle) -> usize {
    kind.descriptor()
        .values()
        .filter(|&value| {
            INSTANCES.contains_key(&CacheKey {
                kind: kind.id(),
                value,
            })
        })
        .count()
}
