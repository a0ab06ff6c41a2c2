//! The mutable store: named locations holding integers.

use crate::{L1Error, Loc, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A mapping from location identifiers to 64-bit integers.
///
/// The set of locations is fixed at construction: [`Store::assign`] and
/// [`Store::deref`] operate only on pre-existing locations, there is no
/// implicit declaration. Stores are value types — cloning one yields an
/// independent snapshot, and `==` compares contents structurally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    slots: HashMap<String, i64>,
}

impl Store {
    /// An empty store (no locations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the location exists in this store.
    pub fn contains(&self, l: &Loc) -> bool {
        self.slots.contains_key(l.id())
    }

    /// Read the integer held at `l`.
    pub fn deref(&self, l: &Loc) -> Result<i64> {
        self.slots
            .get(l.id())
            .copied()
            .ok_or_else(|| L1Error::location_error("deref", l.id()))
    }

    /// Overwrite the integer held at `l`. Fails if `l` was never declared.
    pub fn assign(&mut self, l: &Loc, v: i64) -> Result<()> {
        match self.slots.get_mut(l.id()) {
            Some(slot) => {
                *slot = v;
                Ok(())
            }
            None => Err(L1Error::location_error("assign", l.id())),
        }
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over `(identifier, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Store {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted for stable output.
        let mut entries: Vec<_> = self.slots.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        write!(f, "{{")?;
        for (i, (k, v)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}
