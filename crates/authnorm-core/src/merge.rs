//! Shallow merging of records and the two-step `merge(..).with(..)` builder.

use crate::assign::copy_own_enumerable;
use crate::keys::pick;
use crate::Record;

/// Returns a new record with `object1`'s keys followed by `object2`'s.
///
/// On collision `object2` wins and the key keeps `object1`'s position.
/// Neither argument is modified.
pub fn extend(object1: &Record, object2: &Record) -> Record {
    let mut out = Record::new();
    copy_own_enumerable(&mut out, object1);
    copy_own_enumerable(&mut out, object2);
    out
}

/// Starts a merge from a shallow copy of `base`.
pub fn merge(base: &Record) -> MergeBuilder {
    MergeBuilder { acc: base.clone() }
}

/// Starts a merge from the listed keys of `base` only.
pub fn merge_picked<K: AsRef<str>>(base: &Record, keys: &[K]) -> MergeBuilder {
    MergeBuilder {
        acc: pick(base, keys),
    }
}

/// Pending merge holding the selected base keys; finished by `with` or `with_picked`.
#[derive(Debug, Clone)]
#[must_use = "a merge does nothing until finished with `with` or `with_picked`"]
pub struct MergeBuilder {
    acc: Record,
}

impl MergeBuilder {
    /// Finishes the merge with every key of `other`.
    pub fn with(self, other: &Record) -> Record {
        extend(&self.acc, other)
    }

    /// Finishes the merge with the listed keys of `other` only.
    pub fn with_picked<K: AsRef<str>>(self, other: &Record, keys: &[K]) -> Record {
        extend(&self.acc, &pick(other, keys))
    }
}
