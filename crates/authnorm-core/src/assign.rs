//! Copying own keys from one record onto another.
//!
//! Two interchangeable strategies exist: a bulk `Extend` of the map and a
//! key-by-key fallback. The strategy is resolved on every call so callers
//! (tests, the CLI configuration) can force one of them for the current thread.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

use crate::Record;

thread_local! {
    static OVERRIDE: Cell<Option<AssignStrategy>> = const { Cell::new(None) };
}

/// How keys are copied from a source record onto a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignStrategy {
    /// Bulk copy through the map's `Extend` implementation.
    #[default]
    Native,
    /// Manual iteration over the source keys.
    Polyfill,
}

impl AssignStrategy {
    /// Strategy in effect for the current thread: the installed override, else `Native`.
    pub fn get() -> Self {
        OVERRIDE.with(|o| o.get()).unwrap_or_default()
    }

    /// Installs `strategy` for the current thread until the returned guard is dropped.
    #[must_use = "the override is removed when the guard is dropped"]
    pub fn force(strategy: AssignStrategy) -> OverrideGuard {
        let previous = OVERRIDE.with(|o| o.replace(Some(strategy)));
        OverrideGuard { previous }
    }

    /// Installs (or clears, with `None`) the override for the current thread.
    pub fn set_override(strategy: Option<AssignStrategy>) {
        OVERRIDE.with(|o| o.set(strategy));
    }

    /// Copies every key of `source` onto `target`, overwriting on collision.
    ///
    /// An overwritten key keeps its position in `target`; new keys are appended
    /// in `source` order.
    pub fn copy<'a>(self, target: &'a mut Record, source: &Record) -> &'a mut Record {
        match self {
            AssignStrategy::Native => {
                target.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            AssignStrategy::Polyfill => {
                for (key, value) in source {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        target
    }
}

/// Restores the previous strategy override on drop.
#[derive(Debug)]
pub struct OverrideGuard {
    previous: Option<AssignStrategy>,
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        OVERRIDE.with(|o| o.set(self.previous));
    }
}

/// Copies all own keys of `source` onto `target` using the strategy in effect.
pub fn copy_own_enumerable<'a>(target: &'a mut Record, source: &Record) -> &'a mut Record {
    let strategy = AssignStrategy::get();
    tracing::trace!(?strategy, keys = source.len(), "assign");
    strategy.copy(target, source)
}
