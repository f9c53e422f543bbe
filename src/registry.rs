use std::collections::{HashMap};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{debug};

use super::model::{SortName};
use super::sort::{Sort};

/// A table of canonical [`Sort`]s, one per [`SortName`].
///
/// Every [`Language`] consults a `SortRegistry` when a sort is added to it,
/// so that `Language`s constructed independently agree on which `Sort`
/// answers a given `SortName`. The table is guarded by a lock, so it can be
/// shared between threads.
///
/// [`Language`]: crate::Language
#[derive(Debug, Default)]
pub struct SortRegistry {
    sorts: Mutex<HashMap<SortName, Arc<dyn Sort>>>,
}

impl SortRegistry {
    pub fn new() -> Self { Self::default() }

    /// The process-wide `SortRegistry`.
    ///
    /// Initialised on first use, and never torn down.
    pub fn global() -> &'static Arc<SortRegistry> {
        static GLOBAL: OnceLock<Arc<SortRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(SortRegistry::new()))
    }

    /// Returns the canonical `Sort` named `sort.sortname()`.
    ///
    /// If there is none, `sort` becomes canonical.
    pub fn canonical(&self, sort: Arc<dyn Sort>) -> Arc<dyn Sort> {
        let mut sorts = self.sorts.lock().unwrap_or_else(PoisonError::into_inner);
        let name = sort.sortname().clone();
        sorts.entry(name).or_insert_with_key(|name| {
            debug!(sort = %name, constants = sort.constants().len(), "sort is canonical");
            sort
        }).clone()
    }

    /// Returns the canonical `Sort` called `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Sort>> {
        let sorts = self.sorts.lock().unwrap_or_else(PoisonError::into_inner);
        sorts.get(name).cloned()
    }

    /// The number of canonical `Sort`s.
    pub fn len(&self) -> usize {
        self.sorts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

// ----------------------------------------------------------------------------
