//! Process-wide location store with a one-time initialization gate.
//!
//! The store is installed exactly once during startup. Queries issued
//! before that fail with [`LocationError::NotInitialized`], which callers
//! must treat as a lifecycle bug rather than an empty result.

use std::sync::{Arc, OnceLock};

use super::{LocationError, LocationStore};

/// Global location store.
pub static LOCATIONS: StoreHandle = StoreHandle::new();

/// A write-once slot for a built [`LocationStore`].
#[derive(Debug, Default)]
pub struct StoreHandle {
    cell: OnceLock<Arc<LocationStore>>,
}

impl StoreHandle {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Install the store. Fails if one is already installed.
    pub fn install(&self, store: LocationStore) -> Result<Arc<LocationStore>, LocationError> {
        let store = Arc::new(store);
        self.cell
            .set(Arc::clone(&store))
            .map_err(|_| LocationError::AlreadyInitialized)?;
        Ok(store)
    }

    /// Get the installed store.
    pub fn get(&self) -> Result<Arc<LocationStore>, LocationError> {
        self.cell.get().cloned().ok_or(LocationError::NotInitialized)
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Install the global location store.
#[inline]
pub fn install(store: LocationStore) -> Result<Arc<LocationStore>, LocationError> {
    LOCATIONS.install(store)
}

/// Get the global location store.
#[inline]
pub fn locations() -> Result<Arc<LocationStore>, LocationError> {
    LOCATIONS.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::store::tests::berlin;

    #[test]
    fn test_query_before_install_is_distinct_error() {
        let handle = StoreHandle::new();
        assert!(!handle.is_initialized());
        assert_eq!(handle.get().unwrap_err(), LocationError::NotInitialized);
    }

    #[test]
    fn test_install_once() {
        let handle = StoreHandle::new();
        handle
            .install(LocationStore::build(berlin()).unwrap())
            .unwrap();
        assert!(handle.is_initialized());
        assert_eq!(handle.get().unwrap().len(), 2);

        let second = handle.install(LocationStore::default());
        assert_eq!(second.unwrap_err(), LocationError::AlreadyInitialized);
        // The first store stays in place.
        assert_eq!(handle.get().unwrap().len(), 2);
    }

    #[test]
    fn test_concurrent_readers_share_one_store() {
        let handle = Arc::new(StoreHandle::new());
        handle
            .install(LocationStore::build(berlin()).unwrap())
            .unwrap();

        let threads: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    let store = handle.get().unwrap();
                    store.hierarchy().children("berlin").len()
                })
            })
            .collect();
        for t in threads {
            assert_eq!(t.join().unwrap(), 1);
        }
    }
}
