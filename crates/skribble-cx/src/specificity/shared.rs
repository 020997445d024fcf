//! A specificity table shared between threads, and the process-wide default.

use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

use super::registry::SpecificityRegistry;
use crate::error::RegistryError;

/// A [`SpecificityRegistry`] that can be swapped while other threads read it.
///
/// Readers take a [`snapshot`](Self::snapshot) and keep it for the duration
/// of a deduplication, so they always observe one complete table even if
/// [`replace_all`](Self::replace_all) runs concurrently.
#[derive(Debug)]
pub struct SharedRegistry {
    current: RwLock<Arc<SpecificityRegistry>>,
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(SpecificityRegistry::default())
    }
}

impl SharedRegistry {
    /// Wraps `registry` for shared access.
    pub fn new(registry: SpecificityRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Returns the table currently installed.
    pub fn snapshot(&self) -> Arc<SpecificityRegistry> {
        // The guarded value is an immutable Arc, so a poisoned lock still holds a whole table.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Validates `mapping` and swaps it in as the new table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidMapping`] on a direct cycle; the
    /// installed table is not touched.
    pub fn replace_all<I, K, V, S>(&self, mapping: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = SpecificityRegistry::from_mapping(mapping)?;
        self.install(next);
        Ok(())
    }

    /// Installs an already-validated registry.
    pub fn install(&self, registry: SpecificityRegistry) {
        log::debug!(
            "installing shared specificity table with {} groups",
            registry.len()
        );
        let next = Arc::new(registry);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }

    /// Restores the default table.
    pub fn reset(&self) {
        self.install(SpecificityRegistry::default());
    }
}

static GLOBAL_REGISTRY: Lazy<SharedRegistry> = Lazy::new(SharedRegistry::default);

/// Returns the process-wide registry used by [`cx`](crate::cx()).
///
/// It starts out holding the default table.
pub fn global() -> &'static SharedRegistry {
    &GLOBAL_REGISTRY
}

/// Replaces the process-wide specificity table.
///
/// Intended to be called once during setup. Like
/// [`SpecificityRegistry::replace_all`] this replaces every entry.
///
/// # Example
///
/// ```rust
/// use skribble_cx::specificity::{global, set_specificity};
///
/// set_specificity([("gap", vec!["gapx", "gapy"])]).unwrap();
/// assert!(global().snapshot().lookup("gap").contains("gapx"));
/// # global().reset();
/// ```
pub fn set_specificity<I, K, V, S>(mapping: I) -> Result<(), RegistryError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL_REGISTRY.replace_all(mapping)
}
