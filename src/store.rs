//! Generic holder for one property group's current values.
//!
//! A [`PropertyStore`] owns the authoritative snapshot for a single group and
//! exposes partial-update semantics: `set` merges a patch over the store's
//! *own* current value (never a stale copy held by the caller), `replace`
//! installs a complete snapshot during history replay without merging.

use crate::types::Patch;

/// Listener invoked synchronously after each committed store transition.
type Listener<T> = Box<dyn FnMut(&T)>;

/// Holds the current snapshot of one property group.
pub struct PropertyStore<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T: Clone> PropertyStore<T> {
    /// Creates a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    /// Returns the current full snapshot.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Merges `patch` over the store's current value and returns the new
    /// merged snapshot.
    pub fn set<P: Patch<T>>(&mut self, patch: &P) -> T {
        self.value = patch.apply_to(&self.value);
        let merged = self.value.clone();
        self.notify();
        merged
    }

    /// Replaces the snapshot wholesale. Used when history replay supplies a
    /// complete resolved value; bypasses merging.
    pub fn replace(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Registers a listener invoked synchronously after each committed
    /// `set` or `replace`.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.value);
        }
    }
}

impl<T: Clone + Default> Default for PropertyStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PropertyStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyStore")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IconPatch, IconProperties};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_merges_against_own_current_value() {
        let mut store = PropertyStore::new(IconProperties::default());

        // Two sets in a row: the second must see the first's result, not the
        // value the caller read before either call.
        let first = store.set(&IconPatch::size(64.0));
        assert_eq!(first.size, 64.0);
        let second = store.set(&IconPatch::rotation(90.0));
        assert_eq!(second.size, 64.0, "earlier update must not be lost");
        assert_eq!(second.rotation, 90.0);
    }

    #[test]
    fn replace_bypasses_merge() {
        let mut store = PropertyStore::new(IconProperties::default());
        store.set(&IconPatch::size(64.0));

        let full = IconProperties {
            size: 200.0,
            ..IconProperties::default()
        };
        store.replace(full.clone());
        assert_eq!(store.get(), &full);
    }

    #[test]
    fn listeners_run_after_each_commit() {
        let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = PropertyStore::new(IconProperties::default());

        let sink = Rc::clone(&seen);
        store.subscribe(move |props: &IconProperties| sink.borrow_mut().push(props.size));

        store.set(&IconPatch::size(64.0));
        store.replace(IconProperties::default());
        assert_eq!(*seen.borrow(), vec![64.0, 128.0]);
    }
}
