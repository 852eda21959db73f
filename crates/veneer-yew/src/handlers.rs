//! Closures installed on native elements, keyed by event name.

use std::cell::RefCell;
use std::collections::HashMap;

/// Keeps installed closures alive while the element may still call them.
///
/// The table only changes when the element accepted the change, so it always
/// matches what the element holds.
pub(crate) struct HandlerTable<C> {
    entries: RefCell<HashMap<String, C>>,
}

impl<C> HandlerTable<C> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Hands `closure` to `assign` and keeps it when the element accepted it.
    pub(crate) fn install(
        &self,
        event: &str,
        closure: C,
        assign: impl FnOnce(&C) -> bool,
    ) -> bool {
        if !assign(&closure) {
            return false;
        }
        self.entries.borrow_mut().insert(event.to_string(), closure);
        true
    }

    /// Drops the closure for `event` once `assign` removed it from the element.
    pub(crate) fn clear(&self, event: &str, assign: impl FnOnce() -> bool) -> bool {
        if !assign() {
            return false;
        }
        self.entries.borrow_mut().remove(event);
        true
    }

    #[cfg(test)]
    fn contains(&self, event: &str) -> bool {
        self.entries.borrow().contains_key(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_install_is_not_kept() {
        let table = HandlerTable::new();
        assert!(!table.install("onDeviceBackButton", 1_u8, |_| false));
        assert!(!table.contains("onDeviceBackButton"));
        assert!(table.install("onDeviceBackButton", 2_u8, |_| true));
        assert!(table.contains("onDeviceBackButton"));
    }

    #[test]
    fn failed_clear_keeps_closure_alive() {
        let table = HandlerTable::new();
        table.install("onDeviceBackButton", 1_u8, |_| true);
        assert!(!table.clear("onDeviceBackButton", || false));
        assert!(table.contains("onDeviceBackButton"));
        assert!(table.clear("onDeviceBackButton", || true));
        assert!(!table.contains("onDeviceBackButton"));
    }
}
