//! Deferred focus state.
//!
//! Focus changes requested while a key is held are parked in `pending` and only take effect at
//! the next key-release, so the release of the key that requested the change is still routed
//! with the old focus value.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredFocus {
    focused: bool,
    pending: bool,
}

impl DeferredFocus {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            pending: focused,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Value `is_focused` takes at the next `commit`.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Set focus now, or only the pending value when `deferred`.
    pub fn set(&mut self, focused: bool, deferred: bool) {
        self.pending = focused;
        if !deferred {
            self.focused = focused;
        }
    }

    pub fn defer(&mut self, focused: bool) {
        self.set(focused, true);
    }

    /// Apply the pending value. Returns whether focus changed.
    pub fn commit(&mut self) -> bool {
        let changed = self.focused != self.pending;
        self.focused = self.pending;
        changed
    }
}

impl Default for DeferredFocus {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::DeferredFocus;

    #[test]
    fn starts_settled() {
        let focus = DeferredFocus::default();
        assert!(focus.is_focused());
        assert!(focus.pending());
    }

    #[test]
    fn deferred_change_waits_for_commit() {
        let mut focus = DeferredFocus::new(true);
        focus.defer(false);
        assert!(focus.is_focused());
        assert!(!focus.pending());

        assert!(focus.commit());
        assert!(!focus.is_focused());
        assert!(!focus.commit());
    }

    #[test]
    fn immediate_set_updates_both() {
        let mut focus = DeferredFocus::new(false);
        focus.set(true, false);
        assert!(focus.is_focused());
        assert!(focus.pending());
        assert!(!focus.commit());
    }

    #[test]
    fn immediate_set_overrides_parked_change() {
        let mut focus = DeferredFocus::new(true);
        focus.defer(false);
        focus.set(true, false);
        focus.commit();
        assert!(focus.is_focused());
    }
}
