//! View mount tokens.

use std::sync::{Arc, Weak};

use tracing::warn;

/// A weak handle a fire-and-forget completion holds onto its view's state.
///
/// Navigating away does not cancel an in-flight request; the request is
/// left to settle in the background and its result is discarded here if
/// the originating view has unmounted, instead of mutating a destroyed
/// store.
pub struct ViewBinding<T: ?Sized> {
    inner: Weak<T>,
}

impl<T: ?Sized> ViewBinding<T> {
    pub fn new(owner: &Arc<T>) -> Self {
        Self {
            inner: Arc::downgrade(owner),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Runs `f` against the view state if the view is still mounted;
    /// otherwise logs and discards.
    pub fn with<F, O>(&self, f: F) -> Option<O>
    where
        F: FnOnce(&T) -> O,
    {
        match self.inner.upgrade() {
            Some(state) => Some(f(&state)),
            None => {
                warn!("completion for an unmounted view discarded");
                None
            }
        }
    }
}

impl<T: ?Sized> Clone for ViewBinding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_runs_while_mounted() {
        let state = Arc::new(AtomicUsize::new(0));
        let binding = ViewBinding::new(&state);

        assert!(binding.is_mounted());
        binding.with(|n| n.fetch_add(1, Ordering::SeqCst));
        assert_eq!(state.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_discards_after_unmount() {
        let state = Arc::new(AtomicUsize::new(0));
        let binding = ViewBinding::new(&state);
        drop(state);

        assert!(!binding.is_mounted());
        let ran = binding.with(|n| n.fetch_add(1, Ordering::SeqCst));
        assert!(ran.is_none());
    }
}
