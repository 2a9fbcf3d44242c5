//! Single-slot hand-off between a searching player and whoever is waiting on it.
//!
//! A player publishes its best action so far as often as it likes; each publish
//! overwrites the previous one. The caller closes the slot when it stops
//! waiting and keeps whatever was published last. Publishes that arrive after
//! the slot was closed are dropped.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug)]
struct SlotState<A> {
    latest: Option<A>,
    closed: bool,
}

/// Cloneable handle to a shared, overwrite-on-publish slot
#[derive(Debug)]
pub struct ActionSlot<A> {
    inner: Arc<Mutex<SlotState<A>>>,
}

impl<A> Clone for ActionSlot<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Copy> Default for ActionSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Copy> ActionSlot<A> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotState {
                latest: None,
                closed: false,
            })),
        }
    }

    /// Replace the published action. Returns `false` once the slot is closed,
    /// in which case the action is discarded.
    pub fn publish(&self, action: A) -> bool {
        let mut state = self.inner.lock();
        if state.closed {
            return false;
        }
        state.latest = Some(action);
        true
    }

    /// Most recently published action, if any
    pub fn latest(&self) -> Option<A> {
        self.inner.lock().latest
    }

    /// Stop accepting publishes
    pub fn close(&self) {
        self.inner.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    /// Close the slot and return the final action
    pub fn take(&self) -> Option<A> {
        let mut state = self.inner.lock();
        state.closed = true;
        state.latest
    }
}
