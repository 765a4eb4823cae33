//! Ownership of drop-to-cancel browser handles.
//!
//! Handles cancel on drop (`gloo_timers::callback::Timeout`, the reveal
//! observers), so dropping is how a reset or an unmount tears down every
//! callback a render left behind. `TimerRegistry` holds the gallery's pending
//! timers; `ObserverSlot` holds the single observer of a revealed section.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

#[derive(Debug)]
pub struct TimerRegistry<H> {
    pending: Vec<H>,
}

impl<H> Default for TimerRegistry<H> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<H> TimerRegistry<H> {
    pub fn push(&mut self, handle: H) {
        self.pending.push(handle);
    }

    /// Drop every handle, returning how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// At most one handle for a component that reveals once.
#[derive(Debug)]
pub struct ObserverSlot<H> {
    handle: Option<H>,
    fired: bool,
}

impl<H> Default for ObserverSlot<H> {
    fn default() -> Self {
        Self { handle: None, fired: false }
    }
}

impl<H> ObserverSlot<H> {
    /// Nothing attached yet and not revealed.
    pub fn needs_observer(&self) -> bool {
        self.handle.is_none() && !self.fired
    }

    /// Keep `handle` alive. Ignored once fired.
    pub fn arm(&mut self, handle: Option<H>) {
        if !self.fired {
            self.handle = handle;
        }
    }

    /// The section revealed: drop the handle for good.
    pub fn fire(&mut self) {
        self.fired = true;
        self.handle = None;
    }

    /// The component unmounted.
    pub fn release(&mut self) {
        self.handle = None;
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}
