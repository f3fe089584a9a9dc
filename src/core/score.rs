//! Score ledger - the session's running point total
//!
//! A plain monotonic counter observed by presentation collaborators.
//! Deltas may be negative (penalties); only `reset` floors it back to 0.

/// Running score for the session. Lives until a new game resets it.
#[derive(Debug, Clone, Default)]
pub struct Score {
    total: i32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delta to the running total
    pub fn add(&mut self, delta: i32) {
        self.total += delta;
    }

    /// Set the total back to 0
    pub fn reset(&mut self) {
        self.total = 0;
    }

    pub fn value(&self) -> i32 {
        self.total
    }
}
