//! Deadline tracking for automatic toast removal.

use crate::types::ToastId;
use std::time::{Duration, Instant};

/// Default lifetime of a toast, measured from its creation
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Pending removal deadlines, one per scheduled toast
#[derive(Debug, Clone)]
pub struct ToastExpiry {
    lifetime: Duration,
    deadlines: Vec<(ToastId, Instant)>,
}

impl Default for ToastExpiry {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}

impl ToastExpiry {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            deadlines: Vec::new(),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Schedule `id` for removal `lifetime` after `created_at`. Rescheduling an id
    /// replaces its previous deadline.
    pub fn schedule(&mut self, id: ToastId, created_at: Instant) {
        self.cancel(&id);
        self.deadlines.push((id, created_at + self.lifetime));
    }

    /// Drop the deadline for `id`, if any.
    pub fn cancel(&mut self, id: &str) {
        self.deadlines.retain(|(pending, _)| pending != id);
    }

    /// Remove and return every id whose deadline is at or before `now`, in
    /// deadline order.
    pub fn take_due(&mut self, now: Instant) -> Vec<ToastId> {
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .deadlines
            .drain(..)
            .partition(|(_, deadline)| *deadline <= now);
        self.deadlines = pending;
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(id, _)| id).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|(_, deadline)| *deadline).min()
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }
}
