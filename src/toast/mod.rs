//! Notification Queue
//!
//! Ordered list of transient messages describing mutation outcomes. The queue
//! only knows append and remove-by-id; timed expiry is driven from outside via
//! [`expiry::ToastExpiry`].

pub mod expiry;

pub use expiry::{ToastExpiry, TOAST_DURATION};

use crate::types::{generate_id, ToastId};
use serde::{Deserialize, Serialize};

/// Outcome category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient user-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
}

impl Toast {
    /// Create a toast with a fresh id
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Append-only toast list with removal by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// New queue with `toast` appended at the end
    pub fn with(&self, toast: Toast) -> Self {
        let mut toasts = self.toasts.clone();
        toasts.push(toast);
        Self { toasts }
    }

    /// New queue without the toast `id`. Absent ids leave the queue unchanged.
    pub fn without(&self, id: &str) -> Self {
        Self {
            toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
