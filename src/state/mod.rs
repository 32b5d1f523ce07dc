//! Application State Machine
//!
//! `AppState` is replaced wholesale on every transition. [`reducer::reduce`] is
//! the pure transition function; [`dispatcher::Dispatcher`] owns the current
//! state and carries out the effects each transition requests.

pub mod action;
pub mod dispatcher;
pub mod reducer;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use reducer::{reduce, Effect, Transition};

use crate::toast::ToastQueue;
use crate::tree::Tree;
use serde::{Deserialize, Serialize};

/// Tree plus pending notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    tree: Tree,
    toasts: ToastQueue,
}

impl AppState {
    /// Initial state for `tree` with an empty toast queue
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            toasts: ToastQueue::new(),
        }
    }

    pub(crate) fn from_parts(tree: Tree, toasts: ToastQueue) -> Self {
        Self { tree, toasts }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }
}
