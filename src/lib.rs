//! Pindo: a virtual file-tree manager core
//!
//! A single rooted tree of folders and files, edited only through actions fed
//! to a pure reducer. Names are validated before any structural change, every
//! accepted change is persisted as a JSON snapshot, and each outcome is
//! reported through a queue of short-lived notifications.

pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod store;
pub mod toast;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod validation;

pub use error::{ApiError, MutationError, StorageError, ValidationError, ValidationKind};
pub use state::{reduce, Action, AppState, Dispatcher, Effect, Transition};
pub use store::{MemorySnapshotStore, SledSnapshotStore, SnapshotStore};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use tree::{create_initial_tree, FileNode, FolderNode, Node, Snapshot, Tree};
