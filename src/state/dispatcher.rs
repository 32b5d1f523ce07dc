//! Dispatcher: the single entry point a presentation layer talks to.
//!
//! Owns the current [`AppState`], runs the reducer for every action and carries
//! out the resulting effects. Persistence is best effort: a failed save is
//! logged and the in-memory state stands.

use super::{reduce, Action, AppState, Effect};
use crate::config::ToastConfig;
use crate::error::ApiError;
use crate::store::{load_or_default, SnapshotStore};
use crate::toast::{ToastExpiry, TOAST_DURATION};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

pub struct Dispatcher {
    state: AppState,
    store: Arc<dyn SnapshotStore>,
    expiry: ToastExpiry,
}

impl Dispatcher {
    /// Start from the stored snapshot, or the seed tree when none is usable.
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self::with_toast_lifetime(store, TOAST_DURATION)
    }

    pub fn with_toast_lifetime(store: Arc<dyn SnapshotStore>, lifetime: Duration) -> Self {
        let tree = load_or_default(store.as_ref());
        Self {
            state: AppState::new(tree),
            store,
            expiry: ToastExpiry::new(lifetime),
        }
    }

    pub fn from_config(store: Arc<dyn SnapshotStore>, config: &ToastConfig) -> Self {
        Self::with_toast_lifetime(store, config.lifetime())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-read the store and replace the tree when a valid snapshot exists.
    pub fn hydrate(&mut self) -> &AppState {
        match self.store.load() {
            Ok(Some(snapshot)) => {
                self.dispatch(Action::LoadSnapshot(snapshot));
            }
            Ok(None) => debug!("No snapshot to hydrate from"),
            Err(e) => warn!("Hydration skipped, snapshot load failed: {}", e),
        }
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> &AppState {
        self.dispatch_at(action, Instant::now())
    }

    /// Dispatch with an explicit clock reading used for toast deadlines.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) -> &AppState {
        let transition = reduce(&self.state, action);
        self.state = transition.state;

        for effect in transition.effects {
            match effect {
                Effect::PersistSnapshot => {
                    if let Err(e) = self.store.save(self.state.tree()) {
                        error!(error = %e, "Failed to persist snapshot");
                    }
                }
                Effect::ScheduleExpiry(id) => self.expiry.schedule(id, now),
                Effect::CancelExpiry(id) => self.expiry.cancel(&id),
            }
        }

        &self.state
    }

    /// Decode and dispatch a JSON action. Unrecognized tags are a no-op.
    pub fn dispatch_json(&mut self, json: &str) -> Result<&AppState, ApiError> {
        let action = Action::from_json(json)?;
        Ok(self.dispatch(action))
    }

    /// Dismiss every toast whose lifetime has elapsed at `now`. Returns how many
    /// were removed.
    pub fn expire_due(&mut self, now: Instant) -> usize {
        let due = self.expiry.take_due(now);
        let count = due.len();
        for toast_id in due {
            self.dispatch_at(Action::DismissToast { toast_id }, now);
        }
        count
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.expiry.next_deadline()
    }
}
