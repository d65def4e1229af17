//! State store for the site editor
//!
//! Contains the state architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function `(State, Action) -> State`
//! - Store: owns the current snapshot and tells subscribers about new ones
//!
//! The store is an ordinary owned value. Hand `&Store` to code that reads
//! and `&mut Store` to code that dispatches; there is no global instance.

pub mod actions;
pub mod combine;
pub mod defaults;
pub mod reducer;
pub mod selectors;
pub mod state;

use std::sync::Arc;

pub use actions::Action;
pub use reducer::reduce;
pub use state::{EditSiteState, Features, NavigationPanel, Preferences};

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<EditSiteState>)>;

/// Owner of the editor state
///
/// Dispatch takes `&mut self`, so one action is fully reduced before the
/// next can start. Readers get `Arc` snapshots that never change under them.
pub struct Store {
    state: Arc<EditSiteState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Create a store with every slice at its default
    pub fn new() -> Self {
        Self::from_snapshot(reduce(None, &Action::Unknown))
    }

    /// Create a store starting from `state`
    pub fn with_state(state: EditSiteState) -> Self {
        Self::from_snapshot(Arc::new(state))
    }

    fn from_snapshot(state: Arc<EditSiteState>) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &Arc<EditSiteState> {
        &self.state
    }

    /// Run a selector against the current snapshot
    pub fn select<T>(&self, selector: impl FnOnce(&EditSiteState) -> T) -> T {
        selector(&self.state)
    }

    /// Reduce `action` into a new snapshot
    ///
    /// Returns `true` when the snapshot changed; subscribers are only called
    /// in that case.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(Some(Arc::clone(&self.state)), &action);

        if Arc::ptr_eq(&next, &self.state) {
            tracing::trace!(action = action.kind(), "Action left state unchanged");
            return false;
        }

        tracing::debug!(action = action.kind(), "State updated");
        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        true
    }

    /// Dispatch several actions in order; returns how many changed state
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> usize {
        actions
            .into_iter()
            .fold(0, |changed, action| changed + usize::from(self.dispatch(action)))
    }

    /// Call `listener` with every new snapshot
    pub fn subscribe(&mut self, listener: impl FnMut(&Arc<EditSiteState>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
