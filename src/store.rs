//! State container holding the current [`AppState`].
//!
//! Dispatch is serialized: one action is fully reduced before the next
//! one starts. Subscribers run after the transition is committed and the
//! lock is released, so they may read the state or dispatch again. Actions
//! dispatched during notification are queued behind the current round.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::Action;
use crate::mvi::Reducer;
use crate::root::{AppState, RootReducer};

/// Callback invoked with the new state after every dispatch.
pub type Subscriber = Arc<dyn Fn(&Arc<AppState>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Cloneable handle to a shared state container.
///
/// Every handle created by [`Store::new`] is independent; clones of a
/// handle share the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    state: Arc<AppState>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    dispatched: u64,
    /// Actions waiting for the current notification round to finish.
    pending: VecDeque<Action>,
    /// True while some call to `dispatch` is reducing and notifying.
    draining: bool,
}

impl Store {
    /// Create a store seeded with `initial` and dispatch [`Action::Init`].
    pub fn new(initial: AppState) -> Self {
        let store = Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: Arc::new(initial),
                subscribers: Vec::new(),
                next_subscription: 0,
                dispatched: 0,
                pending: VecDeque::new(),
                draining: false,
            })),
        };
        store.dispatch(Action::Init);
        store
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.lock().state)
    }

    /// Number of actions reduced so far, including the initial `Init`.
    pub fn dispatched(&self) -> u64 {
        self.inner.lock().dispatched
    }

    /// Reduce `action` against the current state and notify subscribers.
    ///
    /// A dispatch issued while subscribers are being notified is queued and
    /// reduced once the current notification round finishes, so every
    /// subscriber sees states in order and the last one it sees is current.
    pub fn dispatch(&self, action: Action) {
        {
            let mut inner = self.inner.lock();
            inner.pending.push_back(action);
            if inner.draining {
                return;
            }
            inner.draining = true;
        }
        let _reset = DrainReset(&self.inner);

        loop {
            let (state, subscribers) = {
                let mut inner = self.inner.lock();
                let Some(action) = inner.pending.pop_front() else {
                    inner.draining = false;
                    return;
                };

                let kind = action.kind();
                let prev = Arc::clone(&inner.state);
                let next = RootReducer::reduce(Arc::clone(&prev), action);
                let changed = !Arc::ptr_eq(&prev, &next);
                inner.state = Arc::clone(&next);
                inner.dispatched += 1;

                tracing::debug!(
                    action = kind,
                    changed,
                    queued = inner.pending.len(),
                    comments = next.comments.comments.len(),
                    "Action reduced"
                );

                let subscribers: Vec<Subscriber> =
                    inner.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect();
                (next, subscribers)
            };

            for subscriber in subscribers {
                subscriber(&state);
            }
        }
    }

    /// Register a listener called after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        let subscriber: Subscriber = Arc::new(listener);
        inner.subscribers.push((id, subscriber));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }
}

/// Releases the draining flag if a subscriber panics mid-round, so the
/// store keeps accepting dispatches.
struct DrainReset<'a>(&'a Mutex<StoreInner>);

impl Drop for DrainReset<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut inner = self.0.lock();
            inner.pending.clear();
            inner.draining = false;
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Store")
            .field("dispatched", &inner.dispatched)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
