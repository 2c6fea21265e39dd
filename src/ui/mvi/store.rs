//! Single-owner state container with synchronous subscriber notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::action::Action;
use super::reducer::Reducer;

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl ListenerRegistry {
    fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Holds the authoritative state for one reducer.
///
/// All mutations go through [`Store::dispatch`], which runs the reducer and
/// then calls every registered listener, in registration order, before
/// returning. The store is single-threaded: share it with `Rc`.
pub struct Store<R: Reducer> {
    /// `None` only while the reducer runs.
    state: RefCell<Option<R::State>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: RefCell::new(Some(initial)),
            listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
        }
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> R::State {
        self.state.borrow().clone().unwrap_or_default()
    }

    /// Run the reducer against the current state and notify listeners.
    pub fn dispatch(&self, action: R::Action) {
        tracing::debug!(kind = action.kind(), "dispatch");

        let current = self.state.borrow_mut().take().unwrap_or_default();
        let next = R::reduce(current, action);
        *self.state.borrow_mut() = Some(next);

        self.notify();
    }

    /// Register a listener called after every dispatch.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.listeners.borrow_mut().insert(Rc::new(listener));
        tracing::trace!(id, "listener subscribed");
        Subscription {
            registry: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe, unsubscribe or dispatch while
        // being notified. New registrations fire from the next dispatch.
        let snapshot: Vec<(u64, Listener)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.listeners.borrow().contains(id) {
                listener();
            }
        }
    }
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its listener immediately"]
pub struct Subscription {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: u64,
}

impl Subscription {
    /// Remove the listener from the store.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// False once the owning store is gone.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                tracing::trace!(id = self.id, "listener unsubscribed");
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
