//! Observable single-threaded state.
//!
//! A [`MutableState`] is owned by whoever created it; there is no global
//! registry. Readers either poll with [`MutableState::get`] or register a
//! listener with [`MutableState::subscribe`] and keep the returned
//! [`Subscription`] alive for as long as they want to be notified.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

pub type SubscriptionId = u64;

type Listener<T> = Rc<dyn Fn(&T) + 'static>;

struct StateInner<T> {
    value: RefCell<T>,
    listeners: RefCell<SmallVec<[(SubscriptionId, Listener<T>); 2]>>,
    next_subscription_id: Cell<SubscriptionId>,
}

trait ListenerRegistry {
    fn remove_listener(&self, id: SubscriptionId) -> bool;
}

impl<T> ListenerRegistry for StateInner<T> {
    fn remove_listener(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Writable observable value.
pub struct MutableState<T: 'static> {
    inner: Rc<StateInner<T>>,
}

impl<T: 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StateInner {
                value: RefCell::new(value),
                listeners: RefCell::new(SmallVec::new()),
                next_subscription_id: Cell::new(1),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Stores `value` and notifies every listener with it.
    ///
    /// Listeners run after the value is committed, so they may read or write
    /// the state themselves.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        let listeners: SmallVec<[Listener<T>; 2]> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&value);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_subscription_id.get();
        self.inner.next_subscription_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        let registry: Rc<dyn ListenerRegistry> = self.inner.clone();
        Subscription {
            registry: Rc::downgrade(&registry),
            id: Some(id),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: self.clone(),
        }
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Read-only view over a [`MutableState`].
pub struct State<T: 'static> {
    inner: MutableState<T>,
}

impl<T: 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

/// Token returned by [`MutableState::subscribe`].
///
/// The listener is removed when the token is dropped or when
/// [`Subscription::unsubscribe`] is called, whichever comes first.
pub struct Subscription {
    registry: Weak<dyn ListenerRegistry>,
    id: Option<SubscriptionId>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.registry.strong_count() > 0
    }

    /// Removes the listener. Returns `true` only for the call that actually
    /// removed it.
    pub fn unsubscribe(&mut self) -> bool {
        let Some(id) = self.id.take() else {
            return false;
        };
        match self.registry.upgrade() {
            Some(registry) => registry.remove_listener(id),
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
