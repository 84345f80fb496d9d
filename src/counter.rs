//! The counter state machine shared by every delivery pattern.
//!
//! The only state is a signed integer and the only transitions are
//! `increment` and `decrement`. Both are always legal. Observers registered
//! with [`CounterState::subscribe`] are notified after every mutation, which is
//! how owning scopes learn they need to re-render.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::callback::Callback;

/// Handle returned by [`CounterState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(i64)>;

struct Inner {
    value: Cell<i64>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_id: Cell<u64>,
}

impl Inner {
    fn apply(&self, delta: i64) {
        let value = self.value.get().wrapping_add(delta);
        self.value.set(value);
        tracing::trace!(value, delta, "counter mutated");

        // Snapshot the list so an observer may (un)subscribe while notified.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(value);
        }
    }
}

/// Read-only view of a counter handed to presentation components.
#[derive(Debug, Clone)]
pub struct CounterProps {
    pub value: i64,
    pub increment: Callback,
    pub decrement: Callback,
}

impl CounterProps {
    /// Props with the given value and handlers that do nothing.
    ///
    /// Handy for previews and for driving a component in isolation.
    pub fn detached(value: i64) -> Self {
        Self {
            value,
            increment: Callback::new(|| {}),
            decrement: Callback::new(|| {}),
        }
    }
}

/// Owner of one counter value.
///
/// Cloning shares the same underlying counter; the pattern adapters keep the
/// only long-lived handle, so the state is dropped with its adapter.
#[derive(Clone)]
pub struct CounterState {
    inner: Rc<Inner>,
    increment: Callback,
    decrement: Callback,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    pub fn new() -> Self {
        let inner = Rc::new(Inner {
            value: Cell::new(0),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        });

        // Bound once so every snapshot carries the same handler identity.
        let weak = Rc::downgrade(&inner);
        let increment = Callback::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.apply(1);
            }
        });
        let weak = Rc::downgrade(&inner);
        let decrement = Callback::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.apply(-1);
            }
        });

        Self {
            inner,
            increment,
            decrement,
        }
    }

    pub fn value(&self) -> i64 {
        self.inner.value.get()
    }

    pub fn increment(&self) {
        self.increment.emit();
    }

    pub fn decrement(&self) {
        self.decrement.emit();
    }

    /// Current value together with the bound handlers.
    pub fn snapshot(&self) -> CounterProps {
        CounterProps {
            value: self.value(),
            increment: self.increment.clone(),
            decrement: self.decrement.clone(),
        }
    }

    /// Register an observer called with the new value after each mutation.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(i64) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(CounterState::new().value(), 0);
    }

    #[test]
    fn value_is_signed_sum_of_steps() {
        let state = CounterState::new();
        let steps = [1, 1, -1, -1, -1, 1, -1, -1];
        for step in steps {
            if step > 0 {
                state.increment();
            } else {
                state.decrement();
            }
        }
        assert_eq!(state.value(), steps.iter().sum::<i64>());
        assert_eq!(state.value(), -2);
    }

    #[test]
    fn increment_and_decrement_are_inverse() {
        let state = CounterState::new();
        state.increment();
        state.increment();
        let before = state.value();

        state.increment();
        state.decrement();
        assert_eq!(state.value(), before);

        state.decrement();
        state.increment();
        assert_eq!(state.value(), before);
    }

    #[test]
    fn snapshot_callbacks_mutate_owner() {
        let state = CounterState::new();
        let props = state.snapshot();
        props.increment.emit();
        props.increment.emit();
        props.decrement.emit();
        assert_eq!(state.value(), 1);
        // The snapshot itself is frozen.
        assert_eq!(props.value, 0);
    }

    #[test]
    fn callbacks_keep_identity_across_snapshots() {
        let state = CounterState::new();
        let first = state.snapshot();
        state.increment();
        let second = state.snapshot();
        assert!(first.increment.ptr_eq(&second.increment));
        assert!(first.decrement.ptr_eq(&second.decrement));
        assert!(!first.increment.ptr_eq(&first.decrement));
    }

    #[test]
    fn observers_see_every_mutation() {
        let state = CounterState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.subscribe(move |value| sink.borrow_mut().push(value));

        state.increment();
        state.increment();
        state.decrement();
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn unsubscribed_observer_is_silent() {
        let state = CounterState::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = state.subscribe(move |_| counter.set(counter.get() + 1));

        state.increment();
        state.unsubscribe(id);
        state.increment();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn callbacks_outliving_state_are_noops() {
        let state = CounterState::new();
        let props = state.snapshot();
        drop(state);
        props.increment.emit();
        props.decrement.emit();
    }

    #[test]
    fn wraps_at_the_boundary() {
        let state = CounterState::new();
        state.decrement();
        state.inner.value.set(i64::MIN);
        state.decrement();
        assert_eq!(state.value(), i64::MAX);
        state.increment();
        assert_eq!(state.value(), i64::MIN);
    }
}
