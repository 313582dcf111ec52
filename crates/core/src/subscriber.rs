//! Per-subscription mediation between a producer and the consumer's observer.
//!
//! A `Subscriber` gates event delivery on a one-way stopped flag and owns the
//! subscription's teardown registry by composition, exposing `add` and
//! `unsubscribe` by delegation. Handles are cheaply cloneable: a producer
//! keeps clones inside its emission closures while the caller keeps one as
//! the cancellation handle; all clones denote the same subscription
//! execution.

use crate::observer::Observer;
use crate::subscription::{IntoTeardown, Subscription, Teardown, Unsubscribe};
use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

struct SubscriberState<T, E> {
    observer: RefCell<Observer<T, E>>,
    stopped: Cell<bool>,
    teardowns: Subscription,
}

/// A handle to one subscription execution.
///
/// Created by `Observable::subscribe`, one per subscription. Forwards
/// producer events to the consumer's [`Observer`] while enforcing terminal
/// semantics: once [`error`](Subscriber::error) or
/// [`complete`](Subscriber::complete) has been called, the stopped flag is
/// set and never reverts, and no further value reaches the observer.
///
/// # Caller hazards
///
/// Observer callbacks are invoked synchronously; a panicking callback
/// propagates out of the call that triggered delivery. A callback must not
/// emit back into the subscriber that is delivering to it.
pub struct Subscriber<T, E> {
    state: Rc<SubscriberState<T, E>>,
}

impl<T, E> Clone for Subscriber<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T, E> Subscriber<T, E> {
    /// Wraps an observer in a fresh, un-stopped subscriber with an empty
    /// teardown registry.
    pub fn new(observer: Observer<T, E>) -> Self {
        Self {
            state: Rc::new(SubscriberState {
                observer: RefCell::new(observer),
                stopped: Cell::new(false),
                teardowns: Subscription::new(),
            }),
        }
    }

    /// Forwards a value to the observer, unless stopped.
    ///
    /// Dropped silently when the subscriber is stopped or the observer has no
    /// value callback. Does not change the stopped flag.
    pub fn next(&self, value: T) {
        if self.state.stopped.get() {
            return;
        }
        self.state.observer.borrow_mut().next(value);
    }

    /// Stops the subscriber and forwards the error to the observer.
    ///
    /// Does NOT run the teardown registry: only `complete` releases
    /// registered resources. Callers that must release on failure invoke
    /// [`unsubscribe`](Subscriber::unsubscribe) themselves.
    pub fn error(&self, err: E) {
        self.state.stopped.set(true);
        self.state.observer.borrow_mut().error(err);
    }

    /// Stops the subscriber, notifies the observer, and runs every
    /// registered teardown before returning.
    pub fn complete(&self) {
        self.state.stopped.set(true);
        self.state.observer.borrow_mut().complete();
        self.unsubscribe();
    }

    /// Returns true once `error` or `complete` has been called.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state.stopped.get()
    }

    /// Registers a teardown with the owned registry.
    pub fn add<D>(&self, teardown: D)
    where
        D: IntoTeardown,
    {
        self.state.teardowns.add(teardown);
    }

    /// Runs every registered teardown, in registration order.
    ///
    /// Cancellation does not set the stopped flag; the two mechanisms are
    /// separate, and a producer that keeps emitting after teardown has its
    /// deliveries accepted until `error` or `complete` stops the subscriber.
    pub fn unsubscribe(&self) {
        self.state.teardowns.unsubscribe();
    }
}

impl<T, E> Unsubscribe for Subscriber<T, E> {
    fn unsubscribe(&self) {
        Subscriber::unsubscribe(self);
    }
}

impl<T, E> IntoTeardown for Subscriber<T, E>
where
    T: 'static,
    E: 'static,
{
    fn into_teardown(self) -> Option<Teardown> {
        Some(Teardown::Disposable(Box::new(self)))
    }
}
