//! Teardown registration and the subscription registry.
//!
//! A `Subscription` holds an ordered list of teardown actions and releases
//! them all when `unsubscribe` is called. Registries compose into trees: a
//! registered action is either a plain cleanup closure or another disposable
//! (a nested `Subscription`, or a `Subscriber`), whose own `unsubscribe` is
//! invoked in turn.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;

/// The capability of releasing a subscription's resources.
///
/// Implemented by [`Subscription`] and by `Subscriber`, so a subscriber is
/// usable wherever a teardown registry is expected.
pub trait Unsubscribe {
    /// Releases every resource registered with this value.
    fn unsubscribe(&self);
}

/// A single registered cleanup step.
///
/// Either a cleanup closure invoked directly, or a disposable whose
/// [`Unsubscribe::unsubscribe`] is invoked.
pub enum Teardown {
    /// A cleanup closure.
    Action(Box<dyn FnMut()>),
    /// A nested disposable (registry or subscriber).
    Disposable(Box<dyn Unsubscribe>),
}

impl Teardown {
    /// Wraps a cleanup closure.
    pub fn action<F>(f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Teardown::Action(Box::new(f))
    }

    /// Wraps a disposable value.
    pub fn disposable<D>(disposable: D) -> Self
    where
        D: Unsubscribe + 'static,
    {
        Teardown::Disposable(Box::new(disposable))
    }

    /// Runs this teardown step once.
    pub fn invoke(&mut self) {
        match self {
            Teardown::Action(action) => action(),
            Teardown::Disposable(disposable) => disposable.unsubscribe(),
        }
    }
}

/// Conversion into an optional [`Teardown`].
///
/// Producers and callers hand teardowns to [`Subscription::add`] in several
/// shapes: a closure wrapped by [`Teardown::action`], a nested registry, a
/// subscriber, `()` for "nothing to release", or an `Option` of any of these.
/// A conversion yielding `None` registers nothing. Anything else is rejected
/// at compile time.
pub trait IntoTeardown {
    /// Converts `self` into a teardown step, or `None` to register nothing.
    fn into_teardown(self) -> Option<Teardown>;
}

impl IntoTeardown for Teardown {
    fn into_teardown(self) -> Option<Teardown> {
        Some(self)
    }
}

impl IntoTeardown for () {
    fn into_teardown(self) -> Option<Teardown> {
        None
    }
}

impl<D> IntoTeardown for Option<D>
where
    D: IntoTeardown,
{
    fn into_teardown(self) -> Option<Teardown> {
        self.and_then(IntoTeardown::into_teardown)
    }
}

impl IntoTeardown for Subscription {
    fn into_teardown(self) -> Option<Teardown> {
        Some(Teardown::Disposable(Box::new(self)))
    }
}

/// An ordered registry of teardown actions.
///
/// The registry exclusively owns its action list. `unsubscribe` sweeps the
/// list in registration order; it is deliberately not idempotent — a second
/// call re-invokes every action. Callers that need exactly-once release must
/// guard inside the action itself (see the interval producer in the demo
/// crate for the pattern).
///
/// # Caller hazards
///
/// A panicking action aborts the sweep, skipping the remaining actions. An
/// action must not register new actions on the registry currently being
/// swept.
#[derive(Default)]
pub struct Subscription {
    teardowns: RefCell<Vec<Teardown>>,
}

impl Subscription {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            teardowns: RefCell::new(Vec::new()),
        }
    }

    /// Registers one teardown action.
    ///
    /// Registration order is preserved. A conversion yielding `None` is a
    /// no-op, not an error.
    pub fn add<T>(&self, teardown: T)
    where
        T: IntoTeardown,
    {
        if let Some(teardown) = teardown.into_teardown() {
            self.teardowns.borrow_mut().push(teardown);
        }
    }

    /// Invokes every registered action, in registration order.
    pub fn unsubscribe(&self) {
        let mut teardowns = self.teardowns.borrow_mut();
        for teardown in teardowns.iter_mut() {
            teardown.invoke();
        }
    }

    /// Returns the number of registered actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.teardowns.borrow().len()
    }

    /// Returns true if no action is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teardowns.borrow().is_empty()
    }
}

impl Unsubscribe for Subscription {
    fn unsubscribe(&self) {
        Subscription::unsubscribe(self);
    }
}
