//! Lazy push-based observables.
//!
//! An `Observable` is an immutable descriptor wrapping a producer function.
//! Nothing runs until `subscribe` is called; each subscription instantiates a
//! fresh [`Subscriber`] and runs the producer against it, so two
//! subscriptions to the same observable are fully independent executions.

use crate::observer::Observer;
use crate::pipe::{compose, Pipeline};
use crate::subscriber::Subscriber;
use crate::subscription::{IntoTeardown, Teardown};
use alloc::rc::Rc;

type Producer<T, E> = dyn Fn(Subscriber<T, E>) -> Option<Teardown>;

/// An immutable descriptor of a lazy, push-based value sequence.
///
/// Holds one producer function behind an `Rc`; cloning the observable clones
/// the descriptor, not an execution. `T` is the item type, `E` the error
/// type (`core::convert::Infallible` for streams that cannot fail).
///
/// # Example
///
/// ```ignore
/// use rill_core::{Observable, Observer};
///
/// let numbers: Observable<i64, ()> = Observable::new(|subscriber| {
///     subscriber.next(1);
///     subscriber.next(2);
///     subscriber.complete();
/// });
///
/// numbers.subscribe(Observer::new().on_next(|v| println!("{v}")));
/// ```
pub struct Observable<T, E> {
    producer: Rc<Producer<T, E>>,
}

impl<T, E> Clone for Observable<T, E> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T, E> Observable<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Wraps a producer function.
    ///
    /// The producer runs once per subscription, synchronously, and drives
    /// emissions through the [`Subscriber`] it is handed. Whatever it returns
    /// (a [`Teardown`], a registry, a subscriber, an `Option` of those, or
    /// `()`) is registered as the subscription's teardown. A producer must
    /// not call `next` after `error` or `complete`.
    pub fn new<P, D>(producer: P) -> Self
    where
        P: Fn(Subscriber<T, E>) -> D + 'static,
        D: IntoTeardown,
    {
        Self {
            producer: Rc::new(move |subscriber| producer(subscriber).into_teardown()),
        }
    }

    /// A cold observable that synchronously emits every item of `values`,
    /// then completes.
    ///
    /// The collection is cloned per subscription, so each execution replays
    /// the full sequence.
    pub fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::new(move |subscriber: Subscriber<T, E>| {
            for value in values.clone() {
                if subscriber.is_stopped() {
                    return;
                }
                subscriber.next(value);
            }
            subscriber.complete();
        })
    }

    /// Starts one execution, delivering events to `observer`.
    ///
    /// Runs the producer to completion (including any synchronous emissions)
    /// before returning. The returned [`Subscriber`] is the cancellation
    /// handle; it stays usable after the stream has completed or errored.
    ///
    /// A panic in an observer callback propagates out of this call.
    pub fn subscribe(&self, observer: Observer<T, E>) -> Subscriber<T, E> {
        let subscriber = Subscriber::new(observer);
        subscriber.add((self.producer)(subscriber.clone()));
        subscriber
    }

    /// Applies a tuple of operators left to right, first operator closest to
    /// the source.
    ///
    /// The empty tuple is the identity: `obs.pipe(())` is `obs` itself, not a
    /// wrapper around it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use rill_core::{Observable, Observer, operators::map};
    ///
    /// let doubled = Observable::<i64, ()>::from_iter([1, 2, 3])
    ///     .pipe((map(|v| v + 9), map(|v| v * 2)));
    /// ```
    pub fn pipe<P>(self, operators: P) -> P::Output
    where
        P: Pipeline<Self>,
    {
        compose(operators)(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn collect_into(log: &Rc<RefCell<Vec<i64>>>) -> Observer<i64, &'static str> {
        let log = log.clone();
        Observer::new().on_next(move |v| log.borrow_mut().push(v))
    }

    #[test]
    fn test_producer_is_lazy() {
        let runs = Rc::new(RefCell::new(0));
        let runs_clone = runs.clone();

        let source: Observable<i64, ()> = Observable::new(move |_subscriber| {
            *runs_clone.borrow_mut() += 1;
        });

        assert_eq!(*runs.borrow(), 0);
        source.subscribe(Observer::new());
        assert_eq!(*runs.borrow(), 1);
    }

    #[test]
    fn test_subscribe_runs_producer_synchronously() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let source: Observable<i64, &str> = Observable::new(|subscriber: Subscriber<i64, &str>| {
            subscriber.next(1);
            subscriber.next(2);
            subscriber.complete();
        });

        source.subscribe(collect_into(&log));

        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_producer_teardown_runs_on_unsubscribe() {
        let released = Rc::new(RefCell::new(0));
        let released_clone = released.clone();

        let source: Observable<i64, ()> = Observable::new(move |_subscriber| {
            let released = released_clone.clone();
            Teardown::action(move || *released.borrow_mut() += 1)
        });

        let subscription = source.subscribe(Observer::new());
        assert_eq!(*released.borrow(), 0);

        subscription.unsubscribe();
        assert_eq!(*released.borrow(), 1);
    }

    #[test]
    fn test_each_subscription_is_independent() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        // Driver pattern: capture each execution's subscriber so events can
        // be pushed after subscribe returns.
        let drivers: Rc<RefCell<Vec<Subscriber<i64, &str>>>> = Rc::new(RefCell::new(Vec::new()));
        let drivers_clone = drivers.clone();

        let source: Observable<i64, &str> = Observable::new(move |subscriber| {
            drivers_clone.borrow_mut().push(subscriber);
        });

        let first_subscription = source.subscribe(collect_into(&first));
        source.subscribe(collect_into(&second));

        first_subscription.unsubscribe();

        let drivers = drivers.borrow();
        drivers[0].next(1);
        drivers[1].next(2);

        assert_eq!(*first.borrow(), vec![1]);
        assert_eq!(*second.borrow(), vec![2]);
    }

    #[test]
    fn test_from_iter_emits_all_then_completes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let completed = Rc::new(RefCell::new(false));

        let log_clone = log.clone();
        let completed_clone = completed.clone();

        let source: Observable<i64, ()> = Observable::from_iter(vec![1, 2, 3]);
        source.subscribe(
            Observer::new()
                .on_next(move |v| log_clone.borrow_mut().push(v))
                .on_complete(move || *completed_clone.borrow_mut() = true),
        );

        assert_eq!(*log.borrow(), vec![1, 2, 3]);
        assert!(*completed.borrow());
    }

    #[test]
    fn test_from_iter_replays_per_subscription() {
        let source: Observable<i64, ()> = Observable::from_iter([7, 8]);

        for _ in 0..2 {
            let log = Rc::new(RefCell::new(Vec::new()));
            let log_clone = log.clone();
            source.subscribe(Observer::new().on_next(move |v| log_clone.borrow_mut().push(v)));
            assert_eq!(*log.borrow(), vec![7, 8]);
        }
    }

    #[test]
    fn test_empty_pipe_is_the_same_observable() {
        let source: Observable<i64, ()> = Observable::from_iter([1]);
        let alias = source.clone();

        let piped = source.pipe(());

        // Identity exactly: the descriptor is moved through, not rewrapped.
        assert!(Rc::ptr_eq(&alias.producer, &piped.producer));
    }

    #[test]
    fn test_handle_usable_after_complete() {
        let released = Rc::new(RefCell::new(0));
        let released_clone = released.clone();

        let source: Observable<i64, ()> = Observable::new(move |subscriber: Subscriber<i64, ()>| {
            subscriber.complete();
            let released = released_clone.clone();
            Teardown::action(move || *released.borrow_mut() += 1)
        });

        let subscription = source.subscribe(Observer::new());

        // The producer completed before its teardown was registered, so the
        // completion sweep saw an empty registry; the handle still releases.
        assert_eq!(*released.borrow(), 0);
        subscription.unsubscribe();
        assert_eq!(*released.borrow(), 1);
    }
}
