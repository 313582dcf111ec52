//! Transform each value with a projection function.

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;
use alloc::rc::Rc;

/// Forwards `project(value)` for every source value; errors and completion
/// pass through unchanged.
///
/// The projection is assumed total: a panicking projection propagates out of
/// the emission call that triggered it.
pub fn map<T, E, U, P>(project: P) -> impl FnOnce(Observable<T, E>) -> Observable<U, E>
where
    T: 'static,
    E: 'static,
    U: 'static,
    P: Fn(T) -> U + 'static,
{
    move |source| {
        let project = Rc::new(project);
        Observable::new(move |subscriber: Subscriber<U, E>| {
            let project = Rc::clone(&project);
            let next = subscriber.clone();
            let error = subscriber.clone();
            let complete = subscriber;
            source.subscribe(
                Observer::new()
                    .on_next(move |value| next.next(project(value)))
                    .on_error(move |err| error.error(err))
                    .on_complete(move || complete.complete()),
            )
        })
    }
}
