//! Observe values without altering the stream.

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;
use alloc::rc::Rc;

/// Invokes `inspect` on each value, then forwards it unchanged; errors and
/// completion pass through untouched.
pub fn tap<T, E, F>(inspect: F) -> impl FnOnce(Observable<T, E>) -> Observable<T, E>
where
    T: 'static,
    E: 'static,
    F: Fn(&T) + 'static,
{
    move |source| {
        let inspect = Rc::new(inspect);
        Observable::new(move |subscriber: Subscriber<T, E>| {
            let inspect = Rc::clone(&inspect);
            let next = subscriber.clone();
            let error = subscriber.clone();
            let complete = subscriber;
            source.subscribe(
                Observer::new()
                    .on_next(move |value| {
                        inspect(&value);
                        next.next(value);
                    })
                    .on_error(move |err| error.error(err))
                    .on_complete(move || complete.complete()),
            )
        })
    }
}
