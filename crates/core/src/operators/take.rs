//! Forward a fixed number of values, then complete.

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;
use crate::subscription::IntoTeardown;
use core::cell::Cell;

/// Forwards the first `count` values, then completes the downstream
/// subscriber — which tears down the upstream subscription.
///
/// `take(0)` completes immediately on subscription and never subscribes
/// upstream. The counter is per-subscription state.
pub fn take<T, E>(count: usize) -> impl FnOnce(Observable<T, E>) -> Observable<T, E>
where
    T: 'static,
    E: 'static,
{
    move |source| {
        Observable::new(move |subscriber: Subscriber<T, E>| {
            if count == 0 {
                subscriber.complete();
                return None;
            }

            let remaining = Cell::new(count);
            let next = subscriber.clone();
            let error = subscriber.clone();
            let complete = subscriber;
            source
                .subscribe(
                    Observer::new()
                        .on_next(move |value| {
                            let left = remaining.get();
                            if left == 0 {
                                return;
                            }
                            remaining.set(left - 1);
                            next.next(value);
                            if left == 1 {
                                next.complete();
                            }
                        })
                        // A synchronous source keeps running after the limit
                        // completed downstream; its own terminal event must
                        // not be delivered a second time.
                        .on_error(move |err| {
                            if !error.is_stopped() {
                                error.error(err);
                            }
                        })
                        .on_complete(move || {
                            if !complete.is_stopped() {
                                complete.complete();
                            }
                        }),
                )
                .into_teardown()
        })
    }
}
