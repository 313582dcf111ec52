//! Pass through values matching a predicate.

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;
use alloc::rc::Rc;

/// Forwards only the values for which `predicate` returns true; errors and
/// completion pass through unchanged.
pub fn filter<T, E, P>(predicate: P) -> impl FnOnce(Observable<T, E>) -> Observable<T, E>
where
    T: 'static,
    E: 'static,
    P: Fn(&T) -> bool + 'static,
{
    move |source| {
        let predicate = Rc::new(predicate);
        Observable::new(move |subscriber: Subscriber<T, E>| {
            let predicate = Rc::clone(&predicate);
            let next = subscriber.clone();
            let error = subscriber.clone();
            let complete = subscriber;
            source.subscribe(
                Observer::new()
                    .on_next(move |value| {
                        if predicate(&value) {
                            next.next(value);
                        }
                    })
                    .on_error(move |err| error.error(err))
                    .on_complete(move || complete.complete()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::map;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn test_filter_drops_nonmatching_values() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();

        Observable::<i64, ()>::from_iter(1..=6)
            .pipe((filter(|v| v % 2 == 0),))
            .subscribe(Observer::new().on_next(move |v| log_clone.borrow_mut().push(v)));

        assert_eq!(*log.borrow(), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_composes_with_map() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();

        Observable::<i64, ()>::from_iter(1..=4)
            .pipe((filter(|v| v % 2 == 1), map(|v| v * 10)))
            .subscribe(Observer::new().on_next(move |v| log_clone.borrow_mut().push(v)));

        assert_eq!(*log.borrow(), vec![10, 30]);
    }

    #[test]
    fn test_filter_forwards_completion() {
        let completed = Rc::new(RefCell::new(false));
        let completed_clone = completed.clone();

        Observable::<i64, ()>::from_iter([1])
            .pipe((filter(|_| false),))
            .subscribe(Observer::new().on_complete(move || *completed_clone.borrow_mut() = true));

        assert!(*completed.borrow());
    }

    #[test]
    fn test_filter_forwards_error_unchanged() {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let errors_clone = errors.clone();

        let source: Observable<i64, &str> = Observable::new(|subscriber: Subscriber<i64, &str>| {
            subscriber.next(2);
            subscriber.error("boom");
        });

        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();

        source.pipe((filter(|v| *v > 1),)).subscribe(
            Observer::new()
                .on_next(move |v| log_clone.borrow_mut().push(v))
                .on_error(move |e| errors_clone.borrow_mut().push(e)),
        );

        assert_eq!(*log.borrow(), vec![2]);
        assert_eq!(*errors.borrow(), vec!["boom"]);
    }
}
