//! Console demo: a periodic tick stream, transformed and cancelled.
//!
//! Emits a tick every second, adds 9, doubles, prints the result, and
//! cancels the subscription after 4.5 seconds — four values reach the
//! console before the teardown releases the timer slot.

mod timer;

use rill_core::operators::map;
use rill_core::{Observable, Observer, Subscriber, Teardown};
use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Duration;
use timer::Timer;

const TICK_PERIOD: Duration = Duration::from_millis(1000);
const CANCEL_AFTER: Duration = Duration::from_millis(4500);

/// Emits 1, 2, 3, … once per `period` until torn down.
///
/// Each subscription owns its timer slot through a cancellation flag scoped
/// to that execution; the returned teardown sets it, the pending tick fires
/// as a no-op, and the chain stops rescheduling.
fn interval(timer: &Timer, period: Duration) -> Observable<u64, Infallible> {
    let timer = timer.clone();
    Observable::new(move |subscriber: Subscriber<u64, Infallible>| {
        let cancelled = Rc::new(Cell::new(false));
        schedule_tick(&timer, period, 0, subscriber, cancelled.clone());
        Teardown::action(move || cancelled.set(true))
    })
}

fn schedule_tick(
    timer: &Timer,
    period: Duration,
    count: u64,
    subscriber: Subscriber<u64, Infallible>,
    cancelled: Rc<Cell<bool>>,
) {
    let next_timer = timer.clone();
    timer.schedule(period, move || {
        if cancelled.get() {
            return;
        }
        let tick = count + 1;
        subscriber.next(tick);
        schedule_tick(&next_timer, period, tick, subscriber, cancelled);
    });
}

fn main() {
    let timer = Timer::new();

    let subscription = interval(&timer, TICK_PERIOD)
        .pipe((map(|tick| tick + 9), map(|tick| tick * 2)))
        .subscribe(
            Observer::new()
                .on_next(|value| println!("{value}"))
                .on_complete(|| println!("complete")),
        );

    timer.schedule(CANCEL_AFTER, move || subscription.unsubscribe());
    timer.run();
}
