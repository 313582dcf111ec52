//! A minimal single-threaded timer queue.
//!
//! Tasks run on the thread that calls [`Timer::run`], in deadline order.
//! A task may schedule further tasks; `run` returns once the queue drains.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

struct Entry {
    deadline: Instant,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // BinaryHeap is a max-heap; invert so the earliest deadline pops first,
    // with submission order breaking ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct TimerState {
    queue: RefCell<BinaryHeap<Entry>>,
    next_seq: Cell<u64>,
}

/// A shareable handle to the timer queue.
#[derive(Clone)]
pub struct Timer {
    state: Rc<TimerState>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates an empty timer queue.
    pub fn new() -> Self {
        Self {
            state: Rc::new(TimerState {
                queue: RefCell::new(BinaryHeap::new()),
                next_seq: Cell::new(0),
            }),
        }
    }

    /// Schedules `task` to run `delay` from now.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static,
    {
        let seq = self.state.next_seq.get();
        self.state.next_seq.set(seq + 1);
        self.state.queue.borrow_mut().push(Entry {
            deadline: Instant::now() + delay,
            seq,
            task: Box::new(task),
        });
    }

    /// Runs tasks in deadline order until the queue is empty.
    pub fn run(&self) {
        loop {
            let entry = self.state.queue.borrow_mut().pop();
            let Some(entry) = entry else { break };

            let now = Instant::now();
            if entry.deadline > now {
                thread::sleep(entry.deadline - now);
            }
            (entry.task)();
        }
    }
}
