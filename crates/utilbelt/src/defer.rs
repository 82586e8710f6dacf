//! Deferred invocation.
//!
//! A [`Scheduler`] is a FIFO macrotask queue: [`Scheduler::defer`] only
//! enqueues, and tasks run when the host loop drains the queue with
//! [`Scheduler::run_until_idle`]. A deferred task therefore never runs before
//! the code that deferred it has returned.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

type Task = Box<dyn FnOnce()>;

/// A single-threaded macrotask queue.
#[derive(Default)]
pub struct Scheduler {
    queue: RefCell<VecDeque<Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` behind everything deferred before it.
    pub fn defer<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        queue.push_back(Box::new(task));
        trace!(pending = queue.len(), "task deferred");
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs the oldest queued task. Returns `false` when the queue was empty.
    ///
    /// The queue is not borrowed while the task runs, so tasks may defer
    /// further tasks. A panicking task leaves the remaining tasks queued.
    pub fn run_next(&self) -> bool {
        let task = self.queue.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Runs tasks until the queue is empty, including tasks deferred along
    /// the way. Returns how many ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        if ran > 0 {
            debug!(ran, "deferred queue drained");
        }
        ran
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

thread_local! {
    static DEFAULT_SCHEDULER: Scheduler = Scheduler::new();
}

/// Defers `task` on the current thread's default scheduler.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use utilbelt::{defer, run_deferred};
///
/// let called = Rc::new(Cell::new(false));
/// let flag = called.clone();
/// defer(move || flag.set(true));
/// assert!(!called.get());
///
/// run_deferred();
/// assert!(called.get());
/// ```
pub fn defer<F>(task: F)
where
    F: FnOnce() + 'static,
{
    DEFAULT_SCHEDULER.with(|scheduler| scheduler.defer(task));
}

/// Drains the current thread's default scheduler. Returns how many tasks ran.
pub fn run_deferred() -> usize {
    DEFAULT_SCHEDULER.with(Scheduler::run_until_idle)
}

/// Number of tasks waiting on the current thread's default scheduler.
pub fn pending_deferred() -> usize {
    DEFAULT_SCHEDULER.with(Scheduler::pending)
}
