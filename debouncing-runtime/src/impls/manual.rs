// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::scheduler::Scheduler;

type Task = Box<dyn FnOnce() + Send + 'static>;

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Task>,
}

/// A virtual clock that only moves when told to.
///
/// Tasks run on the thread calling [`ManualScheduler::advance`], in deadline
/// order, with ties broken by scheduling order. No internal lock is held while
/// a task runs, so tasks may schedule or cancel other tasks.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

/// Handle to a task queued on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualHandle {
    deadline: Duration,
    seq: u64,
}

impl ManualHandle {
    /// Virtual time at which the task becomes due.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that becomes due.
    ///
    /// The clock saturates at `Duration::MAX`, as do deadlines.
    ///
    /// Returns the number of tasks run. A task that panics unwinds out of this
    /// call, leaving the clock at that task's deadline.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now.saturating_add(by);
        let mut ran = 0;

        loop {
            let task = {
                let mut state = self.state.lock();
                let due = state
                    .queue
                    .first_key_value()
                    .map(|(&(deadline, _), _)| deadline)
                    .filter(|deadline| *deadline <= target);

                match due {
                    Some(deadline) => {
                        state.now = state.now.max(deadline);
                        state.queue.pop_first().map(|(_, task)| task)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }
}

impl Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_after<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        let handle = ManualHandle {
            deadline: state.now.saturating_add(delay),
            seq: state.next_seq,
        };
        state.next_seq += 1;
        state
            .queue
            .insert((handle.deadline, handle.seq), Box::new(task));
        handle
    }

    fn cancel(&self, handle: Self::Handle) {
        self.state.lock().queue.remove(&(handle.deadline, handle.seq));
    }
}
