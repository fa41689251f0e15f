// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;

pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Opaque reference to one queued task.
    type Handle: Send + 'static;

    /// Queues `task` to run once `delay` has elapsed.
    ///
    /// Implementations never run `task` from inside this call, even for a
    /// zero delay.
    fn schedule_after<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;

    /// Prevents a queued task from running.
    ///
    /// Cancelling a handle whose task already ran, or was already cancelled,
    /// is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
