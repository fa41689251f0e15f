// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use debouncing_error::{DebounceError, Result};
#[cfg(feature = "runtime-tokio")]
use tokio::runtime::Handle;
#[cfg(feature = "runtime-tokio")]
use tokio::task::AbortHandle;

#[cfg(feature = "runtime-tokio")]
use crate::scheduler::Scheduler;

/// Runs each scheduled task on its own tokio task after a `tokio::time::sleep`.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    /// Wraps an explicit runtime handle.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Captures the runtime the caller is running on.
    ///
    /// # Errors
    /// Returns [`DebounceError::RuntimeUnavailable`] when called outside a
    /// tokio runtime.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|err| DebounceError::runtime_unavailable(err.to_string()))
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule_after<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        self.handle
            .spawn(async move {
                tokio::time::sleep(delay).await;
                task();
            })
            .abort_handle()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
