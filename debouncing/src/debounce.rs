// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce wrapper.
//!
//! A debounced callback only runs once calls have stopped for the configured
//! timeout:
//! - Every call cancels the pending invocation (if any) and schedules a new
//!   one, capturing that call's arguments
//! - When a pending invocation fires, the slot is cleared first and the
//!   callback then runs with the last call's arguments
//! - Calls spaced closer than the timeout forever mean the callback never runs
//!
//! The callback always runs inside the scheduler's context, never at the call
//! site. A panic in the callback therefore unwinds there (a tokio task, or the
//! thread driving a `ManualScheduler`) and is never observed by `call`.

use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use debouncing_runtime::Scheduler;
use parking_lot::Mutex;

#[cfg(feature = "runtime-tokio")]
use debouncing_error::Result;
#[cfg(feature = "runtime-tokio")]
use debouncing_runtime::DefaultScheduler;

use crate::config::WrapperConfig;
use crate::logging::trace;
use crate::slot::TimerSlot;

/// A callback wrapped so it only fires after a quiet period.
///
/// Arguments are passed as a single value of type `A`; use a tuple for
/// callbacks taking several arguments and `()` for none.
///
/// Cloning yields another handle to the same wrapper, sharing its timer.
/// Wrappers built by separate factory calls never affect each other.
pub struct Debounced<A, S: Scheduler> {
    inner: Arc<Inner<A, S>>,
}

struct Inner<A, S: Scheduler> {
    callback: Box<dyn Fn(A) + Send + Sync>,
    timeout: Duration,
    scheduler: S,
    slot: Mutex<TimerSlot<S::Handle>>,
}

impl<A, S> Debounced<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Wraps `callback`, scheduling deferred invocations on `scheduler`.
    ///
    /// # Arguments
    ///
    /// * `callback` - Function to rate-limit
    /// * `config` - Timeout settings; a `Duration` converts directly
    /// * `scheduler` - Host facility that runs the deferred invocations
    pub fn with_scheduler<F>(callback: F, config: impl Into<WrapperConfig>, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let config = config.into();
        Self {
            inner: Arc::new(Inner {
                callback: Box::new(callback),
                timeout: config.timeout,
                scheduler,
                slot: Mutex::new(TimerSlot::new()),
            }),
        }
    }

    /// Records a call, restarting the quiet period.
    ///
    /// Any invocation still pending from an earlier call is cancelled and its
    /// arguments discarded. The callback runs with `args` once `timeout` has
    /// elapsed without another call.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let mut slot = inner.slot.lock();

        if let Some(stale) = slot.take() {
            inner.scheduler.cancel(stale);
            trace!("debounce: pending invocation superseded");
        }

        let id = slot.reserve();
        let shared = Arc::clone(inner);
        let handle = inner
            .scheduler
            .schedule_after(inner.timeout, move || shared.fire(id, args));
        slot.arm(id, handle);
    }

    /// Whether an invocation is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.slot.lock().is_pending()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }
}

impl<A, S: Scheduler> Inner<A, S> {
    fn fire(&self, id: u64, args: A) {
        if !self.slot.lock().release(id) {
            trace!("debounce: superseded invocation woke up, ignoring");
            return;
        }

        trace!("debounce: firing callback");
        (self.callback)(args);
    }
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Debounced<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("timeout", &self.inner.timeout)
            .field("scheduler", &self.inner.scheduler)
            .field("pending", &self.inner.slot.lock().is_pending())
            .finish_non_exhaustive()
    }
}

/// Extension trait providing `debounce` on any suitable closure.
///
/// ```rust,no_run
/// use debouncing::DebounceExt;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> debouncing::Result<()> {
/// let search = (|query: String| println!("searching {query}"))
///     .debounce(Duration::from_millis(100))?;
///
/// search.call("r".to_string());
/// search.call("ru".to_string());
/// search.call("rust".to_string()); // only this one reaches the callback
/// # Ok(())
/// # }
/// ```
pub trait DebounceExt<A>: Fn(A) + Send + Sync + Sized + 'static
where
    A: Send + 'static,
{
    /// Debounces on the current tokio runtime.
    ///
    /// # Errors
    /// Returns `DebounceError::RuntimeUnavailable` outside a tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    fn debounce(self, timeout: Duration) -> Result<Debounced<A, DefaultScheduler>>;

    /// Debounces on an explicit scheduler.
    fn debounce_with_scheduler<S: Scheduler>(self, timeout: Duration, scheduler: S) -> Debounced<A, S>;
}

impl<F, A> DebounceExt<A> for F
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    fn debounce(self, timeout: Duration) -> Result<Debounced<A, DefaultScheduler>> {
        debounce_with_timeout(self, timeout)
    }

    fn debounce_with_scheduler<S: Scheduler>(self, timeout: Duration, scheduler: S) -> Debounced<A, S> {
        Debounced::with_scheduler(self, timeout, scheduler)
    }
}

/// Debounces `callback` with the default 250 ms timeout on the current tokio runtime.
///
/// # Errors
/// Returns `DebounceError::RuntimeUnavailable` outside a tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<A, F>(callback: F) -> Result<Debounced<A, DefaultScheduler>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    debounce_with_timeout(callback, crate::config::DEFAULT_TIMEOUT)
}

/// Debounces `callback` with `timeout` on the current tokio runtime.
///
/// # Errors
/// Returns `DebounceError::RuntimeUnavailable` outside a tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn debounce_with_timeout<A, F>(callback: F, timeout: Duration) -> Result<Debounced<A, DefaultScheduler>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let scheduler = DefaultScheduler::current()?;
    Ok(Debounced::with_scheduler(callback, timeout, scheduler))
}
