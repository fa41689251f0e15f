// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttle wrapper.
//!
//! - When a call arrives and no window is open:
//!   - Open a window by scheduling its end `timeout` from now
//!   - Run the callback immediately, at the call site, with this call's arguments
//! - When a call arrives inside an open window it is dropped, arguments included
//! - When the window ends the wrapper re-arms; nothing else runs
//!
//! There is no trailing invocation: the last dropped call of a window is not
//! replayed when the window closes.
//!
//! Because the leading callback runs inside `call`, a panic there unwinds
//! through `call` to its caller. The window is opened before the callback
//! runs, so it stays open even if the callback panics.

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

/// A callback wrapped so it fires at most once per window.
///
/// Arguments are passed as a single value of type `A`; use a tuple for
/// callbacks taking several arguments and `()` for none.
///
/// Cloning yields another handle to the same wrapper, sharing its window.
pub struct Throttled<A, S: Scheduler> {
    inner: Arc<Inner<A, S>>,
}

struct Inner<A, S: Scheduler> {
    callback: Box<dyn Fn(A) + Send + Sync>,
    timeout: Duration,
    scheduler: S,
    slot: Mutex<TimerSlot<S::Handle>>,
}

impl<A, S> Throttled<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Wraps `callback`, timing windows on `scheduler`.
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

    /// Runs the callback now if no window is open, otherwise drops the call.
    ///
    /// Returns `true` when the callback ran.
    pub fn call(&self, args: A) -> bool {
        if !self.open_window() {
            trace!("throttle: call dropped inside open window");
            return false;
        }

        (self.inner.callback)(args);
        true
    }

    fn open_window(&self) -> bool {
        let inner = &self.inner;
        let mut slot = inner.slot.lock();
        if slot.is_pending() {
            return false;
        }

        let id = slot.reserve();
        let shared = Arc::clone(inner);
        let handle = inner
            .scheduler
            .schedule_after(inner.timeout, move || shared.close_window(id));
        slot.arm(id, handle);
        true
    }

    /// Whether a window is currently open.
    pub fn is_pending(&self) -> bool {
        self.inner.slot.lock().is_pending()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }
}

impl<A, S: Scheduler> Inner<A, S> {
    fn close_window(&self, id: u64) {
        if self.slot.lock().release(id) {
            trace!("throttle: window closed");
        }
    }
}

impl<A, S: Scheduler> Clone for Throttled<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Throttled<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("timeout", &self.inner.timeout)
            .field("scheduler", &self.inner.scheduler)
            .field("pending", &self.inner.slot.lock().is_pending())
            .finish_non_exhaustive()
    }
}

/// Extension trait providing `throttle` on any suitable closure.
///
/// ```rust,no_run
/// use debouncing::ThrottleExt;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> debouncing::Result<()> {
/// let on_scroll = (|offset: u32| println!("scrolled to {offset}"))
///     .throttle(Duration::from_millis(100))?;
///
/// on_scroll.call(10); // runs immediately
/// on_scroll.call(20); // dropped
/// # Ok(())
/// # }
/// ```
pub trait ThrottleExt<A>: Fn(A) + Send + Sync + Sized + 'static
where
    A: Send + 'static,
{
    /// Throttles on the current tokio runtime.
    ///
    /// # Errors
    /// Returns `DebounceError::RuntimeUnavailable` outside a tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    fn throttle(self, timeout: Duration) -> Result<Throttled<A, DefaultScheduler>>;

    /// Throttles on an explicit scheduler.
    fn throttle_with_scheduler<S: Scheduler>(self, timeout: Duration, scheduler: S) -> Throttled<A, S>;
}

impl<F, A> ThrottleExt<A> for F
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    fn throttle(self, timeout: Duration) -> Result<Throttled<A, DefaultScheduler>> {
        throttle_with_timeout(self, timeout)
    }

    fn throttle_with_scheduler<S: Scheduler>(self, timeout: Duration, scheduler: S) -> Throttled<A, S> {
        Throttled::with_scheduler(self, timeout, scheduler)
    }
}

/// Throttles `callback` with the default 250 ms timeout on the current tokio runtime.
///
/// # Errors
/// Returns `DebounceError::RuntimeUnavailable` outside a tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<A, F>(callback: F) -> Result<Throttled<A, DefaultScheduler>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    throttle_with_timeout(callback, crate::config::DEFAULT_TIMEOUT)
}

/// Throttles `callback` with `timeout` on the current tokio runtime.
///
/// # Errors
/// Returns `DebounceError::RuntimeUnavailable` outside a tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn throttle_with_timeout<A, F>(callback: F, timeout: Duration) -> Result<Throttled<A, DefaultScheduler>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let scheduler = DefaultScheduler::current()?;
    Ok(Throttled::with_scheduler(callback, timeout, scheduler))
}
