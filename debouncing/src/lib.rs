// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for rate-limiting callbacks.
//!
//! Both wrappers turn a callback into a value with a `call` method that can
//! be triggered as often as the caller likes (input events, sensor polls,
//! resize signals) while the callback itself runs far less often.
//!
//! # Overview
//!
//! - **[`Debounced`]** - trailing edge: runs once calls stop for `timeout`,
//!   with the last call's arguments
//! - **[`Throttled`]** - leading edge: runs immediately on the first call of
//!   each `timeout` window, with that call's arguments, and drops the rest
//! - **[`DebounceExt`] / [`ThrottleExt`]** - `.debounce(timeout)` and
//!   `.throttle(timeout)` on any closure
//! - **[`WrapperConfig`]** - the timeout, defaulting to [`DEFAULT_TIMEOUT`] (250 ms)
//!
//! Deferred work goes through a [`Scheduler`]. The `runtime-tokio` feature
//! (default) provides [`TokioScheduler`]; [`ManualScheduler`] is a virtual
//! clock for deterministic tests or custom event loops.
//!
//! # Example
//!
//! ```rust
//! use debouncing::{Debounced, Throttled, ManualScheduler};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let debounced = Debounced::with_scheduler(
//!     move |value: i32| sink.lock().unwrap().push(("debounce", value)),
//!     Duration::from_millis(100),
//!     scheduler.clone(),
//! );
//! let sink = seen.clone();
//! let throttled = Throttled::with_scheduler(
//!     move |value: i32| sink.lock().unwrap().push(("throttle", value)),
//!     Duration::from_millis(100),
//!     scheduler.clone(),
//! );
//!
//! for value in 1..=3 {
//!     debounced.call(value);
//!     throttled.call(value);
//! }
//! scheduler.advance(Duration::from_millis(100));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![("throttle", 1), ("debounce", 3)]);
//! ```

pub mod config;
mod debounce;
mod logging;
mod slot;
mod throttle;

pub mod prelude;

pub use config::{WrapperConfig, DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_MS};
pub use debounce::{DebounceExt, Debounced};
pub use throttle::{ThrottleExt, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use debounce::{debounce, debounce_with_timeout};
#[cfg(feature = "runtime-tokio")]
pub use throttle::{throttle, throttle_with_timeout};

pub use debouncing_error::{DebounceError, Result};
pub use debouncing_runtime::{ManualHandle, ManualScheduler, Scheduler};

#[cfg(feature = "runtime-tokio")]
pub use debouncing_runtime::{DefaultScheduler, TokioScheduler};
