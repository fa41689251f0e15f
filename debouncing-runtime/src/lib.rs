// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host deferred-execution facility for the debouncing wrappers.
//!
//! The wrappers only need two primitives from their host: queue a thunk to
//! run after a delay, and cancel a queued thunk. [`scheduler::Scheduler`]
//! captures exactly that, and [`impls`] provides a tokio-backed scheduler
//! and a manually driven virtual clock.

pub mod impls;
pub mod scheduler;

pub use impls::manual::{ManualHandle, ManualScheduler};
pub use scheduler::Scheduler;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;

/// Scheduler used by the convenience factories.
#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = TokioScheduler;
