// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared fixtures for the debouncing test suites.

pub mod helpers;
pub mod recorder;

pub use recorder::CallRecorder;
