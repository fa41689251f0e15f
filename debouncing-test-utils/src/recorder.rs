// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Records every argument a callback receives, in order.
///
/// Clones share the same log, so one clone can be moved into the callback
/// while the test keeps another for assertions.
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Send + 'static> CallRecorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends its argument to this recorder.
    pub fn callback(&self) -> impl Fn(T) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |value| calls.lock().push(value)
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T: Clone> CallRecorder<T> {
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }
}
