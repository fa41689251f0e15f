// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports: `use debouncing::prelude::*;`

pub use crate::{DebounceExt, Debounced, Scheduler, ThrottleExt, Throttled, WrapperConfig};
