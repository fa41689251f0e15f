// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::sleep;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Lets paused tokio time run forward by `millis`.
///
/// Timers due within the span fire, and the tasks they wake run, before this
/// returns. Requires `tokio::time::pause()` for deterministic behavior.
pub async fn elapse(millis: u64) {
    sleep(ms(millis)).await;
}
