// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

use debouncing_error::{DebounceError, Result};

/// Timeout used when none is given, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 250;

/// Timeout used when none is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// Settings captured once when a wrapper is created.
///
/// With the `serde` feature enabled this (de)serializes as
/// `{ "timeout_ms": 250 }`, with `timeout_ms` optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "raw::RawWrapperConfig"))]
pub struct WrapperConfig {
    pub timeout: Duration,
}

impl WrapperConfig {
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Builds a config from a millisecond count.
    ///
    /// # Errors
    /// Returns [`DebounceError::InvalidTimeout`] when `millis` is negative.
    pub fn from_millis(millis: i64) -> Result<Self> {
        u64::try_from(millis)
            .map(|millis| Self::new(Duration::from_millis(millis)))
            .map_err(|_| DebounceError::invalid_timeout(millis))
    }

    /// The timeout as a whole number of milliseconds.
    ///
    /// # Errors
    /// Returns [`DebounceError::InvalidConfig`] when the timeout does not fit
    /// in a `u64` millisecond count.
    pub fn timeout_millis(&self) -> Result<u64> {
        let millis = self.timeout.as_millis();
        u64::try_from(millis).map_err(|_| {
            DebounceError::invalid_config(format!(
                "timeout of {millis} ms does not fit in timeout_ms"
            ))
        })
    }
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl From<Duration> for WrapperConfig {
    fn from(timeout: Duration) -> Self {
        Self::new(timeout)
    }
}

#[cfg(feature = "serde")]
mod raw {
    use super::{WrapperConfig, DEFAULT_TIMEOUT_MS};
    use core::time::Duration;
    use serde::{ser::Error as _, Serialize, Serializer};

    fn default_timeout_ms() -> u64 {
        DEFAULT_TIMEOUT_MS
    }

    #[derive(Serialize, serde::Deserialize)]
    pub(super) struct RawWrapperConfig {
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    }

    impl From<RawWrapperConfig> for WrapperConfig {
        fn from(raw: RawWrapperConfig) -> Self {
            WrapperConfig::new(Duration::from_millis(raw.timeout_ms))
        }
    }

    impl Serialize for WrapperConfig {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let timeout_ms = self.timeout_millis().map_err(S::Error::custom)?;
            RawWrapperConfig { timeout_ms }.serialize(serializer)
        }
    }
}
