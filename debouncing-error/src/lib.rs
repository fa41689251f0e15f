// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the debouncing wrappers
//!
//! Only factory-time failures are represented here. Failures raised by a
//! wrapped callback are never converted into a [`DebounceError`]: they
//! propagate (as panics) through whatever context runs the callback.
//!
//! # Examples
//!
//! ```
//! use debouncing_error::{DebounceError, Result};
//!
//! fn checked_millis(millis: i64) -> Result<u64> {
//!     u64::try_from(millis).map_err(|_| DebounceError::invalid_timeout(millis))
//! }
//!
//! assert!(checked_millis(-1).is_err());
//! ```

/// Root error type for all debouncing operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DebounceError {
    /// A timeout expressed in milliseconds was negative
    #[error("Invalid timeout: {millis} ms (must be non-negative)")]
    InvalidTimeout {
        /// The rejected value
        millis: i64,
    },

    /// No host scheduler is available to queue deferred invocations
    ///
    /// Raised when a tokio-backed wrapper is created outside a tokio runtime.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// What was being created when the lookup failed
        context: String,
    },

    /// A configuration value cannot be represented
    ///
    /// Raised when a timeout does not fit the millisecond form used in
    /// configuration files.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },
}

impl DebounceError {
    /// Create an invalid timeout error
    #[must_use]
    pub const fn invalid_timeout(millis: i64) -> Self {
        Self::InvalidTimeout { millis }
    }

    /// Create a runtime unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Create an invalid configuration error with the given message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Specialized Result type for debouncing operations
pub type Result<T> = std::result::Result<T, DebounceError>;
