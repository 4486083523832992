//! Error types for convoke.
//!
//! A single structured error type using `thiserror`:
//!
//! - [`DispatchError`] - Resolution and invocation failures
//!
//! Failures raised inside an invoked method are never wrapped with extra
//! context; the transparent [`DispatchError::Method`] variant carries them
//! to the dispatch call site unmodified.

use thiserror::Error;

/// A boxed error type for failures raised by caller methods.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving or invoking a dispatch target.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Neither the variant-specific nor the default-prefixed method exists
    /// on the caller.
    #[error("invalid dispatch destination for hook '{hook}' on '{caller}'")]
    NoDestination {
        /// The logical hook that failed to resolve.
        hook: String,
        /// The caller's identifying name.
        caller: String,
    },

    /// A direct method call named a member the caller does not expose.
    #[error("no callable member named '{method}' on '{caller}'")]
    MissingMethod {
        /// The requested member name.
        method: String,
        /// The caller's identifying name.
        caller: String,
    },

    /// The invoked method failed; its error is surfaced unmodified.
    #[error(transparent)]
    Method(BoxError),
}
