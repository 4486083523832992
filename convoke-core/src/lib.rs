//! # convoke-core
//!
//! Core traits for the convoke method dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! callers and extensions that don't need the full `convoke-std`
//! implementation.
//!
//! # Two-Layer Architecture
//!
//! ## Layer 1: Capability ([`Caller`])
//!
//! The contract between a dispatcher and the objects it dispatches into.
//! A `Caller` exposes zero or more callable members by name and can be
//! probed for them without side effects.
//!
//! ## Layer 2: Resolution (`Dispatcher`, in `convoke-std`)
//!
//! The policy layer: derives candidate method names from a hook and a
//! variant token, probes the caller, and invokes the winner.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Resolution and invocation errors
//! - [`BoxError`] - The boxed error type caller methods fail with

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod caller;
mod error;
mod options;

// Re-exports
pub use caller::{Arg, CallResult, Caller, arg, take};
pub use error::{BoxError, DispatchError};
pub use options::{CaseStyle, DispatchOptions, Overrides};
