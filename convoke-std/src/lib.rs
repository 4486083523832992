//! # convoke-std
//!
//! Standard implementations for the convoke method dispatch library.
//!
//! This crate provides:
//! - **Resolution**: [`Dispatcher`](dispatcher::Dispatcher)
//! - **Name formatting**: [`casify`](casing::casify)
//! - **Runtime callers**: [`MethodTable`](table::MethodTable)
//! - **Test tooling**: [`RecordingCaller`](testing::RecordingCaller)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use convoke_core;

// Modules
pub mod casing;
pub mod dispatcher;
pub mod table;
pub mod testing;
