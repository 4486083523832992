//! # convoke - Convention-Based Method Dispatch
//!
//! `convoke` resolves a logical hook name plus a variant token to the most
//! specific matching method on a caller object, falling back to a
//! generically-named default handler. Callers expose many specialized
//! operations (`findAll`, `findRange`, ...) behind one generic entry point
//! without an explicit registration table per hook.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use convoke::{Dispatcher, MethodTable, arg};
//!
//! let repo = MethodTable::builder("SiteRepository")
//!     .register("findAll", |_args| Ok(arg(all_sites())))
//!     .register("defaultFind", |args| Ok(arg(search(args)?)))
//!     .build();
//!
//! let dispatcher = Dispatcher::new();
//!
//! // Resolves to `findAll`; the variant token is consumed.
//! let sites = dispatcher.dispatch(&repo, "find", vec![arg("all")])?;
//!
//! // No `findRecent` registered: `defaultFind` receives every parameter.
//! let recent = dispatcher.dispatch(&repo, "find", vec![arg("recent"), arg(30u32)])?;
//! ```
//!
//! Fixed member sets can skip the table and implement [`Caller`] directly.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use convoke_core::{
    // Arguments
    Arg,
    // Errors
    BoxError,
    CallResult,
    // Caller capability
    Caller,
    // Configuration
    CaseStyle,
    DispatchError,
    DispatchOptions,
    Overrides,
    arg,
    take,
};

// Resolution
pub use convoke_std::dispatcher::Dispatcher;

// Name formatting
pub use convoke_std::casing::casify;

// Runtime callers
pub use convoke_std::table::{BoxMethod, MethodTable, MethodTableBuilder, UnknownMethod};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use convoke_std::testing::*;
}

/// Prelude module - common imports for convoke.
///
/// # Usage
///
/// ```rust,ignore
/// use convoke::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Arg,
        BoxError,
        CallResult,
        Caller,
        CaseStyle,
        DispatchError,
        Dispatcher,
        MethodTable,
        Overrides,
        arg,
        take,
    };
}
