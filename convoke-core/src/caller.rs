//! # Capability Layer (Caller)
//!
//! The contract between a dispatcher and the objects it dispatches into.
//!
//! A [`Caller`] is any value that exposes zero or more callable members by
//! name. The dispatcher never enumerates members and never synthesizes
//! code; it probes for a name with [`Caller::has_method`] and invokes the
//! winner with [`Caller::call`].
//!
//! # Argument Identity
//!
//! Arguments travel as [`Arg`] (`Box<dyn Any>`), moved by value from the
//! dispatch site into the method. There is no serialization round trip:
//! closures, `Rc`-backed graphs, and other values that do not survive a
//! text encoding arrive at the callee as the same allocation they left
//! with. `Arg` carries no `Send` bound so non-`Send` values flow through.
//!
//! # Implementing Strategies
//!
//! - Match on the name directly for a fixed member set (see the trait
//!   example below).
//! - Use `convoke-std`'s `MethodTable` for members assembled at runtime.

use crate::error::BoxError;
use std::any::Any;

/// A type-erased dispatch argument, passed by value.
pub type Arg = Box<dyn Any>;

/// The result of invoking a caller method.
///
/// A method failure propagates as the boxed error, unmodified.
pub type CallResult = Result<Arg, BoxError>;

/// Box a value as a dispatch argument.
pub fn arg<T: 'static>(value: T) -> Arg {
    Box::new(value)
}

/// Recover a concrete value from an argument.
///
/// Returns the argument unchanged when the types do not line up, so a
/// method can probe several types without losing the value.
pub fn take<T: 'static>(argument: Arg) -> Result<T, Arg> {
    argument.downcast().map(|boxed| *boxed)
}

/// An object exposing zero or more callable members by name.
///
/// # Example
///
/// ```rust,ignore
/// struct SiteRepository;
///
/// impl Caller for SiteRepository {
///     fn has_method(&self, name: &str) -> bool {
///         matches!(name, "findAll" | "findRange")
///     }
///
///     fn call(&self, name: &str, args: Vec<Arg>) -> CallResult {
///         match name {
///             "findAll" => Ok(arg(self.all())),
///             "findRange" => Ok(arg(self.range(args)?)),
///             other => Err(format!("no member '{other}'").into()),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be a dispatch target",
    label = "missing `Caller` implementation",
    note = "Implement `Caller` (or build a `MethodTable`) to expose callable members by name."
)]
pub trait Caller {
    /// Identifying name used in dispatch diagnostics.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// True iff a callable member named `name` exists.
    ///
    /// Must not invoke anything and must not panic for absent or
    /// non-callable members.
    fn has_method(&self, name: &str) -> bool;

    /// Invoke the member named `name` with `args` as positional arguments.
    fn call(&self, name: &str, args: Vec<Arg>) -> CallResult;
}

// Allow boxed callers to be used where a Caller is expected.
impl<C: Caller + ?Sized> Caller for Box<C> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn has_method(&self, name: &str) -> bool {
        (**self).has_method(name)
    }

    fn call(&self, name: &str, args: Vec<Arg>) -> CallResult {
        (**self).call(name, args)
    }
}
