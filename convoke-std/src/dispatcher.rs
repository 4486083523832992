//! # Resolution Layer (Dispatcher)
//!
//! Resolves a logical hook invocation to a concrete method on a
//! [`Caller`] and invokes it, with a two-tier fallback policy.
//!
//! # Resolution Policy
//!
//! Given `dispatch(caller, "find", [arg("all"), arg(opts)])`:
//!
//! 1. The first parameter, when it is a string, names the *variant*. The
//!    specific candidate is `casify(["find", "all"])` (`findAll` under the
//!    default format). If the caller exposes it, it is invoked with the
//!    remaining parameters and the fallback is never consulted.
//! 2. Otherwise the fallback candidate is `casify(["default", "find"])`
//!    (`defaultFind`), invoked with the full, unmodified parameter
//!    sequence so it can interpret the variant token itself.
//! 3. If neither exists, resolution fails with
//!    [`DispatchError::NoDestination`].
//!
//! Each dispatch is stateless relative to prior calls; the dispatcher's
//! configuration is read-only during dispatch.

use crate::casing;
use convoke_core::{Arg, Caller, DispatchError, DispatchOptions, Overrides};

/// Resolves logical hook invocations to concrete methods on a [`Caller`].
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = Dispatcher::new();
/// let records = dispatcher.dispatch(&repo, "find", vec![arg("all"), arg(opts)])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    options: DispatchOptions,
}

impl Dispatcher {
    /// Create a dispatcher with the default configuration: camelCase
    /// names and the `"default"` fallback prefix.
    pub fn new() -> Self {
        Self {
            options: DispatchOptions::default(),
        }
    }

    /// Create a dispatcher with explicit options.
    pub fn with_options(options: DispatchOptions) -> Self {
        Self { options }
    }

    /// The dispatcher's base configuration.
    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Resolve `hook` against `caller` and invoke the winning method.
    ///
    /// `parameters[0]`, when it is a `String` or `&'static str`, is the
    /// variant token and is consumed before a specific method receives
    /// the rest. Any other first parameter (or an empty sequence) leaves
    /// the variant absent: the specific candidate is then the bare hook
    /// name, and whichever method wins receives every parameter.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoDestination`] when neither candidate resolves;
    /// a failure raised by the invoked method surfaces unmodified through
    /// [`DispatchError::Method`].
    pub fn dispatch<C>(
        &self,
        caller: &C,
        hook: &str,
        mut parameters: Vec<Arg>,
    ) -> Result<Arg, DispatchError>
    where
        C: Caller + ?Sized,
    {
        let variant = parameters
            .first()
            .and_then(string_token)
            .map(str::to_owned);

        let specific = match &variant {
            Some(token) => self.build_method_name(hook, token, &Overrides::new()),
            None => casing::casify(&[hook], self.options.format),
        };

        if caller.has_method(&specific) {
            #[cfg(feature = "tracing")]
            tracing::trace!(hook, method = %specific, "dispatching to specific method");
            if variant.is_some() {
                parameters.remove(0);
            }
            return self.call_method(caller, &specific, parameters);
        }

        let fallback = self.build_default_method_name(hook, &Overrides::new());
        if caller.has_method(&fallback) {
            #[cfg(feature = "tracing")]
            tracing::trace!(hook, method = %fallback, "dispatching to default method");
            return self.call_method(caller, &fallback, parameters);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(hook, caller = caller.type_name(), "no dispatch destination");
        Err(DispatchError::NoDestination {
            hook: hook.to_string(),
            caller: caller.type_name().to_string(),
        })
    }

    /// Build the specific method name for `base` and `hook`.
    ///
    /// Per-call `overrides` merge over the instance options; the merge is
    /// local to this call and the instance configuration is untouched
    /// afterwards.
    pub fn build_method_name(&self, base: &str, hook: &str, overrides: &Overrides) -> String {
        let effective = self.options.merged(overrides);
        casing::casify(&[base, hook], effective.format)
    }

    /// Build the fallback method name for `hook`.
    ///
    /// Equivalent to [`build_method_name`](Self::build_method_name) with
    /// the effective default prefix as the base.
    pub fn build_default_method_name(&self, hook: &str, overrides: &Overrides) -> String {
        let effective = self.options.merged(overrides);
        casing::casify(&[&effective.default_prefix, hook], effective.format)
    }

    /// True iff `caller` exposes a callable member named `name`.
    ///
    /// Never invokes the member; false for absent names.
    pub fn method_exists<C>(&self, caller: &C, name: &str) -> bool
    where
        C: Caller + ?Sized,
    {
        caller.has_method(name)
    }

    /// Invoke `name` on `caller` with `args` as positional arguments.
    ///
    /// Arguments are moved through by value, identity intact. A failure
    /// raised by the method propagates unmodified.
    ///
    /// # Errors
    ///
    /// [`DispatchError::MissingMethod`] when the caller does not expose
    /// `name`.
    pub fn call_method<C>(
        &self,
        caller: &C,
        name: &str,
        args: Vec<Arg>,
    ) -> Result<Arg, DispatchError>
    where
        C: Caller + ?Sized,
    {
        if !caller.has_method(name) {
            return Err(DispatchError::MissingMethod {
                method: name.to_string(),
                caller: caller.type_name().to_string(),
            });
        }
        caller.call(name, args).map_err(DispatchError::Method)
    }
}

/// Read a variant token out of a dispatch argument without consuming it.
fn string_token(argument: &Arg) -> Option<&str> {
    if let Some(owned) = argument.downcast_ref::<String>() {
        return Some(owned);
    }
    argument.downcast_ref::<&'static str>().copied()
}
