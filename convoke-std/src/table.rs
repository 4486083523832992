//! Runtime-assembled method tables.
//!
//! A [`MethodTable`] is the map-backed realization of the [`Caller`]
//! capability: method names bound to boxed closures, assembled through a
//! builder. Use it when the member set is not known at compile time or
//! when a hand-written `Caller` impl would be pure boilerplate.

use convoke_core::{Arg, CallResult, Caller};
use std::collections::HashMap;
use thiserror::Error;

/// A boxed callable member stored in a [`MethodTable`].
pub type BoxMethod = Box<dyn Fn(Vec<Arg>) -> CallResult>;

/// Error returned when a table is invoked for an unregistered name.
#[derive(Debug, Error)]
#[error("no method '{method}' registered on '{table}'")]
pub struct UnknownMethod {
    /// The requested member name.
    pub method: String,
    /// The table's identifying name.
    pub table: String,
}

/// A [`Caller`] backed by a map from method name to bound callable.
///
/// # Example
///
/// ```rust,ignore
/// let repo = MethodTable::builder("SiteRepository")
///     .register("findAll", |_args| Ok(arg(all_sites())))
///     .register("defaultFind", |args| Ok(arg(args.len())))
///     .build();
///
/// Dispatcher::new().dispatch(&repo, "find", vec![arg("all")])?;
/// ```
pub struct MethodTable {
    name: String,
    methods: HashMap<String, BoxMethod>,
}

impl MethodTable {
    /// Start building a table identified as `name` in diagnostics.
    pub fn builder(name: impl Into<String>) -> MethodTableBuilder {
        MethodTableBuilder {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when no methods are registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Caller for MethodTable {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    fn call(&self, name: &str, args: Vec<Arg>) -> CallResult {
        match self.methods.get(name) {
            Some(method) => method(args),
            None => Err(Box::new(UnknownMethod {
                method: name.to_string(),
                table: self.name.clone(),
            })),
        }
    }
}

/// Builder for constructing a [`MethodTable`].
pub struct MethodTableBuilder {
    name: String,
    methods: HashMap<String, BoxMethod>,
}

impl MethodTableBuilder {
    /// Bind `method` to `name`, replacing any previous binding.
    pub fn register<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(Vec<Arg>) -> CallResult + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
        self
    }

    /// Build the table.
    pub fn build(self) -> MethodTable {
        MethodTable {
            name: self.name,
            methods: self.methods,
        }
    }
}
