//! Testing utilities for convoke.
//!
//! - [`RecordingCaller`]: a caller that records every invocation it
//!   receives, for verifying what dispatch resolved and with how many
//!   arguments.

use convoke_core::{Arg, CallResult, Caller, arg};
use std::sync::{Arc, Mutex};

/// A record of one invocation observed by a [`RecordingCaller`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Name of the invoked method.
    pub method: String,
    /// Number of positional arguments received.
    pub arg_count: usize,
}

/// A [`Caller`] that records every invocation it receives.
///
/// It claims to expose a fixed set of method names and answers every
/// call with `()`.
///
/// # Example
///
/// ```rust,ignore
/// let caller = RecordingCaller::new("Repo", &["defaultFind"]);
/// let probe = caller.clone();
///
/// dispatcher.dispatch(&caller, "find", vec![arg("all")])?;
///
/// let calls = probe.calls();
/// assert_eq!(calls[0].method, "defaultFind");
/// assert_eq!(calls[0].arg_count, 1);
/// ```
pub struct RecordingCaller {
    name: String,
    methods: Vec<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingCaller {
    /// Create a caller named `name` claiming to expose `methods`.
    pub fn new(name: impl Into<String>, methods: &[&str]) -> Self {
        Self {
            name: name.into(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded invocations.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Clone for RecordingCaller {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            methods: self.methods.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl Caller for RecordingCaller {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }

    fn call(&self, name: &str, args: Vec<Arg>) -> CallResult {
        self.calls.lock().unwrap().push(RecordedCall {
            method: name.to_string(),
            arg_count: args.len(),
        });
        Ok(arg(()))
    }
}
