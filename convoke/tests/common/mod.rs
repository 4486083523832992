use convoke::{Arg, BoxError, CallResult, Caller, arg, take};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Callers
// ============================================================================

/// A hand-written caller with a specific `findAll`/`findRange` pair and a
/// `defaultFind` fallback. Records every invocation as `name(arg_count)`.
pub struct SiteRepository {
    pub log: Arc<Mutex<Vec<String>>>,
}

impl SiteRepository {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Caller for SiteRepository {
    fn type_name(&self) -> &str {
        "SiteRepository"
    }

    fn has_method(&self, name: &str) -> bool {
        matches!(name, "findAll" | "findRange" | "defaultFind")
    }

    fn call(&self, name: &str, args: Vec<Arg>) -> CallResult {
        let arg_count = args.len();
        self.log.lock().unwrap().push(format!("{name}({arg_count})"));
        match name {
            "findAll" => Ok(arg(vec!["alpha".to_string(), "beta".to_string()])),
            "findRange" => {
                let mut args = args.into_iter();
                let offset = number(args.next())?;
                let count = number(args.next())?;
                Ok(arg((offset, count)))
            }
            "defaultFind" => Ok(arg(arg_count)),
            other => Err(format!("no member '{other}' on SiteRepository").into()),
        }
    }
}

fn number(argument: Option<Arg>) -> Result<usize, BoxError> {
    let argument = argument.ok_or("missing argument")?;
    take::<usize>(argument).map_err(|_| BoxError::from("expected a usize argument"))
}

/// A caller with one callable member and a plain data field.
pub struct Versioned {
    pub version: u32,
}

impl Caller for Versioned {
    fn type_name(&self) -> &str {
        "Versioned"
    }

    fn has_method(&self, name: &str) -> bool {
        name == "ping"
    }

    fn call(&self, name: &str, _args: Vec<Arg>) -> CallResult {
        match name {
            "ping" => Ok(arg("pong")),
            other => Err(format!("no member '{other}' on Versioned").into()),
        }
    }
}
