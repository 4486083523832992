//! Dispatcher configuration.
//!
//! A dispatcher owns a base [`DispatchOptions`], immutable after
//! construction. Individual calls may layer [`Overrides`] on top; merging
//! is a pure, local operation that never touches the base configuration.

/// Naming convention applied when deriving a method name from tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseStyle {
    /// First word lower-cased, subsequent words capitalized, no separator.
    #[default]
    Camel,
    /// Every word capitalized, no separator.
    Pascal,
    /// Words lower-cased, joined with `_`.
    Snake,
    /// Words lower-cased, joined with `.`.
    Dot,
}

impl CaseStyle {
    /// Parse a style from its conventional spelling.
    ///
    /// Unrecognized spellings fall back to [`CaseStyle::Camel`] rather
    /// than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pascalCase" | "PascalCase" => Self::Pascal,
            "snakeCase" | "snake_case" => Self::Snake,
            "dotCase" | "dot.case" => Self::Dot,
            _ => Self::Camel,
        }
    }
}

/// Per-dispatcher naming configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Naming convention for derived method names.
    pub format: CaseStyle,
    /// Prefix joined with the hook name to form the fallback method name.
    pub default_prefix: String,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            format: CaseStyle::Camel,
            default_prefix: "default".to_string(),
        }
    }
}

impl DispatchOptions {
    /// Merge per-call `overrides` over these options.
    ///
    /// Produces a transient effective configuration: an overridden key
    /// wins, an unspecified key retains the instance value. `self` is
    /// never mutated.
    pub fn merged(&self, overrides: &Overrides) -> DispatchOptions {
        DispatchOptions {
            format: overrides.format.unwrap_or(self.format),
            default_prefix: overrides
                .default_prefix
                .clone()
                .unwrap_or_else(|| self.default_prefix.clone()),
        }
    }
}

/// Per-call configuration overrides.
///
/// # Example
///
/// ```rust,ignore
/// let name = dispatcher.build_method_name(
///     "find",
///     "all",
///     &Overrides::new().format(CaseStyle::Pascal),
/// );
/// assert_eq!(name, "FindAll");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Override for the naming convention.
    pub format: Option<CaseStyle>,
    /// Override for the fallback method prefix.
    pub default_prefix: Option<String>,
}

impl Overrides {
    /// An empty override set; every key retains the instance value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the naming convention for this call.
    pub fn format(mut self, style: CaseStyle) -> Self {
        self.format = Some(style);
        self
    }

    /// Override the fallback method prefix for this call.
    pub fn default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = Some(prefix.into());
        self
    }
}
