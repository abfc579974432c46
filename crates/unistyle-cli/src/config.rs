//! Layered configuration: defaults, then environment, then flags.

use unistyle::{StyleError, StyleRegistry};

use crate::env::EnvReader;

pub const STYLE_VAR: &str = "UNISTYLE_STYLE";
pub const FALLBACK_VAR: &str = "UNISTYLE_FALLBACK";
pub const LOG_VAR: &str = "UNISTYLE_LOG";

pub const DEFAULT_STYLE: &str = "bold";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Style used when `--style` is not given.
    pub style: String,
    /// Style substituted for unknown ids, if any.
    pub fallback: Option<String>,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            fallback: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with any non-empty environment variables.
    pub fn from_env<E: EnvReader>(env: &E) -> Self {
        let read = |name: &str| env.var(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            style: read(STYLE_VAR).unwrap_or(defaults.style),
            fallback: read(FALLBACK_VAR),
            log_filter: read(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }

    /// Applies command-line flags on top.
    pub fn with_flags(mut self, style: Option<&str>, fallback: Option<&str>) -> Self {
        if let Some(style) = style {
            self.style = style.to_string();
        }
        if let Some(fallback) = fallback {
            self.fallback = Some(fallback.to_string());
        }
        self
    }

    /// Builds the registry commands run against.
    ///
    /// The built-in catalog, with the configured fallback if one is set. An
    /// unknown fallback id is an error, not silently ignored.
    pub fn registry(&self) -> Result<StyleRegistry, StyleError> {
        let registry = StyleRegistry::builtin();
        match &self.fallback {
            Some(id) => registry.with_fallback(id),
            None => Ok(registry),
        }
    }
}
