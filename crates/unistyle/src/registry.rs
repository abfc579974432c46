//! Style registry: an immutable, ordered, id-indexed catalog.
//!
//! The built-in catalog is exposed through [`StyleRegistry::global`], built
//! lazily once per process and never mutated afterwards. Custom registries
//! can be built from any set of definitions with [`StyleRegistry::new`],
//! which validates the catalog before indexing it.
//!
//! # Example
//!
//! ```rust
//! use unistyle::{StyleError, StyleRegistry};
//!
//! let registry = StyleRegistry::global();
//! assert_eq!(registry.get("bold").unwrap().name, "Bold");
//!
//! let err = registry.get("no-such-id").unwrap_err();
//! assert_eq!(err, StyleError::UnknownStyle { id: "no-such-id".into() });
//! ```
//!
//! # Fallback
//!
//! A registry can name a fallback style. Only [`StyleRegistry::resolve`]
//! consults it; [`StyleRegistry::get`] always reports unknown ids.
//!
//! ```rust
//! use unistyle::StyleRegistry;
//!
//! let registry = StyleRegistry::builtin().with_fallback("plain").unwrap();
//! assert_eq!(registry.resolve("no-such-id").unwrap().id, "plain");
//! assert!(registry.get("no-such-id").is_err());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::builtin::BUILTIN_STYLES;
use crate::definition::{Mapping, StyleDefinition};
use crate::error::{Result, StyleError};

static GLOBAL: Lazy<StyleRegistry> = Lazy::new(|| {
    let registry = StyleRegistry::builtin();
    tracing::debug!(styles = registry.len(), "built style registry");
    registry
});

/// An ordered catalog of [`StyleDefinition`]s indexed by id.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: Vec<StyleDefinition>,
    index: HashMap<&'static str, usize>,
    fallback: Option<usize>,
}

impl StyleRegistry {
    /// Validates and indexes `definitions`, keeping their order for display.
    ///
    /// Fails if an id repeats, if an offset-block override is keyed outside
    /// the ASCII letter and digit ranges, or if a lookup table is unsorted.
    pub fn new(definitions: impl IntoIterator<Item = StyleDefinition>) -> Result<Self> {
        let styles: Vec<StyleDefinition> = definitions.into_iter().collect();
        let mut index = HashMap::with_capacity(styles.len());

        for (position, style) in styles.iter().enumerate() {
            validate(style)?;
            if index.insert(style.id, position).is_some() {
                return Err(StyleError::DuplicateStyle {
                    id: style.id.to_string(),
                });
            }
        }

        Ok(Self {
            styles,
            index,
            fallback: None,
        })
    }

    /// Builds a fresh registry holding the built-in catalog.
    ///
    /// Most callers want [`StyleRegistry::global`] instead.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_STYLES).expect("built-in style catalog is valid")
    }

    /// The process-wide built-in registry.
    pub fn global() -> &'static StyleRegistry {
        &GLOBAL
    }

    /// Names the style [`resolve`](Self::resolve) substitutes for unknown ids.
    pub fn with_fallback(mut self, id: &str) -> Result<Self> {
        let position = self
            .index
            .get(id)
            .copied()
            .ok_or_else(|| StyleError::unknown(id))?;
        self.fallback = Some(position);
        Ok(self)
    }

    /// The configured fallback style, if any.
    pub fn fallback(&self) -> Option<&StyleDefinition> {
        self.fallback.map(|position| &self.styles[position])
    }

    /// Looks up a style by id. Never applies the fallback.
    pub fn get(&self, id: &str) -> Result<&StyleDefinition> {
        self.index
            .get(id)
            .map(|&position| &self.styles[position])
            .ok_or_else(|| StyleError::unknown(id))
    }

    /// Looks up a style by id, substituting the fallback when one is configured.
    pub fn resolve(&self, id: &str) -> Result<&StyleDefinition> {
        match self.get(id) {
            Ok(style) => Ok(style),
            Err(err) => match self.fallback() {
                Some(fallback) => {
                    tracing::warn!(
                        requested = id,
                        fallback = fallback.id,
                        "unknown style, using fallback"
                    );
                    Ok(fallback)
                }
                None => Err(err),
            },
        }
    }

    /// All styles in display order.
    pub fn list(&self) -> &[StyleDefinition] {
        &self.styles
    }

    /// Style ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.iter().map(|style| style.id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn validate(style: &StyleDefinition) -> Result<()> {
    match &style.mapping {
        Mapping::OffsetBlock(block) => {
            if let Some(&(key, _)) = block
                .overrides
                .iter()
                .find(|(key, _)| !key.is_ascii_alphanumeric())
            {
                return Err(StyleError::InvalidOverride {
                    style: style.id.to_string(),
                    key,
                });
            }
        }
        Mapping::LookupTable(table) => {
            if !table.is_sorted() {
                return Err(StyleError::UnsortedLookup {
                    style: style.id.to_string(),
                });
            }
        }
        Mapping::CombiningOverlay(_) | Mapping::Passthrough => {}
    }
    Ok(())
}
