//! Read-only catalog projection for presentation callers.
//!
//! Pickers need an id to send back, a label, and a sample. They get exactly
//! that, and the sample is the stored preview literal.

use serde::Serialize;

use crate::definition::StyleDefinition;
use crate::registry::StyleRegistry;

/// What a style picker shows for one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub preview: &'a str,
}

impl<'a> From<&'a StyleDefinition> for StyleSummary<'a> {
    fn from(style: &'a StyleDefinition) -> Self {
        Self {
            id: style.id,
            name: style.name,
            preview: style.preview,
        }
    }
}

impl StyleRegistry {
    /// Summaries of every style, in display order.
    pub fn summaries(&self) -> Vec<StyleSummary<'_>> {
        self.list().iter().map(StyleSummary::from).collect()
    }
}

/// Summaries of the built-in styles, in display order.
///
/// ```rust
/// let styles = unistyle::list_styles();
/// assert_eq!(styles[0].id, "bold");
/// assert_eq!(styles[0].preview, "𝐁𝐨𝐥𝐝");
/// ```
pub fn list_styles() -> Vec<StyleSummary<'static>> {
    StyleRegistry::global().summaries()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries_follow_registry_order() {
        let registry = StyleRegistry::global();
        let summaries = registry.summaries();
        assert_eq!(summaries.len(), registry.len());
        for (summary, style) in summaries.iter().zip(registry.list()) {
            assert_eq!(summary.id, style.id);
            assert_eq!(summary.name, style.name);
            assert_eq!(summary.preview, style.preview);
        }
    }

    #[test]
    fn test_summary_serializes_three_fields() {
        let styles = list_styles();
        let json = serde_json::to_value(styles[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "bold", "name": "Bold", "preview": "𝐁𝐨𝐥𝐝" })
        );
    }
}
