//! Text transformation: decode, map each code point, reassemble.
//!
//! Input is walked as `char`s (Unicode scalar values), never as bytes or
//! UTF-16 units, so supplementary-plane output such as `𝐀` is produced and
//! consumed as a single character. Mapped runs are concatenated in input
//! order.
//!
//! Output length, counted in code points:
//!
//! - offset blocks and passthrough: equal to the input
//! - lookup tables: the sum of the replacement lengths (equal for the
//!   built-in tables, which are all one-to-one)
//! - combining overlays: input length plus one per eligible character
//!
//! Transforming is not idempotent and not invertible. Feeding styled output
//! back in is allowed but means nothing in particular: `𝐀` is not an ASCII
//! letter, so bold leaves it alone, while strikethrough stacks a second mark
//! on every character.
//!
//! ```rust
//! use unistyle::transform;
//!
//! assert_eq!(transform("Hi 5", "bold").unwrap(), "𝐇𝐢 𝟓");
//! assert_eq!(transform("ℝeal", "plain").unwrap(), "ℝeal");
//! assert!(transform("Hi", "no-such-id").is_err());
//! ```

use crate::definition::{Mapping, StyleDefinition};
use crate::error::Result;
use crate::registry::StyleRegistry;

/// Transforms `text` with the built-in style `style_id`.
///
/// Fails with [`StyleError::UnknownStyle`](crate::StyleError::UnknownStyle)
/// before any mapping if the id is not registered. Empty input yields an
/// empty string.
pub fn transform(text: &str, style_id: &str) -> Result<String> {
    StyleRegistry::global().transform(text, style_id)
}

/// Applies an already-resolved style to `text`.
pub fn apply(style: &StyleDefinition, text: &str) -> String {
    let output = match &style.mapping {
        Mapping::Passthrough => text.to_owned(),
        mapping => {
            let mut output = String::with_capacity(text.len() * 2);
            for c in text.chars() {
                mapping.map(c).push_to(&mut output);
            }
            output
        }
    };

    tracing::trace!(
        style = style.id,
        input_chars = text.chars().count(),
        output_chars = output.chars().count(),
        "transformed text"
    );
    output
}

impl StyleRegistry {
    /// Transforms `text` with the style registered as `style_id`.
    ///
    /// Uses [`resolve`](StyleRegistry::resolve), so a configured fallback
    /// applies.
    pub fn transform(&self, text: &str, style_id: &str) -> Result<String> {
        let style = self.resolve(style_id)?;
        Ok(apply(style, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    #[test]
    fn test_bold_letters_and_digits() {
        assert_eq!(transform("Bold 123", "bold").unwrap(), "𝐁𝐨𝐥𝐝 𝟏𝟐𝟑");
    }

    #[test]
    fn test_double_struck_uses_letterlike_symbols() {
        assert_eq!(transform("CNPQRZH", "double-struck").unwrap(), "ℂℕℙℚℝℤℍ");
        assert_eq!(transform("ABD", "double-struck").unwrap(), "𝔸𝔹𝔻");
    }

    #[test]
    fn test_italic_h_is_planck_constant() {
        assert_eq!(transform("hag", "italic").unwrap(), "ℎ𝑎𝑔");
    }

    #[test]
    fn test_output_is_one_char_per_supplementary_letter() {
        let output = transform("abc", "monospace").unwrap();
        assert_eq!(output.chars().count(), 3);
        // Each is outside the BMP: two UTF-16 units, four UTF-8 bytes.
        assert_eq!(output.encode_utf16().count(), 6);
        assert_eq!(output.len(), 12);
    }

    #[test]
    fn test_strikethrough_hi() {
        let output = transform("hi", "strikethrough").unwrap();
        let chars: Vec<char> = output.chars().collect();
        assert_eq!(chars, vec!['h', '\u{0336}', 'i', '\u{0336}']);
    }

    #[test]
    fn test_overlay_single_space() {
        let output = transform(" ", "underline").unwrap();
        assert_eq!(output, " ");
    }

    #[test]
    fn test_overlay_mixed_text() {
        let output = transform("a b\n", "slashed").unwrap();
        assert_eq!(output, "a\u{0338} b\u{0338}\n");
    }

    #[test]
    fn test_small_caps_keeps_uppercase_and_unmapped_x() {
        assert_eq!(transform("Fox Box", "small-caps").unwrap(), "Fᴏx Bᴏx");
    }

    #[test]
    fn test_superscript_formula() {
        assert_eq!(transform("x2+(n-1)", "superscript").unwrap(), "ˣ²⁺⁽ⁿ⁻¹⁾");
    }

    #[test]
    fn test_circled_zero_override() {
        assert_eq!(transform("1024", "circled").unwrap(), "①⓪②④");
    }

    #[test]
    fn test_punctuation_and_emoji_pass_through() {
        for id in ["bold", "script", "fullwidth", "small-caps", "plain"] {
            let output = transform("!?, 🎉", id).unwrap();
            assert_eq!(output, "!?, 🎉", "style {}", id);
        }
    }

    #[test]
    fn test_unknown_style_is_reported_every_time() {
        for _ in 0..3 {
            assert_eq!(
                transform("text", "no-such-id"),
                Err(StyleError::UnknownStyle {
                    id: "no-such-id".to_string()
                })
            );
        }
    }

    #[test]
    fn test_registry_fallback_applies_to_transform() {
        let registry = StyleRegistry::builtin().with_fallback("plain").unwrap();
        assert_eq!(registry.transform("abc", "nope").unwrap(), "abc");
        assert_eq!(registry.transform("abc", "bold").unwrap(), "𝐚𝐛𝐜");
    }

    #[test]
    fn test_reapplying_is_not_idempotent() {
        let once = transform("ab", "strikethrough").unwrap();
        let twice = transform(&once, "strikethrough").unwrap();
        assert_ne!(once, twice);
        // Existing marks are skipped; every letter gains a second one.
        assert_eq!(twice, "a\u{0336}\u{0336}b\u{0336}\u{0336}");
    }
}
