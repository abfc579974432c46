//! Style definitions and their mapping payloads.
//!
//! A [`StyleDefinition`] pairs display data (id, name, preview) with a
//! [`Mapping`], the closed set of ways a style can rewrite a character.
//! All payloads borrow `'static` data so the built-in catalog can live in a
//! `static` without any runtime construction.
//!
//! # Example
//!
//! ```rust
//! use unistyle::{Mapping, OffsetBlock, StyleDefinition};
//!
//! static DOUBLE_STRUCK_OVERRIDES: [(char, char); 1] = [('C', '\u{2102}')];
//!
//! let style = StyleDefinition::new(
//!     "outline",
//!     "Outline",
//!     "𝕆𝕦𝕥𝕝𝕚𝕟𝕖",
//!     Mapping::OffsetBlock(
//!         OffsetBlock::new(0x1D538, 0x1D552).with_overrides(&DOUBLE_STRUCK_OVERRIDES),
//!     ),
//! );
//!
//! assert_eq!(style.id, "outline");
//! assert_eq!(style.mapping.map('A').to_string(), "𝔸");
//! assert_eq!(style.mapping.map('C').to_string(), "ℂ");
//! ```

use serde::Serialize;

/// The kind of mapping a style applies, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MappingKind {
    OffsetBlock,
    LookupTable,
    CombiningOverlay,
    Passthrough,
}

impl MappingKind {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingKind::OffsetBlock => "offset-block",
            MappingKind::LookupTable => "lookup-table",
            MappingKind::CombiningOverlay => "combining-overlay",
            MappingKind::Passthrough => "passthrough",
        }
    }
}

/// How one ASCII character class (uppercase, lowercase, digits) maps into an
/// offset block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassBase {
    /// The class starts at this code point; the rest follow contiguously.
    Offset(u32),
    /// The alphabet has no forms for this class; characters pass through.
    Identity,
}

/// An alternate alphabet laid out contiguously, with explicit overrides for
/// the slots Unicode left unassigned.
///
/// Several mathematical alphabets skip letters whose glyphs were already
/// encoded in the Letterlike Symbols block (ℂ, ℕ, ℎ, ℬ, ...). The arithmetic
/// slot for such a letter is reserved and renders as nothing useful, so the
/// override table is consulted before the offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetBlock {
    pub upper: ClassBase,
    pub lower: ClassBase,
    pub digit: ClassBase,
    pub overrides: &'static [(char, char)],
}

impl OffsetBlock {
    /// Creates a block with the given uppercase and lowercase bases.
    ///
    /// Digits default to [`ClassBase::Identity`].
    pub const fn new(upper: u32, lower: u32) -> Self {
        Self {
            upper: ClassBase::Offset(upper),
            lower: ClassBase::Offset(lower),
            digit: ClassBase::Identity,
            overrides: &[],
        }
    }

    /// Sets the code point that `'0'` maps to.
    pub const fn with_digits(self, base: u32) -> Self {
        Self {
            digit: ClassBase::Offset(base),
            ..self
        }
    }

    /// Sets the per-character overrides consulted before the offset.
    pub const fn with_overrides(self, overrides: &'static [(char, char)]) -> Self {
        Self { overrides, ..self }
    }

    /// Returns the override for `c`, if this block declares one.
    pub fn override_for(&self, c: char) -> Option<char> {
        self.overrides
            .iter()
            .find_map(|&(key, value)| (key == c).then_some(value))
    }

    /// Maps one character. Characters outside `A-Z`, `a-z`, `0-9` are returned unchanged.
    pub fn map(&self, c: char) -> char {
        if let Some(value) = self.override_for(c) {
            return value;
        }

        let (base, start) = match c {
            'A'..='Z' => (self.upper, 'A'),
            'a'..='z' => (self.lower, 'a'),
            '0'..='9' => (self.digit, '0'),
            _ => return c,
        };

        match base {
            ClassBase::Offset(base) => char::from_u32(base + (c as u32 - start as u32)).unwrap_or(c),
            ClassBase::Identity => c,
        }
    }
}

/// An explicit character-to-sequence table.
///
/// Entries must be sorted by key without repeats; the registry rejects
/// tables that are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable {
    pub entries: &'static [(char, &'static str)],
}

impl LookupTable {
    pub const fn new(entries: &'static [(char, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the replacement for `c`, if the table has one.
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&c, |&(key, _)| key)
            .ok()
            .map(|index| self.entries[index].1)
    }

    /// True if keys are strictly increasing.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[0].0 < pair[1].0)
    }
}

/// A combining mark appended after each eligible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombiningOverlay {
    pub mark: char,
}

impl CombiningOverlay {
    pub const fn new(mark: char) -> Self {
        Self { mark }
    }
}

/// The rule a style uses to rewrite characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    OffsetBlock(OffsetBlock),
    LookupTable(LookupTable),
    CombiningOverlay(CombiningOverlay),
    Passthrough,
}

impl Mapping {
    pub fn kind(&self) -> MappingKind {
        match self {
            Mapping::OffsetBlock(_) => MappingKind::OffsetBlock,
            Mapping::LookupTable(_) => MappingKind::LookupTable,
            Mapping::CombiningOverlay(_) => MappingKind::CombiningOverlay,
            Mapping::Passthrough => MappingKind::Passthrough,
        }
    }
}

/// A named transformation rule.
///
/// `preview` is literal data shown next to the name in pickers. It is stored,
/// never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefinition {
    /// Unique, stable key into the registry.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Short sample rendered in this style.
    pub preview: &'static str,
    pub mapping: Mapping,
}

impl StyleDefinition {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        preview: &'static str,
        mapping: Mapping,
    ) -> Self {
        Self {
            id,
            name,
            preview,
            mapping,
        }
    }

    pub fn kind(&self) -> MappingKind {
        self.mapping.kind()
    }
}
