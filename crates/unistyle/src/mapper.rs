//! Per-code-point mapping.
//!
//! [`Mapping::map`] turns one input `char` into a short run of output chars.
//! It is pure and total: any character a style has no rule for comes back
//! unchanged.

use std::fmt;

use unicode_normalization::char::is_combining_mark;

use crate::definition::Mapping;

/// Whether a combining overlay is appended after `c`.
///
/// Whitespace and characters that are already combining marks are skipped.
/// Everything else, punctuation and symbols included, gets the mark.
///
/// ```rust
/// use unistyle::overlay_applies;
///
/// assert!(overlay_applies('a'));
/// assert!(overlay_applies('!'));
/// assert!(!overlay_applies(' '));
/// assert!(!overlay_applies('\u{0301}'));
/// ```
pub fn overlay_applies(c: char) -> bool {
    !c.is_whitespace() && !is_combining_mark(c)
}

/// Output of mapping a single code point: zero or more code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped {
    /// One-for-one substitution (or the character itself).
    Char(char),
    /// The character followed by a combining mark.
    Overlaid(char, char),
    /// A table-supplied replacement, possibly empty or several chars long.
    Sequence(&'static str),
}

impl Mapped {
    /// Number of output code points.
    pub fn len(&self) -> usize {
        match self {
            Mapped::Char(_) => 1,
            Mapped::Overlaid(_, _) => 2,
            Mapped::Sequence(s) => s.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the mapped code points to `out`.
    pub fn push_to(&self, out: &mut String) {
        match *self {
            Mapped::Char(c) => out.push(c),
            Mapped::Overlaid(c, mark) => {
                out.push(c);
                out.push(mark);
            }
            Mapped::Sequence(s) => out.push_str(s),
        }
    }

    /// Iterates over the mapped code points.
    pub fn chars(&self) -> MappedChars {
        match *self {
            Mapped::Char(c) => MappedChars::Fixed([c, '\0'].into_iter().take(1)),
            Mapped::Overlaid(c, mark) => MappedChars::Fixed([c, mark].into_iter().take(2)),
            Mapped::Sequence(s) => MappedChars::Sequence(s.chars()),
        }
    }
}

impl fmt::Display for Mapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(8);
        self.push_to(&mut buf);
        f.write_str(&buf)
    }
}

/// Iterator returned by [`Mapped::chars`].
#[derive(Debug, Clone)]
pub enum MappedChars {
    Fixed(std::iter::Take<std::array::IntoIter<char, 2>>),
    Sequence(std::str::Chars<'static>),
}

impl Iterator for MappedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            MappedChars::Fixed(inner) => inner.next(),
            MappedChars::Sequence(inner) => inner.next(),
        }
    }
}

impl Mapping {
    /// Maps one code point under this rule.
    pub fn map(&self, c: char) -> Mapped {
        match self {
            Mapping::OffsetBlock(block) => Mapped::Char(block.map(c)),
            Mapping::LookupTable(table) => match table.get(c) {
                Some(replacement) => Mapped::Sequence(replacement),
                None => Mapped::Char(c),
            },
            Mapping::CombiningOverlay(overlay) => {
                if overlay_applies(c) {
                    Mapped::Overlaid(c, overlay.mark)
                } else {
                    Mapped::Char(c)
                }
            }
            Mapping::Passthrough => Mapped::Char(c),
        }
    }
}
