//! Render plain text as styled Unicode.
//!
//! Many platforms accept only plain text, but Unicode carries whole
//! alternate alphabets (mathematical bold, script, double-struck,
//! fullwidth, ...) and combining marks that draw lines through or under a
//! character. This crate maps ordinary text into those forms, one code point
//! at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use unistyle::{list_styles, transform};
//!
//! assert_eq!(transform("Hello", "bold").unwrap(), "𝐇𝐞𝐥𝐥𝐨");
//! assert_eq!(transform("Reals", "double-struck").unwrap(), "ℝ𝕖𝕒𝕝𝕤");
//! assert_eq!(transform("no", "strikethrough").unwrap(), "n\u{336}o\u{336}");
//!
//! for style in list_styles() {
//!     println!("{:<18} {}", style.id, style.preview);
//! }
//! ```
//!
//! # Mapping kinds
//!
//! | Kind | Behavior |
//! |------|----------|
//! | Offset block | `A-Z`, `a-z`, `0-9` shift into a contiguous block; gaps are filled from an override table |
//! | Lookup table | listed characters are replaced; the rest pass through |
//! | Combining overlay | a mark is appended after every character except whitespace and existing marks |
//! | Passthrough | identity |
//!
//! Characters a style has no rule for are never dropped or replaced with a
//! placeholder; they come out as they went in.
//!
//! # Concurrency
//!
//! The built-in registry is built once, on first use, and is read-only
//! afterwards. Every operation is a pure function of its arguments, so
//! callers on any number of threads can transform text concurrently.

mod builtin;
mod catalog;
mod definition;
mod error;
mod mapper;
mod metrics;
mod pipeline;
mod registry;

pub use builtin::{
    BUILTIN_STYLES, CIRCLED_OVERRIDES, DOUBLE_STRUCK_OVERRIDES, FRAKTUR_OVERRIDES,
    ITALIC_OVERRIDES, SCRIPT_OVERRIDES,
};
pub use catalog::{list_styles, StyleSummary};
pub use definition::{
    ClassBase, CombiningOverlay, LookupTable, Mapping, MappingKind, OffsetBlock, StyleDefinition,
};
pub use error::{Result, StyleError};
pub use mapper::{overlay_applies, Mapped, MappedChars};
pub use metrics::{check_limits, LimitStatus, SocialLimit, TextMetrics, SOCIAL_LIMITS};
pub use pipeline::{apply, transform};
pub use registry::StyleRegistry;
