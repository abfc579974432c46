//! Character counts and per-platform length limits.
//!
//! Styled text is deceptive to count: `𝐁𝐨𝐥𝐝` is four code points but eight
//! UTF-16 units, and strikethrough doubles the code point count. Platforms
//! that cap post length count UTF-16 units, so [`check_limits`] does too.
//!
//! ```rust
//! use unistyle::{check_limits, TextMetrics};
//!
//! let metrics = TextMetrics::measure("𝐁𝐨𝐥𝐝");
//! assert_eq!(metrics.code_points, 4);
//! assert_eq!(metrics.utf16_units, 8);
//!
//! let report = check_limits("𝐁𝐨𝐥𝐝");
//! assert!(report.iter().all(|status| !status.exceeded));
//! ```

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// A named length cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLimit {
    pub name: &'static str,
    pub limit: usize,
}

/// Length caps checked by [`check_limits`], in report order.
pub const SOCIAL_LIMITS: [SocialLimit; 3] = [
    SocialLimit {
        name: "FB Post",
        limit: 250,
    },
    SocialLimit {
        name: "FB Ad",
        limit: 125,
    },
    SocialLimit {
        name: "Insta",
        limit: 2200,
    },
];

/// Size of a piece of text under the units callers usually care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextMetrics {
    pub code_points: usize,
    pub utf16_units: usize,
    /// Terminal columns, per `unicode-width`.
    pub display_width: usize,
}

impl TextMetrics {
    pub fn measure(text: &str) -> Self {
        Self {
            code_points: text.chars().count(),
            utf16_units: text.encode_utf16().count(),
            display_width: text.width(),
        }
    }
}

/// One line of a limits report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitStatus {
    pub name: &'static str,
    pub limit: usize,
    pub count: usize,
    pub exceeded: bool,
}

/// Checks `text` against every entry of [`SOCIAL_LIMITS`].
pub fn check_limits(text: &str) -> Vec<LimitStatus> {
    let count = text.encode_utf16().count();
    SOCIAL_LIMITS
        .iter()
        .map(|platform| LimitStatus {
            name: platform.name,
            limit: platform.limit,
            count,
            exceeded: count > platform.limit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_ascii() {
        let metrics = TextMetrics::measure("hello");
        assert_eq!(
            metrics,
            TextMetrics {
                code_points: 5,
                utf16_units: 5,
                display_width: 5
            }
        );
    }

    #[test]
    fn test_measure_empty() {
        assert_eq!(TextMetrics::measure(""), TextMetrics::default());
    }

    #[test]
    fn test_measure_combining_marks_have_no_width() {
        let metrics = TextMetrics::measure("a\u{0336}b\u{0336}");
        assert_eq!(metrics.code_points, 4);
        assert_eq!(metrics.utf16_units, 4);
        assert_eq!(metrics.display_width, 2);
    }

    #[test]
    fn test_measure_fullwidth_is_double_width() {
        let metrics = TextMetrics::measure("Ａｂ");
        assert_eq!(metrics.code_points, 2);
        assert_eq!(metrics.display_width, 4);
    }

    #[test]
    fn test_limits_order_and_boundary() {
        let at_limit = "a".repeat(125);
        let report = check_limits(&at_limit);
        let names: Vec<_> = report.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["FB Post", "FB Ad", "Insta"]);
        assert!(report.iter().all(|s| !s.exceeded));

        let over = "a".repeat(126);
        let report = check_limits(&over);
        assert!(!report[0].exceeded);
        assert!(report[1].exceeded);
        assert!(!report[2].exceeded);
    }

    #[test]
    fn test_limits_count_utf16_units() {
        // 63 supplementary letters = 126 UTF-16 units.
        let styled: String = std::iter::repeat('\u{1D400}').take(63).collect();
        let report = check_limits(&styled);
        assert_eq!(report[1].count, 126);
        assert!(report[1].exceeded);
    }
}
