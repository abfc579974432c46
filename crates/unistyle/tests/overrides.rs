//! Exhaustive checks of offset-block styles, gaps included.

use unistyle::{transform, ClassBase, Mapping, StyleRegistry};

// ============================================================================
// Documented gaps, written out independently of the catalog data
// ============================================================================

const EXPECTED_GAPS: &[(&str, &[(char, char)])] = &[
    ("italic", &[('h', 'ℎ')]),
    (
        "script",
        &[
            ('B', 'ℬ'),
            ('E', 'ℰ'),
            ('F', 'ℱ'),
            ('H', 'ℋ'),
            ('I', 'ℐ'),
            ('L', 'ℒ'),
            ('M', 'ℳ'),
            ('R', 'ℛ'),
            ('e', 'ℯ'),
            ('g', 'ℊ'),
            ('o', 'ℴ'),
        ],
    ),
    (
        "fraktur",
        &[('C', 'ℭ'), ('H', 'ℌ'), ('I', 'ℑ'), ('R', 'ℜ'), ('Z', 'ℨ')],
    ),
    (
        "double-struck",
        &[
            ('C', 'ℂ'),
            ('H', 'ℍ'),
            ('N', 'ℕ'),
            ('P', 'ℙ'),
            ('Q', 'ℚ'),
            ('R', 'ℝ'),
            ('Z', 'ℤ'),
        ],
    ),
    ("circled", &[('0', '⓪')]),
];

fn ascii_alphanumerics() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('a'..='z').chain('0'..='9')
}

fn formula(base: ClassBase, start: char, c: char) -> char {
    match base {
        ClassBase::Offset(base) => char::from_u32(base + (c as u32 - start as u32)).unwrap(),
        ClassBase::Identity => c,
    }
}

#[test]
fn every_documented_gap_returns_the_letterlike_symbol() {
    for (id, gaps) in EXPECTED_GAPS {
        for &(input, expected) in gaps.iter() {
            let output = transform(&input.to_string(), id).unwrap();
            assert_eq!(
                output,
                expected.to_string(),
                "style {} letter {:?}",
                id,
                input
            );
        }
    }
}

#[test]
fn catalog_overrides_match_the_documented_gaps_exactly() {
    let registry = StyleRegistry::global();
    for style in registry.list() {
        let Mapping::OffsetBlock(block) = style.mapping else {
            continue;
        };
        let expected = EXPECTED_GAPS
            .iter()
            .find(|(id, _)| *id == style.id)
            .map(|(_, gaps)| *gaps)
            .unwrap_or(&[]);

        let mut actual = block.overrides.to_vec();
        let mut expected = expected.to_vec();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected, "override set of {}", style.id);
    }
}

#[test]
fn gaps_differ_from_the_arithmetic_slot() {
    let registry = StyleRegistry::global();
    for (id, gaps) in EXPECTED_GAPS {
        let Mapping::OffsetBlock(block) = registry.get(id).unwrap().mapping else {
            panic!("{} is not an offset block", id);
        };
        for &(input, expected) in gaps.iter() {
            let (base, start) = match input {
                'A'..='Z' => (block.upper, 'A'),
                'a'..='z' => (block.lower, 'a'),
                _ => (block.digit, '0'),
            };
            assert_ne!(formula(base, start, input), expected, "{} {:?}", id, input);
        }
    }
}

#[test]
fn non_gap_slots_follow_the_linear_formula() {
    let registry = StyleRegistry::global();
    for style in registry.list() {
        let Mapping::OffsetBlock(block) = style.mapping else {
            continue;
        };
        for c in ascii_alphanumerics() {
            if block.override_for(c).is_some() {
                continue;
            }
            let expected = match c {
                'A'..='Z' => formula(block.upper, 'A', c),
                'a'..='z' => formula(block.lower, 'a', c),
                _ => formula(block.digit, '0', c),
            };
            let output = transform(&c.to_string(), style.id).unwrap();
            let chars: Vec<char> = output.chars().collect();
            assert_eq!(chars, vec![expected], "style {} char {:?}", style.id, c);
        }
    }
}

#[test]
fn offset_styles_cover_the_full_ascii_alphanumeric_range() {
    let registry = StyleRegistry::global();
    for style in registry.list() {
        let Mapping::OffsetBlock(_) = style.mapping else {
            continue;
        };
        let input: String = ascii_alphanumerics().collect();
        let output = transform(&input, style.id).unwrap();
        assert_eq!(output.chars().count(), input.chars().count(), "{}", style.id);

        // Letters always change; they have no identity class in any built-in block.
        for (before, after) in input.chars().zip(output.chars()) {
            if before.is_ascii_alphabetic() {
                assert_ne!(before, after, "{} left {:?} unstyled", style.id, before);
            }
        }
    }
}

#[test]
fn spot_checks_against_known_glyphs() {
    assert_eq!(transform("Zz9", "bold").unwrap(), "𝐙𝐳𝟗");
    assert_eq!(transform("Zz9", "sans-bold").unwrap(), "𝗭𝘇𝟵");
    assert_eq!(transform("Zz9", "monospace").unwrap(), "𝚉𝚣𝟿");
    assert_eq!(transform("Zz9", "fullwidth").unwrap(), "Ｚｚ９");
    assert_eq!(transform("Zz9", "circled").unwrap(), "Ⓩⓩ⑨");
    assert_eq!(transform("Zz9", "double-struck").unwrap(), "ℤ𝕫𝟡");
    assert_eq!(transform("Zz9", "fraktur").unwrap(), "ℨ𝔷9");
    assert_eq!(transform("Hello", "script").unwrap(), "ℋℯ𝓁𝓁ℴ");
}
