//! The built-in style catalog.
//!
//! Pure data: every entry is a `const`-constructed [`StyleDefinition`] and the
//! override tables list, letter by letter, where a mathematical alphabet
//! reuses an older Letterlike Symbols code point instead of its own slot.

use crate::definition::{CombiningOverlay, LookupTable, Mapping, OffsetBlock, StyleDefinition};

/// Italic small h is the Planck constant.
pub static ITALIC_OVERRIDES: [(char, char); 1] = [
    ('h', '\u{210E}'), // PLANCK CONSTANT
];

/// Script capitals and three small letters predate the math block.
pub static SCRIPT_OVERRIDES: [(char, char); 11] = [
    ('B', '\u{212C}'), // SCRIPT CAPITAL B
    ('E', '\u{2130}'), // SCRIPT CAPITAL E
    ('F', '\u{2131}'), // SCRIPT CAPITAL F
    ('H', '\u{210B}'), // SCRIPT CAPITAL H
    ('I', '\u{2110}'), // SCRIPT CAPITAL I
    ('L', '\u{2112}'), // SCRIPT CAPITAL L
    ('M', '\u{2133}'), // SCRIPT CAPITAL M
    ('R', '\u{211B}'), // SCRIPT CAPITAL R
    ('e', '\u{212F}'), // SCRIPT SMALL E
    ('g', '\u{210A}'), // SCRIPT SMALL G
    ('o', '\u{2134}'), // SCRIPT SMALL O
];

/// Black-letter capitals from Letterlike Symbols.
pub static FRAKTUR_OVERRIDES: [(char, char); 5] = [
    ('C', '\u{212D}'), // BLACK-LETTER CAPITAL C
    ('H', '\u{210C}'), // BLACK-LETTER CAPITAL H
    ('I', '\u{2111}'), // BLACK-LETTER CAPITAL I
    ('R', '\u{211C}'), // BLACK-LETTER CAPITAL R
    ('Z', '\u{2128}'), // BLACK-LETTER CAPITAL Z
];

/// The number-set capitals: complex, quaternion, naturals, primes, rationals, reals, integers.
pub static DOUBLE_STRUCK_OVERRIDES: [(char, char); 7] = [
    ('C', '\u{2102}'), // DOUBLE-STRUCK CAPITAL C
    ('H', '\u{210D}'), // DOUBLE-STRUCK CAPITAL H
    ('N', '\u{2115}'), // DOUBLE-STRUCK CAPITAL N
    ('P', '\u{2119}'), // DOUBLE-STRUCK CAPITAL P
    ('Q', '\u{211A}'), // DOUBLE-STRUCK CAPITAL Q
    ('R', '\u{211D}'), // DOUBLE-STRUCK CAPITAL R
    ('Z', '\u{2124}'), // DOUBLE-STRUCK CAPITAL Z
];

/// Circled 1-9 are contiguous from U+2460; circled zero was encoded later, elsewhere.
pub static CIRCLED_OVERRIDES: [(char, char); 1] = [
    ('0', '\u{24EA}'), // CIRCLED DIGIT ZERO
];

static SMALL_CAPS: [(char, &str); 25] = [
    ('a', "ᴀ"),
    ('b', "ʙ"),
    ('c', "ᴄ"),
    ('d', "ᴅ"),
    ('e', "ᴇ"),
    ('f', "ꜰ"),
    ('g', "ɢ"),
    ('h', "ʜ"),
    ('i', "ɪ"),
    ('j', "ᴊ"),
    ('k', "ᴋ"),
    ('l', "ʟ"),
    ('m', "ᴍ"),
    ('n', "ɴ"),
    ('o', "ᴏ"),
    ('p', "ᴘ"),
    ('q', "ꞯ"),
    ('r', "ʀ"),
    ('s', "ꜱ"),
    ('t', "ᴛ"),
    ('u', "ᴜ"),
    ('v', "ᴠ"),
    ('w', "ᴡ"),
    ('y', "ʏ"),
    ('z', "ᴢ"),
];

static SUPERSCRIPT: [(char, &str); 41] = [
    ('(', "⁽"),
    (')', "⁾"),
    ('+', "⁺"),
    ('-', "⁻"),
    ('0', "⁰"),
    ('1', "¹"),
    ('2', "²"),
    ('3', "³"),
    ('4', "⁴"),
    ('5', "⁵"),
    ('6', "⁶"),
    ('7', "⁷"),
    ('8', "⁸"),
    ('9', "⁹"),
    ('=', "⁼"),
    ('a', "ᵃ"),
    ('b', "ᵇ"),
    ('c', "ᶜ"),
    ('d', "ᵈ"),
    ('e', "ᵉ"),
    ('f', "ᶠ"),
    ('g', "ᵍ"),
    ('h', "ʰ"),
    ('i', "ⁱ"),
    ('j', "ʲ"),
    ('k', "ᵏ"),
    ('l', "ˡ"),
    ('m', "ᵐ"),
    ('n', "ⁿ"),
    ('o', "ᵒ"),
    ('p', "ᵖ"),
    ('q', "𐞥"),
    ('r', "ʳ"),
    ('s', "ˢ"),
    ('t', "ᵗ"),
    ('u', "ᵘ"),
    ('v', "ᵛ"),
    ('w', "ʷ"),
    ('x', "ˣ"),
    ('y', "ʸ"),
    ('z', "ᶻ"),
];

/// Every built-in style, in display order.
pub static BUILTIN_STYLES: [StyleDefinition; 22] = [
    StyleDefinition::new(
        "bold",
        "Bold",
        "𝐁𝐨𝐥𝐝",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D400, 0x1D41A).with_digits(0x1D7CE)),
    ),
    StyleDefinition::new(
        "italic",
        "Italic",
        "𝐼𝑡𝑎𝑙𝑖𝑐",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D434, 0x1D44E).with_overrides(&ITALIC_OVERRIDES)),
    ),
    StyleDefinition::new(
        "bold-italic",
        "Bold Italic",
        "𝑩𝒐𝒍𝒅 𝑰𝒕𝒂𝒍𝒊𝒄",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D468, 0x1D482).with_digits(0x1D7CE)),
    ),
    StyleDefinition::new(
        "script",
        "Script",
        "𝒮𝒸𝓇𝒾𝓅𝓉",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D49C, 0x1D4B6).with_overrides(&SCRIPT_OVERRIDES)),
    ),
    StyleDefinition::new(
        "bold-script",
        "Bold Script",
        "𝓑𝓸𝓵𝓭 𝓢𝓬𝓻𝓲𝓹𝓽",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D4D0, 0x1D4EA).with_digits(0x1D7CE)),
    ),
    StyleDefinition::new(
        "fraktur",
        "Fraktur",
        "𝔉𝔯𝔞𝔨𝔱𝔲𝔯",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D504, 0x1D51E).with_overrides(&FRAKTUR_OVERRIDES)),
    ),
    StyleDefinition::new(
        "bold-fraktur",
        "Bold Fraktur",
        "𝕭𝖔𝖑𝖉 𝕱𝖗𝖆𝖐𝖙𝖚𝖗",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D56C, 0x1D586).with_digits(0x1D7CE)),
    ),
    StyleDefinition::new(
        "double-struck",
        "Double-Struck",
        "𝔻𝕠𝕦𝕓𝕝𝕖-𝕊𝕥𝕣𝕦𝕔𝕜",
        Mapping::OffsetBlock(
            OffsetBlock::new(0x1D538, 0x1D552)
                .with_digits(0x1D7D8)
                .with_overrides(&DOUBLE_STRUCK_OVERRIDES),
        ),
    ),
    StyleDefinition::new(
        "sans",
        "Sans",
        "𝖲𝖺𝗇𝗌",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D5A0, 0x1D5BA).with_digits(0x1D7E2)),
    ),
    StyleDefinition::new(
        "sans-bold",
        "Sans Bold",
        "𝗦𝗮𝗻𝘀 𝗕𝗼𝗹𝗱",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D5D4, 0x1D5EE).with_digits(0x1D7EC)),
    ),
    StyleDefinition::new(
        "sans-italic",
        "Sans Italic",
        "𝘚𝘢𝘯𝘴 𝘐𝘵𝘢𝘭𝘪𝘤",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D608, 0x1D622).with_digits(0x1D7E2)),
    ),
    StyleDefinition::new(
        "sans-bold-italic",
        "Sans Bold Italic",
        "𝙎𝙖𝙣𝙨 𝘽𝙤𝙡𝙙 𝙄𝙩𝙖𝙡𝙞𝙘",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D63C, 0x1D656).with_digits(0x1D7EC)),
    ),
    StyleDefinition::new(
        "monospace",
        "Monospace",
        "𝙼𝚘𝚗𝚘𝚜𝚙𝚊𝚌𝚎",
        Mapping::OffsetBlock(OffsetBlock::new(0x1D670, 0x1D68A).with_digits(0x1D7F6)),
    ),
    StyleDefinition::new(
        "fullwidth",
        "Fullwidth",
        "Ｆｕｌｌｗｉｄｔｈ",
        Mapping::OffsetBlock(OffsetBlock::new(0xFF21, 0xFF41).with_digits(0xFF10)),
    ),
    StyleDefinition::new(
        "circled",
        "Circled",
        "Ⓒⓘⓡⓒⓛⓔⓓ",
        Mapping::OffsetBlock(
            OffsetBlock::new(0x24B6, 0x24D0)
                .with_digits(0x245F)
                .with_overrides(&CIRCLED_OVERRIDES),
        ),
    ),
    StyleDefinition::new(
        "small-caps",
        "Small Caps",
        "Sᴍᴀʟʟ Cᴀᴘꜱ",
        Mapping::LookupTable(LookupTable::new(&SMALL_CAPS)),
    ),
    StyleDefinition::new(
        "superscript",
        "Superscript",
        "Sᵘᵖᵉʳˢᶜʳⁱᵖᵗ",
        Mapping::LookupTable(LookupTable::new(&SUPERSCRIPT)),
    ),
    StyleDefinition::new(
        "strikethrough",
        "Strikethrough",
        "S\u{336}t\u{336}r\u{336}i\u{336}k\u{336}e\u{336}t\u{336}h\u{336}r\u{336}o\u{336}u\u{336}g\u{336}h\u{336}",
        Mapping::CombiningOverlay(CombiningOverlay::new('\u{0336}')),
    ),
    StyleDefinition::new(
        "underline",
        "Underline",
        "U\u{332}n\u{332}d\u{332}e\u{332}r\u{332}l\u{332}i\u{332}n\u{332}e\u{332}",
        Mapping::CombiningOverlay(CombiningOverlay::new('\u{0332}')),
    ),
    StyleDefinition::new(
        "double-underline",
        "Double Underline",
        "D\u{333}o\u{333}u\u{333}b\u{333}l\u{333}e\u{333} U\u{333}n\u{333}d\u{333}e\u{333}r\u{333}l\u{333}i\u{333}n\u{333}e\u{333}",
        Mapping::CombiningOverlay(CombiningOverlay::new('\u{0333}')),
    ),
    StyleDefinition::new(
        "slashed",
        "Slashed",
        "S\u{338}l\u{338}a\u{338}s\u{338}h\u{338}e\u{338}d\u{338}",
        Mapping::CombiningOverlay(CombiningOverlay::new('\u{0338}')),
    ),
    StyleDefinition::new("plain", "Plain", "Plain", Mapping::Passthrough),
];
