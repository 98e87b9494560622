//! Named pattern tables for the analyzers.
//!
//! Every heuristic literal lives here so the tables can be tested and extended
//! without touching the scoring code.

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Job description fields
// ────────────────────────────────────────────────────────────────────────────

/// `Job Title: <rest of line>`. Whitespace after the colon may span a newline.
pub static JOB_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)job title:\s*([^\r\n]*)").unwrap());

/// `Location: <rest of line>`.
pub static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)location:\s*([^\r\n]*)").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Title variants
// ────────────────────────────────────────────────────────────────────────────

/// Qualifiers stripped from a title, first occurrence only, each producing one variant.
pub static TITLE_QUALIFIER_STRIPS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"digital\s*", r"\s*digital", r"senior\s*", r"\s*senior"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Role nouns that are swapped with each other in both directions.
pub const ROLE_SWAPS: &[(&str, &str)] = &[("specialist", "manager"), ("analyst", "specialist")];

// ────────────────────────────────────────────────────────────────────────────
// Section headers
// ────────────────────────────────────────────────────────────────────────────

/// A standard resume section and the header synonyms that count for it.
#[derive(Debug)]
pub struct SectionPattern {
    pub label: &'static str,
    pub regex: Regex,
}

const SECTION_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "Experience",
        &[r"work\s+experience", "experience", r"professional\s+experience"],
    ),
    (
        "Education",
        &["education", r"academic\s+background", "qualifications"],
    ),
    (
        "Skills",
        &["skills", "abilities", "proficiencies", r"technical\s+skills"],
    ),
    ("Contact", &["contact", r"contact\s+information"]),
    ("Summary", &["summary", "objective", "profile"]),
    (
        "Certifications",
        &["certifications", "licenses", "credentials"],
    ),
];

/// The six standard sections, each a line-anchored, case-insensitive, multi-line pattern.
pub static STANDARD_SECTIONS: Lazy<Vec<SectionPattern>> = Lazy::new(|| {
    SECTION_SYNONYMS
        .iter()
        .map(|(label, synonyms)| SectionPattern {
            label,
            regex: Regex::new(&format!("(?im)^(?:{})", synonyms.join("|"))).unwrap(),
        })
        .collect()
});

/// Non-standard header phrasing, matched as plain substrings of the lower-cased resume.
pub const CREATIVE_SECTION_PHRASES: &[&str] = &[
    "where i've worked",
    "my learning journey",
    "my abilities",
    "my professional journey",
    "my toolbox",
    "what i've done",
    "my background",
    "my studies",
];

// ────────────────────────────────────────────────────────────────────────────
// Location / eligibility
// ────────────────────────────────────────────────────────────────────────────

pub const ELIGIBILITY_PHRASES: &[&str] = &[
    "authorized to work",
    "us citizen",
    "green card",
    "work authorization",
    "visa sponsorship",
];

pub static ELIGIBILITY_RE: Lazy<Regex> = Lazy::new(|| {
    let alt: Vec<String> = ELIGIBILITY_PHRASES
        .iter()
        .map(|p| regex::escape(p))
        .collect();
    Regex::new(&format!("(?i){}", alt.join("|"))).unwrap()
});

// ────────────────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────────────────

/// Start of the experience content block. Not line-anchored.
pub static EXPERIENCE_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)work\s+experience|professional\s+experience|work\s+history|experience")
        .unwrap()
});

/// Any other standard header word; the experience block ends right before it.
pub static SECTION_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)education|skills|summary|contact|certifications").unwrap());

/// A bullet at the start of a line, or a blank line between paragraphs.
pub static CLEAR_STRUCTURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*[*\-•]|\n\n").unwrap());

pub const AMPERSAND_LIMIT: usize = 5;

/// Inclusive code point ranges treated as emoji or parser-hostile symbols.
pub const PROBLEMATIC_SYMBOL_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F1E0, 0x1F1FF), // regional indicators
    (0x2000, 0x206F),   // general punctuation
    (0x20A0, 0x20CF),   // currency symbols
    (0x2100, 0x214F),   // letterlike symbols
    (0x2190, 0x21FF),   // arrows
    (0x2200, 0x22FF),   // math operators
    (0x2300, 0x23FF),   // misc technical
    (0x2400, 0x243F),   // control pictures
    (0x2500, 0x257F),   // box drawing
    (0x2580, 0x259F),   // block elements
    (0x25A0, 0x25FF),   // geometric shapes
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
    (0x2B00, 0x2BFF),   // misc symbols and arrows
    (0x2E80, 0x2EFF),   // CJK radicals supplement
    (0x2F00, 0x2FDF),   // Kangxi radicals
    (0x3000, 0x303F),   // CJK symbols and punctuation
    (0x3200, 0x32FF),   // enclosed CJK letters
    (0x3300, 0x33FF),   // CJK compatibility
    (0xFE00, 0xFE0F),   // variation selectors
    (0xFE10, 0xFE1F),   // vertical forms
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFE50, 0xFE6F),   // small form variants
    (0xFF00, 0xFFEF),   // halfwidth and fullwidth forms
    (0x1D000, 0x1F6FF),
    (0x1F900, 0x1F9FF),
    (0x1FA00, 0x1FA6F),
    (0x1FA70, 0x1FAFF),
    (0x1F780, 0x1F7FF),
    (0x1F800, 0x1F8FF),
    (0x1FB00, 0x1FBFF),
    (0x1FC00, 0x1FCFF),
    (0x1FD00, 0x1FDFF),
    (0x1FE00, 0x1FEFF),
    (0x1FF00, 0x1FFFF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B73F),
    (0x2B740, 0x2B81F),
    (0x2B820, 0x2CEAF),
    (0x2CEB0, 0x2EBEF),
    (0x2F800, 0x2FA1F),
    (0xE0000, 0xE007F), // tags
    (0xE0100, 0xE01EF), // variation selectors supplement
];

pub fn is_problematic_symbol(c: char) -> bool {
    let cp = c as u32;
    PROBLEMATIC_SYMBOL_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}
