//! Unicode normalization and writing-system classification
//!
//! Text arrives from spreadsheet cells in whatever form the authoring tool
//! produced, so it is normalized to NFC before any measurement. Script
//! classification then decides which font candidate list applies.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Classification of a string's writing system for font-selection purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// No Devanagari code points present
    Latin,
    /// Only Devanagari code points present (among the detected ranges)
    Devanagari,
    /// Both Devanagari and Latin-range code points present
    Mixed,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Devanagari => "devanagari",
            Script::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize text to canonical composed form (NFC).
pub fn normalize_text(text: &str) -> String {
    text.nfc().collect()
}

/// Classify a string by the scripts present in it.
///
/// Mixed wins when both ranges appear; a string without any Devanagari code
/// point is Latin regardless of what else it contains. The "Latin" range is
/// U+0041 through U+007A inclusive, which also picks up the punctuation run
/// between 'Z' and 'a' ( [ \ ] ^ _ ` ). Kept as-is to match observed
/// classification behavior.
pub fn detect_script(text: &str) -> Script {
    let mut has_devanagari = false;
    let mut has_latin = false;

    for ch in text.chars() {
        if ('\u{0900}'..='\u{097F}').contains(&ch) {
            has_devanagari = true;
        }
        if ('\u{0041}'..='\u{007A}').contains(&ch) {
            has_latin = true;
        }
    }

    match (has_devanagari, has_latin) {
        (true, true) => Script::Mixed,
        (true, false) => Script::Devanagari,
        _ => Script::Latin,
    }
}
