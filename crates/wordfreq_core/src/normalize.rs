use std::collections::BTreeSet;
use std::sync::OnceLock;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const POLISH_LETTERS: &str = "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ";

/// Supplementary (non-ASCII) characters treated as letters.
///
/// ASCII letters are always letters; this set only extends them, so
/// classification never depends on the host locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    extra: BTreeSet<char>,
}

impl LetterSet {
    /// ASCII letters only.
    pub fn ascii() -> Self {
        Self {
            extra: BTreeSet::new(),
        }
    }

    /// Polish diacritics, upper and lower case.
    pub fn polish() -> Self {
        Self::from_chars(POLISH_LETTERS.chars())
    }

    /// Letters of Latin-1 Supplement and Latin Extended-A (U+00C0..=U+017F).
    pub fn extended_latin() -> Self {
        Self::from_chars(
            ('\u{C0}'..='\u{17F}').filter(|c| !matches!(c, '\u{D7}' | '\u{F7}')),
        )
    }

    /// Letter set extended with the non-ASCII members of `chars`.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            extra: chars.into_iter().filter(|c| !c.is_ascii()).collect(),
        }
    }

    /// True for ASCII letters and members of the supplementary set.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || self.extra.contains(&c)
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::extended_latin()
    }
}

/// Tokenizer and word cleaner parameterized by a [`LetterSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    letters: LetterSet,
}

impl Normalizer {
    /// Normalizer classifying letters with `letters`.
    pub fn new(letters: LetterSet) -> Self {
        Self { letters }
    }

    /// Letter set used for classification.
    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// True when `c` counts as a letter; letters never split tokens.
    pub fn classify_letter(&self, c: char) -> bool {
        self.letters.contains(c)
    }

    /// Split raw bytes into tokens.
    ///
    /// Valid UTF-8 is split on whitespace and punctuation that are not letters.
    /// Anything else falls back to ASCII-whitespace splitting, dropping tokens
    /// that do not decode. Never fails.
    pub fn tokenize(&self, bytes: &[u8]) -> Vec<String> {
        if validate_utf8(bytes) {
            // The validator only checks byte shapes, so overlong forms and
            // surrogates still reach the fallback.
            if let Ok(text) = std::str::from_utf8(bytes) {
                return self.tokenize_str(text);
            }
        }
        tokenize_fallback(bytes)
    }

    pub fn tokenize_str(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for c in text.chars() {
            if self.is_separator(c) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    /// Keep letters only, lowercased. Returns an empty string when nothing remains.
    pub fn clean_word(&self, token: &str) -> String {
        token
            .chars()
            .filter(|&c| self.classify_letter(c))
            .flat_map(char::to_lowercase)
            .filter(|&c| self.classify_letter(c))
            .collect()
    }

    fn is_separator(&self, c: char) -> bool {
        !self.classify_letter(c) && (c.is_whitespace() || is_punctuation(c))
    }
}

fn default_normalizer() -> &'static Normalizer {
    static DEFAULT: OnceLock<Normalizer> = OnceLock::new();
    DEFAULT.get_or_init(Normalizer::default)
}

/// [`Normalizer::classify_letter`] with the default letter set.
pub fn classify_letter(c: char) -> bool {
    default_normalizer().classify_letter(c)
}

/// [`Normalizer::tokenize`] with the default letter set.
pub fn tokenize(bytes: &[u8]) -> Vec<String> {
    default_normalizer().tokenize(bytes)
}

/// [`Normalizer::clean_word`] with the default letter set.
pub fn clean_word(token: &str) -> String {
    default_normalizer().clean_word(token)
}

pub fn detect_utf8_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&UTF8_BOM)
}

/// Byte-level UTF-8 shape check: lead bytes 0xxxxxxx, 110xxxxx, 1110xxxx,
/// 11110xxx, each followed by the matching number of 10xxxxxx bytes.
pub fn validate_utf8(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let width = match sequence_width(bytes[i]) {
            Some(width) => width,
            None => return false,
        };
        let Some(continuation) = bytes.get(i + 1..i + width) else {
            return false;
        };
        if !continuation.iter().all(|&b| is_continuation(b)) {
            return false;
        }
        i += width;
    }
    true
}

fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        b if b & 0x80 == 0x00 => Some(1),
        b if b & 0xE0 == 0xC0 => Some(2),
        b if b & 0xF0 == 0xE0 => Some(3),
        b if b & 0xF8 == 0xF0 => Some(4),
        _ => None,
    }
}

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Unicode General Category P* (Pc, Pd, Ps, Pe, Pi, Pf, Po).
fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}

fn tokenize_fallback(bytes: &[u8]) -> Vec<String> {
    bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|chunk| !chunk.is_empty())
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_width_follows_lead_byte_prefix() {
        assert_eq!(sequence_width(b'a'), Some(1));
        assert_eq!(sequence_width(0xC4), Some(2));
        assert_eq!(sequence_width(0xE2), Some(3));
        assert_eq!(sequence_width(0xF0), Some(4));
        assert_eq!(sequence_width(0x80), None);
        assert_eq!(sequence_width(0xF8), None);
    }

    #[test]
    fn punctuation_covers_typographic_quotes_and_dashes() {
        for c in ['„', '”', '—', '…', '«', '»', '¿', '、'] {
            assert!(is_punctuation(c), "{c:?}");
        }
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation('ż'));
    }

    #[test]
    fn punctuation_follows_general_category() {
        let fullwidth = ['\u{FF01}', '\u{FF0C}', '\u{FF0F}'];
        let arabic_armenian_devanagari = ['\u{060C}', '\u{061B}', '\u{055D}', '\u{0964}'];
        for c in fullwidth.into_iter().chain(arabic_armenian_devanagari) {
            assert!(is_punctuation(c), "{c:?}");
        }
        // Math symbols (Sm) are not punctuation.
        for c in ['\u{2044}', '\u{2052}', '+', '<', '|'] {
            assert!(!is_punctuation(c), "{c:?}");
        }
    }

    #[test]
    fn fallback_drops_undecodable_tokens() {
        let tokens = tokenize_fallback(b"abc \xFF\xFE def\t\xC4");
        assert_eq!(tokens, vec!["abc".to_string(), "def".to_string()]);
    }
}
