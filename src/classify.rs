//! Character classification for word splitting.
//!
//! Words are maximal runs of letters; everything else — whitespace,
//! punctuation, digits, controls — acts as a separator. This is stricter
//! than `char::is_whitespace` on purpose: hyphens and apostrophes break
//! words too.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Separator,
}

/// Immutable classification table, built once per run.
///
/// ASCII is resolved through a precomputed 128-entry table; the rest of the
/// code point range goes through `char::is_alphabetic` on demand. Unassigned
/// code points classify as separators.
#[derive(Debug)]
pub struct Classifier {
    ascii: [CharClass; 128],
}

impl Classifier {
    pub fn new() -> Self {
        let mut ascii = [CharClass::Separator; 128];
        for (i, slot) in ascii.iter_mut().enumerate() {
            if (i as u8 as char).is_ascii_alphabetic() {
                *slot = CharClass::Letter;
            }
        }
        Self { ascii }
    }

    pub fn class_of(&self, ch: char) -> CharClass {
        let code = u32::from(ch) as usize;
        if code < self.ascii.len() {
            self.ascii[code]
        } else if ch.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Separator
        }
    }

    pub fn is_separator(&self, ch: char) -> bool {
        self.class_of(ch) == CharClass::Separator
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
