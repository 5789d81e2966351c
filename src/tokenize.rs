//! Lazy word tokenizer over decoded text.

use crate::classify::Classifier;

/// Iterator over maximal runs of letter-class characters, in encounter
/// order. Single pass, borrows the input.
pub struct Tokens<'a> {
    rest: &'a str,
    classifier: &'a Classifier,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str, classifier: &'a Classifier) -> Self {
        Self { rest: input, classifier }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(|ch| !self.classifier.is_separator(ch))?;
        let word = &self.rest[start..];
        let end = word
            .find(|ch| self.classifier.is_separator(ch))
            .unwrap_or(word.len());
        self.rest = &word[end..];
        Some(&word[..end])
    }
}
