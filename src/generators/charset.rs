// src/generators/charset.rs
use std::collections::HashMap;
use std::ops::Range;
use crate::models::GenerationRequest;
use super::{GeneratorError, Result};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
// All 32 printable ASCII punctuation characters
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Canonical order used when composing a charset.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Class whose fixed sequence contains `c`, regardless of any request.
    pub fn classify(c: char) -> Option<CharClass> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.characters().contains(c))
    }

    fn enabled_in(self, request: &GenerationRequest) -> bool {
        match self {
            CharClass::Uppercase => request.include_uppercase,
            CharClass::Lowercase => request.include_lowercase,
            CharClass::Digit => request.include_numbers,
            CharClass::Symbol => request.include_symbols,
        }
    }
}

/// Working alphabet for one request: enabled classes concatenated in
/// canonical order, with the index span of each class recorded.
#[derive(Debug, Clone)]
pub struct Charset {
    chars: Vec<char>,
    spans: Vec<(CharClass, Range<usize>)>,
    positions: HashMap<char, usize>,
}

impl Charset {
    pub fn build(request: &GenerationRequest) -> Result<Self> {
        let mut chars = Vec::new();
        let mut spans = Vec::with_capacity(CharClass::ALL.len());

        for class in CharClass::ALL {
            if !class.enabled_in(request) {
                continue;
            }
            let start = chars.len();
            chars.extend(class.characters().chars());
            spans.push((class, start..chars.len()));
        }

        if chars.is_empty() {
            return Err(GeneratorError::InvalidRequest(
                "no character class selected".to_string(),
            ));
        }

        let positions = chars.iter().enumerate().map(|(i, c)| (*c, i)).collect();

        Ok(Self { chars, spans, positions })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Enabled classes in canonical order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        self.spans.iter().map(|(class, _)| *class)
    }

    /// Characters of one enabled class, empty if the class is disabled.
    pub fn class_chars(&self, class: CharClass) -> &[char] {
        self.spans
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, span)| &self.chars[span.clone()])
            .unwrap_or(&[])
    }

    /// Class owning position `index`, `None` past the end.
    pub fn class_at(&self, index: usize) -> Option<CharClass> {
        self.spans
            .iter()
            .find(|(_, span)| span.contains(&index))
            .map(|(class, _)| *class)
    }

    /// Class of `c` if it belongs to this charset.
    pub fn class_of(&self, c: char) -> Option<CharClass> {
        self.positions.get(&c).and_then(|&index| self.class_at(index))
    }

    pub fn contains(&self, c: char) -> bool {
        self.class_of(c).is_some()
    }
}
