use crate::error::WordError;
use std::fmt;
use std::str::FromStr;

pub const WORD_LENGTH: usize = 5;

/// A five letter lowercase word.
///
/// Construction validates the length and alphabet, so every position
/// `0..WORD_LENGTH` is always addressable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn parse(input: &str) -> Result<Self, WordError> {
        let found = input.chars().count();
        if found != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                expected: WORD_LENGTH,
                found,
            });
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(input.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::InvalidLetter(c));
            }
            *slot = c.to_ascii_lowercase() as u8;
        }
        Ok(Self(letters))
    }

    /// Letter at `position`. Panics if `position >= WORD_LENGTH`.
    #[must_use]
    pub fn letter(&self, position: usize) -> char {
        char::from(self.0[position])
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| char::from(b))
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters().any(|c| c == letter)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.as_str())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
