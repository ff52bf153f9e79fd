//! Accumulated knowledge about the answer.
//!
//! A [`Facts`] value is an immutable snapshot. Every builder consumes the
//! snapshot and returns a new one, or an error when the new fact contradicts
//! what is already known, so the filter only ever sees consistent input.

use crate::error::FeedbackError;
use crate::feedback::{CellState, RowFeedback};
use crate::word::{WORD_LENGTH, Word};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facts {
    absent: BTreeSet<char>,
    misplaced: BTreeMap<char, BTreeSet<usize>>,
    correct: BTreeMap<char, BTreeSet<usize>>,
}

fn checked_letter(letter: char) -> Result<char, FeedbackError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_lowercase())
    } else {
        Err(FeedbackError::InvalidLetter(letter))
    }
}

fn checked_position(position: usize) -> Result<usize, FeedbackError> {
    if position < WORD_LENGTH {
        Ok(position)
    } else {
        Err(FeedbackError::InvalidPosition(position))
    }
}

impl Facts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from the three raw collections, rejecting contradictions.
    pub fn from_parts<A, M, C>(absent: A, misplaced: M, correct: C) -> Result<Self, FeedbackError>
    where
        A: IntoIterator<Item = char>,
        M: IntoIterator<Item = (char, usize)>,
        C: IntoIterator<Item = (char, usize)>,
    {
        let mut facts = Self::new();
        for (letter, position) in correct {
            facts = facts.with_correct(letter, position)?;
        }
        for (letter, position) in misplaced {
            facts = facts.with_misplaced(letter, position)?;
        }
        for letter in absent {
            facts = facts.with_absent(letter)?;
        }
        Ok(facts)
    }

    pub fn with_absent(mut self, letter: char) -> Result<Self, FeedbackError> {
        let letter = checked_letter(letter)?;
        if self.is_known_present(letter) {
            return Err(FeedbackError::PresentButAbsent { letter });
        }
        self.absent.insert(letter);
        Ok(self)
    }

    pub fn with_misplaced(mut self, letter: char, position: usize) -> Result<Self, FeedbackError> {
        let letter = checked_letter(letter)?;
        let position = checked_position(position)?;
        if self.absent.contains(&letter) {
            return Err(FeedbackError::AbsentButPresent { letter });
        }
        if self
            .correct
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position))
        {
            return Err(FeedbackError::CorrectAndMisplaced { letter, position });
        }
        self.misplaced.entry(letter).or_default().insert(position);
        Ok(self)
    }

    pub fn with_correct(mut self, letter: char, position: usize) -> Result<Self, FeedbackError> {
        let letter = checked_letter(letter)?;
        let position = checked_position(position)?;
        if self.absent.contains(&letter) {
            return Err(FeedbackError::AbsentButPresent { letter });
        }
        if let Some(existing) = self.correct_letter_at(position)
            && existing != letter
        {
            return Err(FeedbackError::PositionTaken {
                position,
                existing,
                letter,
            });
        }
        if self
            .misplaced
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position))
        {
            return Err(FeedbackError::CorrectAndMisplaced { letter, position });
        }
        self.correct.entry(letter).or_default().insert(position);
        Ok(self)
    }

    /// Merge one submitted grid row into a new snapshot.
    ///
    /// A gray cell whose letter is marked green or yellow elsewhere in the row,
    /// or is already known to be in the word, only rules out that position.
    pub fn apply_row(&self, guess: &Word, states: &RowFeedback) -> Result<Self, FeedbackError> {
        let mut facts = self.clone();
        for (position, (letter, state)) in guess.letters().zip(states).enumerate() {
            facts = match state {
                CellState::Correct => facts.with_correct(letter, position)?,
                CellState::Misplaced => facts.with_misplaced(letter, position)?,
                CellState::Absent | CellState::Unmarked => facts,
            };
        }
        for (position, (letter, state)) in guess.letters().zip(states).enumerate() {
            if *state != CellState::Absent {
                continue;
            }
            facts = if facts.is_known_present(letter) {
                facts.with_misplaced(letter, position)?
            } else {
                facts.with_absent(letter)?
            };
        }
        Ok(facts)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.misplaced.is_empty() && self.correct.is_empty()
    }

    #[must_use]
    pub fn is_known_present(&self, letter: char) -> bool {
        self.correct.contains_key(&letter) || self.misplaced.contains_key(&letter)
    }

    #[must_use]
    pub fn correct_letter_at(&self, position: usize) -> Option<char> {
        self.correct
            .iter()
            .find(|(_, positions)| positions.contains(&position))
            .map(|(&letter, _)| letter)
    }

    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    pub fn misplaced(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.misplaced
    }

    pub fn correct(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::parse_row;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let facts = Facts::new();
        assert!(facts.is_empty());
        assert_eq!(facts, Facts::from_parts([], [], []).unwrap());
    }

    #[test]
    fn test_builders_normalise_letters() {
        let facts = Facts::new()
            .with_correct('O', 1)
            .unwrap()
            .with_absent('H')
            .unwrap();
        assert_eq!(facts.correct_letter_at(1), Some('o'));
        assert!(facts.absent().contains(&'h'));
    }

    #[test]
    fn test_builders_reject_bad_input() {
        assert_eq!(
            Facts::new().with_absent('1'),
            Err(FeedbackError::InvalidLetter('1'))
        );
        assert_eq!(
            Facts::new().with_correct('a', 5),
            Err(FeedbackError::InvalidPosition(5))
        );
        assert_eq!(
            Facts::new().with_misplaced('a', 9),
            Err(FeedbackError::InvalidPosition(9))
        );
    }

    #[test]
    fn test_absent_letter_cannot_become_present() {
        let facts = Facts::new().with_absent('h').unwrap();
        assert_eq!(
            facts.clone().with_correct('h', 0),
            Err(FeedbackError::AbsentButPresent { letter: 'h' })
        );
        assert_eq!(
            facts.with_misplaced('h', 0),
            Err(FeedbackError::AbsentButPresent { letter: 'h' })
        );
    }

    #[test]
    fn test_present_letter_cannot_become_absent() {
        let err = Facts::from_parts(['s'], [('s', 3)], []).unwrap_err();
        assert_eq!(err, FeedbackError::PresentButAbsent { letter: 's' });
    }

    #[test]
    fn test_position_conflicts_are_rejected() {
        let facts = Facts::new().with_correct('a', 2).unwrap();
        assert_eq!(
            facts.clone().with_correct('b', 2),
            Err(FeedbackError::PositionTaken {
                position: 2,
                existing: 'a',
                letter: 'b'
            })
        );
        assert_eq!(
            facts.clone().with_misplaced('a', 2),
            Err(FeedbackError::CorrectAndMisplaced {
                letter: 'a',
                position: 2
            })
        );
        // Same fact twice is fine.
        assert!(facts.with_correct('a', 2).is_ok());
    }

    #[test]
    fn test_apply_row_collects_all_three_kinds() {
        let facts = Facts::new()
            .apply_row(&word("crane"), &parse_row("XYGX-").unwrap())
            .unwrap();
        assert_eq!(facts.absent(), &BTreeSet::from(['c', 'n']));
        assert_eq!(facts.misplaced()[&'r'], BTreeSet::from([1]));
        assert_eq!(facts.correct()[&'a'], BTreeSet::from([2]));
        // Unmarked 'e' contributes nothing.
        assert!(!facts.absent().contains(&'e'));
        assert!(!facts.is_known_present('e'));
    }

    #[test]
    fn test_apply_row_gray_duplicate_only_excludes_position() {
        // E is green twice and gray once.
        let facts = Facts::new()
            .apply_row(&word("geese"), &parse_row("XXGXG").unwrap())
            .unwrap();
        assert!(!facts.absent().contains(&'e'));
        assert_eq!(facts.correct()[&'e'], BTreeSet::from([2, 4]));
        assert_eq!(facts.misplaced()[&'e'], BTreeSet::from([1]));
        assert_eq!(facts.absent(), &BTreeSet::from(['g', 's']));
    }

    #[test]
    fn test_apply_row_gray_for_letter_known_from_previous_row() {
        let first = Facts::new()
            .apply_row(&word("stare"), &parse_row("YXXXX").unwrap())
            .unwrap();
        let second = first
            .apply_row(&word("bossy"), &parse_row("XXGXX").unwrap())
            .unwrap();
        assert_eq!(second.correct()[&'s'], BTreeSet::from([2]));
        assert_eq!(second.misplaced()[&'s'], BTreeSet::from([0, 3]));
        assert!(!second.absent().contains(&'s'));
    }

    #[test]
    fn test_apply_row_rejects_contradiction_without_changing_snapshot() {
        let facts = Facts::new()
            .apply_row(&word("house"), &parse_row("XGXXX").unwrap())
            .unwrap();
        let before = facts.clone();
        let err = facts
            .apply_row(&word("hello"), &parse_row("G----").unwrap())
            .unwrap_err();
        assert_eq!(err, FeedbackError::AbsentButPresent { letter: 'h' });
        assert_eq!(facts, before);
    }
}
