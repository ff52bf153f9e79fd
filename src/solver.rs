use crate::facts::Facts;
use crate::word::Word;

pub const DEFAULT_ALTERNATES: usize = 3;

/// Reduce `candidates` to the words consistent with every fact.
///
/// The input order (frequency rank) is kept and the input slice is never
/// modified. With no confirmed positions the positional stage keeps the
/// whole list.
#[must_use]
pub fn filter_candidates(candidates: &[Word], facts: &Facts) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| facts.correct().is_empty() || has_correct_letters(word, facts))
        .filter(|word| has_misplaced_letters(word, facts))
        .filter(|word| !has_absent_letters(word, facts))
        .copied()
        .collect()
}

fn has_correct_letters(word: &Word, facts: &Facts) -> bool {
    facts.correct().iter().all(|(&letter, positions)| {
        positions
            .iter()
            .all(|&position| word.letter(position) == letter)
    })
}

fn has_misplaced_letters(word: &Word, facts: &Facts) -> bool {
    facts.misplaced().iter().all(|(&letter, bad_positions)| {
        word.contains(letter)
            && bad_positions
                .iter()
                .all(|&position| word.letter(position) != letter)
    })
}

fn has_absent_letters(word: &Word, facts: &Facts) -> bool {
    facts.absent().iter().any(|&letter| word.contains(letter))
}

/// Next guess and runners-up, taken in rank order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub best: Word,
    pub alternates: Vec<Word>,
    pub remaining: usize,
}

#[must_use]
pub fn suggest(candidates: &[Word], alternates: usize) -> Option<Suggestion> {
    let (&best, rest) = candidates.split_first()?;
    Some(Suggestion {
        best,
        alternates: rest.iter().take(alternates).copied().collect(),
        remaining: candidates.len(),
    })
}
