use std::io;

/// A word that can't be used as a guess or candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("invalid word length: expected {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// Feedback that can't be merged into the known facts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("position {0} is outside the word")]
    InvalidPosition(usize),
    #[error("'{letter}' was already marked absent, it can't be in the word")]
    AbsentButPresent { letter: char },
    #[error("'{letter}' is already known to be in the word, it can't be absent")]
    PresentButAbsent { letter: char },
    #[error("position {position} is already '{existing}', it can't also be '{letter}'")]
    PositionTaken {
        position: usize,
        existing: char,
        letter: char,
    },
    #[error("'{letter}' can't be both correct and misplaced at position {position}")]
    CorrectAndMisplaced { letter: char, position: usize },
    #[error("all {0} rows of the grid are used")]
    GridFull(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum WordbankError {
    #[error("failed to read word bank: {0}")]
    Io(#[from] io::Error),
    #[error("malformed word bank: {0}")]
    Csv(#[from] csv::Error),
    #[error("word bank header has no 'word' column")]
    MissingWordColumn,
    #[error("word bank contains no valid words")]
    Empty,
}
