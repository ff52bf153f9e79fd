use crate::word::WORD_LENGTH;

/// State of one grid cell, as marked by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not marked yet, contributes nothing.
    #[default]
    Unmarked,
    /// Gray
    Absent,
    /// Yellow
    Misplaced,
    /// Green
    Correct,
}

/// Feedback for one submitted guess.
pub type RowFeedback = [CellState; WORD_LENGTH];

impl CellState {
    /// Next state in the white, gray, yellow, green cycle.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Unmarked => Self::Absent,
            Self::Absent => Self::Misplaced,
            Self::Misplaced => Self::Correct,
            Self::Correct => Self::Unmarked,
        }
    }

    /// Parse a feedback character: G (correct), Y (misplaced), X (absent), - (unmarked).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Misplaced),
            'X' => Some(Self::Absent),
            '-' => Some(Self::Unmarked),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => 'X',
            Self::Unmarked => '-',
        }
    }

    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced)
    }
}

/// Parse a whole row of feedback such as `GYXX-`.
#[must_use]
pub fn parse_row(input: &str) -> Option<RowFeedback> {
    let mut row = [CellState::Unmarked; WORD_LENGTH];
    let mut chars = input.chars();
    for cell in &mut row {
        *cell = CellState::from_char(chars.next()?)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(row)
}
