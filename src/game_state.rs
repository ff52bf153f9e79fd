use crate::error::FeedbackError;
use crate::facts::Facts;
use crate::feedback::RowFeedback;
use crate::solver::{Suggestion, filter_candidates, suggest};
use crate::word::Word;
use log::{info, warn};

/// Rows in the guess grid.
pub const MAX_ROWS: usize = 5;

/// A submitted guess and how its cells were marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRow {
    pub guess: Word,
    pub states: RowFeedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Solved(Word),
    Exhausted,
    OutOfRows,
}

/// Everything one game needs: the vocabulary, what is known, and what is left.
#[derive(Clone, Debug)]
pub struct Session {
    vocabulary: Vec<Word>,
    candidates: Vec<Word>,
    facts: Facts,
    rows: Vec<GridRow>,
}

impl Session {
    #[must_use]
    pub fn new(vocabulary: Vec<Word>) -> Self {
        Self {
            candidates: vocabulary.clone(),
            vocabulary,
            facts: Facts::new(),
            rows: Vec::with_capacity(MAX_ROWS),
        }
    }

    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn facts(&self) -> &Facts {
        &self.facts
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_ROWS
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.candidates.as_slice() {
            [] => SessionStatus::Exhausted,
            [only] => SessionStatus::Solved(*only),
            _ if self.is_full() => SessionStatus::OutOfRows,
            _ => SessionStatus::InProgress,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != SessionStatus::InProgress
    }

    #[must_use]
    pub fn suggestion(&self, alternates: usize) -> Option<Suggestion> {
        suggest(&self.candidates, alternates)
    }

    /// Record one row of feedback and narrow the candidates.
    ///
    /// The previous candidate list is filtered with the full accumulated facts.
    /// On error nothing changes.
    pub fn submit_row(
        &mut self,
        guess: Word,
        states: RowFeedback,
    ) -> Result<&[Word], FeedbackError> {
        if self.is_full() {
            return Err(FeedbackError::GridFull(MAX_ROWS));
        }
        let facts = self.facts.apply_row(&guess, &states)?;
        let candidates = filter_candidates(&self.candidates, &facts);
        info!(
            "Row {} ({guess}): {} -> {} candidates",
            self.rows.len() + 1,
            self.candidates.len(),
            candidates.len()
        );
        self.facts = facts;
        self.candidates = candidates;
        self.rows.push(GridRow { guess, states });
        Ok(&self.candidates)
    }

    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.vocabulary);
        self.facts = Facts::new();
        self.rows.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(Word),
    NewGame,
    Exit,
}

/// Front end the game loop talks to.
pub trait GameInterface {
    fn display_session_start(&mut self, suggestion: Option<&Suggestion>);
    /// `None` means nothing usable was entered, ask again.
    fn read_guess(&mut self) -> Option<UserAction>;
    /// `None` means the guess is abandoned.
    fn read_feedback(&mut self, guess: &Word) -> Option<RowFeedback>;
    fn display_rejected_feedback(&mut self, error: &FeedbackError);
    fn display_candidates(&mut self, candidates: &[Word]);
    fn display_suggestion(&mut self, suggestion: &Suggestion);
    fn display_no_candidates_message(&mut self);
    fn display_solution_found(&mut self, solution: &Word);
    fn display_out_of_rows_message(&mut self);
    fn display_game_over_hint(&mut self);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
    /// How many alternates to show next to the best guess.
    fn alternates(&self) -> usize;
}

/// Run games until the user exits, returning the last session.
pub fn game_loop<I: GameInterface + ?Sized>(wordbank: &[Word], interface: &mut I) -> Session {
    let mut session = Session::new(wordbank.to_vec());
    interface.display_session_start(session.suggestion(interface.alternates()).as_ref());

    loop {
        let guess = match interface.read_guess() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::NewGame) => {
                session.reset();
                info!("New game with {} words", session.candidates().len());
                interface.display_new_game_message(session.candidates().len());
                interface
                    .display_session_start(session.suggestion(interface.alternates()).as_ref());
                continue;
            }
            Some(UserAction::Guess(guess)) if session.is_over() => {
                info!("Ignoring guess '{guess}', game is over");
                interface.display_game_over_hint();
                continue;
            }
            Some(UserAction::Guess(guess)) => guess,
            None => continue,
        };

        let Some(states) = interface.read_feedback(&guess) else {
            continue;
        };

        if let Err(e) = session.submit_row(guess, states) {
            warn!("Rejected feedback for '{guess}': {e}");
            interface.display_rejected_feedback(&e);
            continue;
        }
        interface.display_candidates(session.candidates());

        match session.status() {
            SessionStatus::Exhausted => interface.display_no_candidates_message(),
            SessionStatus::Solved(solution) => interface.display_solution_found(&solution),
            SessionStatus::OutOfRows => interface.display_out_of_rows_message(),
            SessionStatus::InProgress => {
                if let Some(suggestion) = session.suggestion(interface.alternates()) {
                    interface.display_suggestion(&suggestion);
                }
            }
        }
    }

    session
}
