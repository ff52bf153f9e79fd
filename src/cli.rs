use crate::debug_log;
use crate::error::FeedbackError;
use crate::feedback::{RowFeedback, parse_row};
use crate::game_state::{GameInterface, MAX_ROWS, UserAction};
use crate::solver::{DEFAULT_ALTERNATES, Suggestion};
use crate::word::Word;
use clap::Parser;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Wordle helper: narrows a word list from the feedback you mark.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word bank file: CSV with a `word` column, or one word per line
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Use the terminal grid interface instead of line prompts
    #[arg(long)]
    pub tui: bool,

    /// Number of alternates shown next to the suggested guess
    #[arg(short = 'a', long, default_value_t = DEFAULT_ALTERNATES)]
    pub alternates: usize,

    /// Write logs to this file (the TUI logs to a file by default)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub enum GuessInput {
    Valid(Word),
    Invalid(String),
    Exit,
    NewGame,
}

/// Interpret one line typed at the guess prompt.
#[must_use]
pub fn parse_guess(input: &str) -> GuessInput {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "exit" | "quit" => GuessInput::Exit,
        "next" | "new" => GuessInput::NewGame,
        _ => match Word::parse(input) {
            Ok(word) => GuessInput::Valid(word),
            Err(e) => GuessInput::Invalid(e.to_string()),
        },
    }
}

/// Line based front end over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    alternates: usize,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            alternates: DEFAULT_ALTERNATES,
        }
    }

    #[must_use]
    pub fn with_alternates(mut self, alternates: usize) -> Self {
        self.alternates = alternates;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("Failed to write to output: {}", e);
        }
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_session_start(&mut self, suggestion: Option<&Suggestion>) {
        match suggestion {
            Some(suggestion) => {
                self.say(format_args!("Loaded {} words.", suggestion.remaining));
                self.say(format_args!("Try \"{}\"", suggestion.best));
            }
            None => self.say("The word bank is empty."),
        }
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        self.say(
            "\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to start a new game):",
        );
        let Some(input) = self.read_line() else {
            return Some(UserAction::Exit);
        };
        match parse_guess(&input) {
            GuessInput::Valid(word) => Some(UserAction::Guess(word)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid(reason) => {
                self.say(format_args!("Invalid guess: {reason}. Please enter 5 letters."));
                None
            }
        }
    }

    fn read_feedback(&mut self, guess: &Word) -> Option<RowFeedback> {
        self.say(format_args!(
            "Enter feedback for {} (G=green, Y=yellow, X=gray, -=unmarked, e.g. GYXX-):",
            guess.as_str().to_ascii_uppercase()
        ));
        let input = self.read_line()?;
        let feedback = parse_row(input.trim());
        if feedback.is_none() {
            self.say("Invalid feedback. Please enter 5 characters using G, Y, X or -.");
        }
        feedback
    }

    fn display_rejected_feedback(&mut self, error: &FeedbackError) {
        self.say(format_args!("Feedback rejected: {error}."));
    }

    fn display_candidates(&mut self, candidates: &[Word]) {
        if let Some(best) = candidates.first() {
            self.say(format_args!(
                "Returned {} possible words with \"{best}\" being the most likely.",
                candidates.len()
            ));
        }
    }

    fn display_suggestion(&mut self, suggestion: &Suggestion) {
        self.say(format_args!("Try \"{}\"", suggestion.best));
        if !suggestion.alternates.is_empty() {
            let alternates: Vec<&str> = suggestion.alternates.iter().map(Word::as_str).collect();
            self.say(format_args!("Alternates: {}", alternates.join(", ")));
        }
    }

    fn display_no_candidates_message(&mut self) {
        self.say("No words left. Check your feedback, or type 'next' to start over.");
    }

    fn display_solution_found(&mut self, solution: &Word) {
        self.say(format_args!("Solution found: {solution}"));
    }

    fn display_out_of_rows_message(&mut self) {
        self.say(format_args!(
            "All {MAX_ROWS} rows are used. Type 'next' to start over."
        ));
    }

    fn display_game_over_hint(&mut self) {
        self.say("This game is over. Type 'next' for a new game or 'exit' to quit.");
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.say(format_args!("New game started. Loaded {word_count} words."));
    }

    fn alternates(&self) -> usize {
        self.alternates
    }
}
