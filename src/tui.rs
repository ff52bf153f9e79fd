//! Terminal grid interface.
//!
//! The board mirrors a 5×5 Wordle grid: type a guess, press ENTER, then mark
//! each cell by cycling its state (SPACE) or setting it directly (G/Y/X).
//! ENTER submits the row.
//!
//! # State Machine
//! - `EnteringGuess` → `MarkingFeedback` → back to `EnteringGuess`
//! - `GameOver` once the candidates are solved, exhausted, or the grid is full

use crate::error::FeedbackError;
use crate::feedback::{CellState, RowFeedback};
use crate::game_state::{GameInterface, MAX_ROWS, UserAction};
use crate::solver::Suggestion;
use crate::word::{WORD_LENGTH, Word};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_CANDIDATES_DISPLAY: usize = 10;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Background and foreground for a cell.
fn cell_colors(state: CellState) -> (Color, Color) {
    match state {
        CellState::Unmarked => (Color::DarkGray, Color::White),
        CellState::Absent => (Color::Gray, Color::Black),
        CellState::Misplaced => (Color::Yellow, Color::Black),
        CellState::Correct => (Color::Green, Color::Black),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    MarkingFeedback { cursor: usize },
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuessRow {
    guess: Word,
    states: RowFeedback,
}

#[derive(Debug, PartialEq, Eq)]
enum FeedbackInput {
    Pending,
    Submit(RowFeedback),
    Abandon,
}

/// What the screen shows, independent of the terminal.
#[derive(Debug)]
struct Board {
    rows: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    quit_requested: bool,
    candidates_display: Vec<Word>,
    candidate_count: usize,
    suggestion: Option<Suggestion>,
    message: String,
    error_message: String,
    status: String,
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

impl Board {
    fn new() -> Self {
        Self {
            rows: Vec::with_capacity(MAX_ROWS),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            quit_requested: false,
            candidates_display: Vec::new(),
            candidate_count: 0,
            suggestion: None,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn reset(&mut self) {
        let quit_requested = self.quit_requested;
        *self = Self::new();
        self.quit_requested = quit_requested;
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        if is_quit_key(&key) {
            info_log!("handle_guess_input() - quit key pressed");
            return Some(UserAction::Exit);
        }

        match key.code {
            KeyCode::Char(_) if has_modifier_keys(&key) => {
                debug_log!("handle_guess_input() - Ignoring key with modifier: {:?}", key);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.current_input.len() < WORD_LENGTH {
                    self.current_input.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => match Word::parse(&self.current_input) {
                Ok(guess) => {
                    self.current_input.clear();
                    info_log!("handle_guess_input() - guess entered: {}", guess);
                    return Some(UserAction::Guess(guess));
                }
                Err(_) => {
                    self.error_message = format!("Guess must be exactly {WORD_LENGTH} letters!");
                }
            },
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if is_quit_key(&key) {
            return Some(UserAction::Exit);
        }
        match key.code {
            KeyCode::Char('n' | 'N') if !has_modifier_keys(&key) => Some(UserAction::NewGame),
            _ => None,
        }
    }

    fn begin_marking(&mut self, guess: Word) {
        self.rows.push(GuessRow {
            guess,
            states: [CellState::Unmarked; WORD_LENGTH],
        });
        self.state = TuiState::MarkingFeedback { cursor: 0 };
        self.status = format!("Guess entered: {guess} - now mark each letter");
    }

    fn abandon_row(&mut self) {
        if matches!(self.state, TuiState::MarkingFeedback { .. }) {
            self.rows.pop();
        }
        self.state = TuiState::EnteringGuess;
    }

    fn handle_feedback_input(&mut self, key: KeyEvent) -> FeedbackInput {
        let TuiState::MarkingFeedback { cursor } = self.state else {
            return FeedbackInput::Abandon;
        };
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit_requested = true;
            self.abandon_row();
            return FeedbackInput::Abandon;
        }
        if key.code == KeyCode::Esc {
            info_log!("handle_feedback_input() - guess abandoned");
            self.abandon_row();
            return FeedbackInput::Abandon;
        }
        if has_modifier_keys(&key) {
            return FeedbackInput::Pending;
        }
        let Some(row) = self.rows.last_mut() else {
            self.state = TuiState::EnteringGuess;
            return FeedbackInput::Abandon;
        };

        let last = WORD_LENGTH - 1;
        let mut next_cursor = cursor;
        match key.code {
            KeyCode::Left => next_cursor = cursor.saturating_sub(1),
            KeyCode::Right | KeyCode::Tab => next_cursor = (cursor + 1).min(last),
            KeyCode::Char(' ') | KeyCode::Up => row.states[cursor] = row.states[cursor].cycle(),
            KeyCode::Backspace => {
                row.states[cursor] = CellState::Unmarked;
                next_cursor = cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                info_log!("handle_feedback_input() - row submitted: {:?}", row.states);
                return FeedbackInput::Submit(row.states);
            }
            KeyCode::Char(c) => match CellState::from_char(c) {
                Some(state) => {
                    row.states[cursor] = state;
                    next_cursor = (cursor + 1).min(last);
                }
                None => {
                    self.error_message = format!("'{c}' is not G, Y, X or -");
                }
            },
            _ => {
                debug_log!("handle_feedback_input() - Ignoring key: {:?}", key.code);
            }
        }
        self.state = TuiState::MarkingFeedback {
            cursor: next_cursor,
        };
        FeedbackInput::Pending
    }

    fn game_over(&mut self, message: String, status: &str) {
        self.state = TuiState::GameOver;
        self.message = message;
        self.status = status.to_string();
    }
}

fn render(f: &mut Frame, board: &Board) {
    let board_height = MAX_ROWS as u16 * ROW_SPACING + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(board_height), // Grid
            Constraint::Min(8),               // Info panel
            Constraint::Length(3),            // Status line
            Constraint::Length(3),            // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_grid(f, chunks[1], board);
    render_info(f, chunks[2], board);
    render_status(f, chunks[3], &board.status);
    render_instructions(f, chunks[4], board.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WORDLE HELPER")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn cell_spans(
    letters: [char; WORD_LENGTH],
    states: RowFeedback,
    cursor: Option<usize>,
) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (letter, state)) in letters.iter().zip(states).enumerate() {
        let (bg, fg) = cell_colors(state);
        let text = if cursor == Some(i) {
            format!("[{}]", letter.to_ascii_uppercase())
        } else {
            format!(" {} ", letter.to_ascii_uppercase())
        };
        spans.push(Span::styled(text, Style::default().fg(fg).bg(bg)));
        spans.push(Span::raw(" "));
    }
    spans
}

#[allow(clippy::cast_possible_truncation)]
fn render_grid(f: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default().title("Guesses").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let blank = [CellState::Unmarked; WORD_LENGTH];
    for row_index in 0..MAX_ROWS {
        let spans = if let Some(row) = board.rows.get(row_index) {
            let mut letters = [' '; WORD_LENGTH];
            for (slot, c) in letters.iter_mut().zip(row.guess.letters()) {
                *slot = c;
            }
            let cursor = match board.state {
                TuiState::MarkingFeedback { cursor } if row_index + 1 == board.rows.len() => {
                    Some(cursor)
                }
                _ => None,
            };
            cell_spans(letters, row.states, cursor)
        } else if row_index == board.rows.len() && board.state == TuiState::EnteringGuess {
            let mut letters = [' '; WORD_LENGTH];
            for (slot, c) in letters.iter_mut().zip(board.current_input.chars()) {
                *slot = c;
            }
            cell_spans(letters, blank, None)
        } else {
            cell_spans([' '; WORD_LENGTH], blank, None)
        };

        let y = inner.y + row_index as u16 * ROW_SPACING;
        if y >= inner.y + inner.height {
            break;
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            },
        );
    }
}

fn render_info(f: &mut Frame, area: Rect, board: &Board) {
    let mut lines = Vec::new();

    if let Some(suggestion) = &board.suggestion {
        lines.push(Line::from(vec![Span::styled(
            format!("Try \"{}\"", suggestion.best),
            SUCCESS_STYLE,
        )]));
        if !suggestion.alternates.is_empty() {
            let alternates: Vec<&str> = suggestion.alternates.iter().map(Word::as_str).collect();
            lines.push(Line::from(format!("  Alternates: {}", alternates.join(", "))));
        }
        lines.push(Line::from(""));
    }

    if !board.candidates_display.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            format!("Possible candidates ({}):", board.candidate_count),
            INFO_STYLE,
        )]));
        for word in &board.candidates_display {
            lines.push(Line::from(format!("  {word}")));
        }
        if board.candidate_count > board.candidates_display.len() {
            lines.push(Line::from(format!(
                "  ... and {} more",
                board.candidate_count - board.candidates_display.len()
            )));
        }
        lines.push(Line::from(""));
    }

    if !board.message.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            board.message.as_str(),
            MESSAGE_STYLE,
        )]));
    }
    if !board.error_message.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            board.error_message.as_str(),
            ERROR_STYLE,
        )]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => "Type your 5-letter guess | ENTER: Submit | ESC/Ctrl+Q: Quit",
        TuiState::MarkingFeedback { .. } => {
            "SPACE: Cycle color | G/Y/X: Set | ←/→: Move | ENTER: Submit row | ESC: Cancel guess"
        }
        TuiState::GameOver => "N: New Game | ESC/Ctrl+Q: Quit",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

/// Terminal front end.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
    alternates: usize,
}

impl TuiInterface {
    pub fn new(alternates: usize) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            board: Board::new(),
            alternates,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        self.terminal.draw(|f| render(f, board))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Wait briefly for the next key press.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Garbage from escape sequences when the terminal regains focus.
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || c.is_control())
                {
                    return Ok(None);
                }
                debug_log!("next_key() - {:?}", key);
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_session_start(&mut self, suggestion: Option<&Suggestion>) {
        self.board.suggestion = suggestion.cloned();
        self.board.message = match suggestion {
            Some(s) => format!("Loaded {} words.", s.remaining),
            None => "The word bank is empty.".to_string(),
        };
        self.board.status = "Ready - Enter your first 5-letter guess".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if self.board.quit_requested {
            return Some(UserAction::Exit);
        }
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    let action = if self.board.state == TuiState::GameOver {
                        self.board.handle_game_over_input(key)
                    } else {
                        self.board.handle_guess_input(key)
                    };
                    if let Some(UserAction::Guess(guess)) = action {
                        self.board.begin_marking(guess);
                    }
                    if action.is_some() {
                        return action;
                    }
                }
                Ok(None) => {}
                Err(_) => {
                    info_log!("read_guess() - Error reading input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn read_feedback(&mut self, guess: &Word) -> Option<RowFeedback> {
        self.board.status = format!("Mark the letters of {guess}");
        loop {
            if self.draw().is_err() {
                self.board.abandon_row();
                self.board.quit_requested = true;
                return None;
            }
            match self.next_key() {
                Ok(Some(key)) => match self.board.handle_feedback_input(key) {
                    FeedbackInput::Submit(states) => return Some(states),
                    FeedbackInput::Abandon => return None,
                    FeedbackInput::Pending => {}
                },
                Ok(None) => {}
                Err(_) => {
                    self.board.abandon_row();
                    self.board.quit_requested = true;
                    return None;
                }
            }
        }
    }

    fn display_rejected_feedback(&mut self, error: &FeedbackError) {
        self.board.abandon_row();
        self.board.error_message = format!("Feedback rejected: {error}");
        self.draw_or_log();
    }

    fn display_candidates(&mut self, candidates: &[Word]) {
        self.board.state = TuiState::EnteringGuess;
        self.board.candidate_count = candidates.len();
        self.board.candidates_display = candidates
            .iter()
            .take(MAX_CANDIDATES_DISPLAY)
            .copied()
            .collect();
        self.board.error_message.clear();
        self.board.status = format!("{} candidates left", candidates.len());
    }

    fn display_suggestion(&mut self, suggestion: &Suggestion) {
        self.board.suggestion = Some(suggestion.clone());
        self.board.message.clear();
        self.draw_or_log();
    }

    fn display_no_candidates_message(&mut self) {
        self.board.suggestion = None;
        self.board.game_over(
            "No words left. Check your feedback.".to_string(),
            "Game Over - no candidates",
        );
        self.draw_or_log();
    }

    fn display_solution_found(&mut self, solution: &Word) {
        self.board.suggestion = None;
        self.board.game_over(
            format!("✓ Solution found: {solution}"),
            &format!("Game Over - Solution: {solution}"),
        );
        self.draw_or_log();
    }

    fn display_out_of_rows_message(&mut self) {
        self.board.game_over(
            format!("All {MAX_ROWS} rows are used."),
            "Game Over - grid full",
        );
        self.draw_or_log();
    }

    fn display_game_over_hint(&mut self) {
        self.board.message = "This game is over. Press N for a new game.".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.board.status = "Exiting application...".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.board.reset();
        self.board.message = format!("New game started. Loaded {word_count} words.");
        self.board.status = "New game - Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn alternates(&self) -> usize {
        self.alternates
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(board: &mut Board, word: &str) -> Option<UserAction> {
        let mut action = None;
        for c in word.chars() {
            action = board.handle_guess_input(key(KeyCode::Char(c)));
        }
        action.or_else(|| board.handle_guess_input(key(KeyCode::Enter)))
    }

    fn marking_board(guess: &str) -> Board {
        let mut board = Board::new();
        let Some(UserAction::Guess(word)) = type_word(&mut board, guess) else {
            panic!("expected a guess");
        };
        board.begin_marking(word);
        board
    }

    #[test]
    fn test_typing_a_guess() {
        let mut board = Board::new();
        let action = type_word(&mut board, "CRANE");
        assert_eq!(action, Some(UserAction::Guess(Word::parse("crane").unwrap())));
        assert!(board.current_input.is_empty());
    }

    #[test]
    fn test_short_guess_is_rejected() {
        let mut board = Board::new();
        assert_eq!(type_word(&mut board, "cra"), None);
        assert_eq!(board.error_message, "Guess must be exactly 5 letters!");
        assert_eq!(board.current_input, "cra");
    }

    #[test]
    fn test_guess_input_limits_and_backspace() {
        let mut board = Board::new();
        for c in "cranes".chars() {
            board.handle_guess_input(key(KeyCode::Char(c)));
        }
        assert_eq!(board.current_input, "crane");
        board.handle_guess_input(key(KeyCode::Backspace));
        assert_eq!(board.current_input, "cran");
        board.handle_guess_input(key(KeyCode::Char('4')));
        assert_eq!(board.current_input, "cran");
        assert!(board.error_message.contains("'4' is not a letter"));
    }

    #[test]
    fn test_modifier_keys_are_ignored_while_typing() {
        let mut board = Board::new();
        board.handle_guess_input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT));
        assert!(board.current_input.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut board = Board::new();
        assert_eq!(board.handle_guess_input(key(KeyCode::Esc)), Some(UserAction::Exit));
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(board.handle_guess_input(ctrl_q), Some(UserAction::Exit));
    }

    #[test]
    fn test_space_cycles_cell_state() {
        let mut board = marking_board("crane");
        let mut seen = Vec::new();
        for _ in 0..4 {
            board.handle_feedback_input(key(KeyCode::Char(' ')));
            seen.push(board.rows[0].states[0]);
        }
        assert_eq!(
            seen,
            vec![
                CellState::Absent,
                CellState::Misplaced,
                CellState::Correct,
                CellState::Unmarked,
            ]
        );
        assert_eq!(board.state, TuiState::MarkingFeedback { cursor: 0 });
    }

    #[test]
    fn test_marking_and_submitting_a_row() {
        let mut board = marking_board("crane");
        for c in ['x', 'y', 'g'] {
            assert_eq!(
                board.handle_feedback_input(key(KeyCode::Char(c))),
                FeedbackInput::Pending
            );
        }
        board.handle_feedback_input(key(KeyCode::Right));
        board.handle_feedback_input(key(KeyCode::Char(' ')));
        assert_eq!(board.state, TuiState::MarkingFeedback { cursor: 4 });

        let result = board.handle_feedback_input(key(KeyCode::Enter));
        assert_eq!(
            result,
            FeedbackInput::Submit([
                CellState::Absent,
                CellState::Misplaced,
                CellState::Correct,
                CellState::Unmarked,
                CellState::Absent,
            ])
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut board = marking_board("crane");
        board.handle_feedback_input(key(KeyCode::Left));
        assert_eq!(board.state, TuiState::MarkingFeedback { cursor: 0 });
        for _ in 0..10 {
            board.handle_feedback_input(key(KeyCode::Right));
        }
        assert_eq!(board.state, TuiState::MarkingFeedback { cursor: 4 });
        board.handle_feedback_input(key(KeyCode::Char('g')));
        assert_eq!(board.state, TuiState::MarkingFeedback { cursor: 4 });
    }

    #[test]
    fn test_backspace_clears_cell_and_moves_back() {
        let mut board = marking_board("crane");
        board.handle_feedback_input(key(KeyCode::Char('g')));
        board.handle_feedback_input(key(KeyCode::Backspace));
        assert_eq!(board.rows[0].states[1], CellState::Unmarked);
        assert_eq!(board.state, TuiState::MarkingFeedback { cursor: 0 });
    }

    #[test]
    fn test_escape_abandons_guess() {
        let mut board = marking_board("crane");
        assert_eq!(
            board.handle_feedback_input(key(KeyCode::Esc)),
            FeedbackInput::Abandon
        );
        assert!(board.rows.is_empty());
        assert_eq!(board.state, TuiState::EnteringGuess);
        assert!(!board.quit_requested);
    }

    #[test]
    fn test_ctrl_q_while_marking_requests_quit() {
        let mut board = marking_board("crane");
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(board.handle_feedback_input(ctrl_q), FeedbackInput::Abandon);
        assert!(board.quit_requested);
        assert!(board.rows.is_empty());
    }

    #[test]
    fn test_game_over_input() {
        let mut board = Board::new();
        board.game_over("done".to_string(), "Game Over");
        assert_eq!(board.handle_game_over_input(key(KeyCode::Char('a'))), None);
        assert_eq!(
            board.handle_game_over_input(key(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            board.handle_game_over_input(key(KeyCode::Esc)),
            Some(UserAction::Exit)
        );
    }

    #[test]
    fn test_reset_keeps_quit_request() {
        let mut board = marking_board("crane");
        board.quit_requested = true;
        board.reset();
        assert!(board.rows.is_empty());
        assert!(board.quit_requested);
        assert_eq!(board.state, TuiState::EnteringGuess);
    }

    #[test]
    fn test_cell_spans_mark_cursor() {
        let spans = cell_spans(
            ['c', 'r', 'a', 'n', 'e'],
            [CellState::Correct; WORD_LENGTH],
            Some(2),
        );
        let text: String = spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "   C   R  [A]  N   E  ");
    }
}
