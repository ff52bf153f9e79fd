// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod facts;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod solver;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{FeedbackError, WordError, WordbankError};
pub use facts::Facts;
pub use feedback::{CellState, RowFeedback, parse_row};
pub use game_state::{GameInterface, Session, SessionStatus, UserAction, game_loop};
pub use solver::{Suggestion, filter_candidates, suggest};
pub use word::{WORD_LENGTH, Word};
pub use wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
