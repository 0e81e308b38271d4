// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod cli;
pub mod code;
pub mod game_state;
pub mod history;
pub mod score;

// Re-export commonly used functions for easier testing
pub use code::{format_code, generate_code, is_valid_code, read_code, read_valid_code, Code};
pub use game_state::{check_game_state, game_loop, play, GameState};
pub use history::{record, render_history, HistoryEntry};
pub use score::{score_guess, Score};
