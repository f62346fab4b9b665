use thiserror::Error;

/// Error produced when a board fails validation, or when the engine
/// detects a broken construction invariant.
///
/// "No solution found" is not an error; it is an unsolved
/// [crate::SearchResult].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("board {board:?} must be exactly 9 characters, got {length}")]
    InvalidLength { board: String, length: usize },

    #[error("board {board:?} contains invalid symbol {symbol:?}")]
    InvalidSymbol { board: String, symbol: char },

    #[error("board {board:?} must contain each digit 0-8 exactly once")]
    NotAPermutation { board: String },

    /// A constructed board has no blank tile. Unreachable through the
    /// public constructors; indicates a bug in the engine itself.
    #[error("board {board} has no blank tile")]
    BlankMissing { board: String },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
