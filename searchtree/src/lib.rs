//! Uninformed search over the 3x3 sliding-tile puzzle.
//!
//! The state space is defined implicitly by [PuzzleState::neighbors];
//! a [SearchEngine] traverses it depth-first, breadth-first, or
//! depth-first under a depth limit, returning the path it found along
//! with search statistics. The engine performs no I/O; rendering and
//! reporting belong to the caller.

mod engine;
mod errors;
mod frontier;
mod state;

pub use engine::SearchEngine;
pub use engine::SearchResult;
pub use errors::Result;
pub use errors::SearchError;
pub use state::Board;
pub use state::Direction;
pub use state::PuzzleState;
pub use state::BLANK;
