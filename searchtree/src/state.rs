//! Board representation and the move-generation rule.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::str::FromStr;

use crate::errors::{Result, SearchError};

/// Tiles on a side.
const SIDE: usize = 3;

/// Cells on the board, blank included.
const CELLS: usize = SIDE * SIDE;

/// The blank tile.
pub const BLANK: u8 = 0;

/// One configuration of the 3x3 puzzle, row-major, 0 for the blank.
///
/// Equality and hashing are defined on the tile contents alone, so a
/// board doubles as the visited-set key during searches. Construction
/// goes through [FromStr], which enforces that the input is a
/// permutation of the digits 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([u8; CELLS]);

impl Board {
    /// The tiles in row-major order.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Row-major index of the blank tile.
    fn blank(&self) -> Result<usize> {
        self.0
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or_else(|| SearchError::BlankMissing {
                board: self.to_string(),
            })
    }

    /// A copy of this board with two cells exchanged.
    fn swap(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.0;
        tiles.swap(a, b);
        Board(tiles)
    }
}

impl FromStr for Board {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let length = s.chars().count();
        if length != CELLS {
            return Err(SearchError::InvalidLength {
                board: s.to_string(),
                length,
            });
        }

        let mut tiles = [0u8; CELLS];
        let mut seen = [false; CELLS];
        for (cell, symbol) in s.chars().enumerate() {
            let tile = match symbol.to_digit(10) {
                Some(tile) if (tile as usize) < CELLS => tile as u8,
                _ => {
                    return Err(SearchError::InvalidSymbol {
                        board: s.to_string(),
                        symbol,
                    })
                }
            };
            if seen[tile as usize] {
                return Err(SearchError::NotAPermutation {
                    board: s.to_string(),
                });
            }
            seen[tile as usize] = true;
            tiles[cell] = tile;
        }
        Ok(Board(tiles))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.0.iter() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// The four moves of the blank, in the fixed order move generation
/// uses everywhere. The order is the only tie-breaking rule in the
/// depth-first traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// (row, column) offset applied to the blank.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// A board reached during a search, linked back to the state whose
/// move produced it.
///
/// States are immutable once created. The root of a search has no
/// parent and depth 0; every child sits one move deeper than its
/// parent. Equality and hashing consider the board alone - parent and
/// depth are bookkeeping for path reconstruction.
#[derive(Debug)]
pub struct PuzzleState {
    board: Board,
    parent: Option<Rc<PuzzleState>>,
    depth: usize,
}

impl PuzzleState {
    /// The root state for a search.
    pub fn root(board: Board) -> Rc<Self> {
        Rc::new(Self {
            board,
            parent: None,
            depth: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves from the start state to this one.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The state whose move produced this one, if any.
    pub fn parent(&self) -> Option<&Rc<PuzzleState>> {
        self.parent.as_ref()
    }

    /// Every state reachable from here by one blank move, in fixed
    /// direction order (up, right, down, left).
    ///
    /// A corner blank yields 2 children, an edge blank 3, the center
    /// blank 4. Fails only if the board has lost its blank, which the
    /// public constructors make impossible.
    pub fn neighbors(self: &Rc<Self>) -> Result<Vec<Rc<PuzzleState>>> {
        let blank = self.board.blank()?;
        let (row, col) = (blank / SIDE, blank % SIDE);

        let mut children = Vec::with_capacity(DIRECTIONS.len());
        for direction in DIRECTIONS.iter() {
            let (dr, dc) = direction.offset();
            let target_row = row as isize + dr;
            let target_col = col as isize + dc;

            if target_row < 0
                || target_row >= SIDE as isize
                || target_col < 0
                || target_col >= SIDE as isize
            {
                continue;
            }

            let target = (target_row as usize) * SIDE + (target_col as usize);
            children.push(Rc::new(PuzzleState {
                board: self.board.swap(blank, target),
                parent: Some(Rc::clone(self)),
                depth: self.depth + 1,
            }));
        }
        Ok(children)
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state)
    }
}

impl Drop for PuzzleState {
    fn drop(&mut self) {
        // Unlink exclusively-owned ancestors iteratively. Depth-first
        // runs build parent chains tens of thousands of states long;
        // the default recursive drop would overflow the stack.
        let mut parent = self.parent.take();
        while let Some(state) = parent {
            match Rc::try_unwrap(state) {
                Ok(mut state) => parent = state.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            "0123".parse::<Board>(),
            Err(SearchError::InvalidLength { length: 4, .. })
        ));
        assert!(matches!(
            "0123456780".parse::<Board>(),
            Err(SearchError::InvalidLength { length: 10, .. })
        ));
    }

    #[test]
    fn parse_rejects_bad_symbols() {
        assert!(matches!(
            "01234567a".parse::<Board>(),
            Err(SearchError::InvalidSymbol { symbol: 'a', .. })
        ));
        assert!(matches!(
            "012345679".parse::<Board>(),
            Err(SearchError::InvalidSymbol { symbol: '9', .. })
        ));
    }

    #[test]
    fn parse_rejects_duplicates() {
        assert!(matches!(
            "011345678".parse::<Board>(),
            Err(SearchError::NotAPermutation { .. })
        ));
    }

    #[test]
    fn parse_roundtrips_through_display() {
        assert_eq!(board("364017852").to_string(), "364017852");
    }

    #[test]
    fn neighbor_count_depends_on_blank_position() {
        let corner = PuzzleState::root(board("012345678"));
        assert_eq!(corner.neighbors().unwrap().len(), 2);

        let edge = PuzzleState::root(board("102345678"));
        assert_eq!(edge.neighbors().unwrap().len(), 3);

        let center = PuzzleState::root(board("123405678"));
        assert_eq!(center.neighbors().unwrap().len(), 4);
    }

    #[test]
    fn neighbors_come_in_fixed_direction_order() {
        let center = PuzzleState::root(board("123405678"));
        let boards: Vec<String> = center
            .neighbors()
            .unwrap()
            .iter()
            .map(|child| child.board().to_string())
            .collect();
        // up, right, down, left
        assert_eq!(
            boards,
            vec!["103425678", "123450678", "123475608", "123045678"]
        );
    }

    #[test]
    fn each_neighbor_swaps_the_blank_with_one_adjacent_tile() {
        let center = PuzzleState::root(board("123405678"));
        for child in center.neighbors().unwrap() {
            let differing: Vec<usize> = (0..CELLS)
                .filter(|&i| center.board().tiles()[i] != child.board().tiles()[i])
                .collect();
            assert_eq!(differing.len(), 2);
            // One differing cell is the old blank position, now holding
            // a tile; the other now holds the blank.
            assert!(differing.contains(&4));
            assert!(differing
                .iter()
                .any(|&i| child.board().tiles()[i] == BLANK));
            assert_eq!(child.depth(), 1);
        }
    }

    #[test]
    fn equality_ignores_parent_and_depth() {
        let root = PuzzleState::root(board("123405678"));
        let child = root
            .neighbors()
            .unwrap()
            .into_iter()
            .find(|c| c.board().to_string() == "123045678")
            .unwrap();
        let other = PuzzleState::root(board("123045678"));

        assert_eq!(child.as_ref(), other.as_ref());
        assert_eq!(child.depth(), 1);
        assert_eq!(other.depth(), 0);
        assert!(child.parent().is_some());
        assert!(other.parent().is_none());
    }
}
