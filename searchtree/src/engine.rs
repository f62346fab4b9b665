//! Traversal of the state space defined by [PuzzleState::neighbors].

use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::errors::Result;
use crate::frontier::{BreadthFrontier, DepthFrontier, Frontier};
use crate::state::{Board, PuzzleState};

/// Outcome of one traversal call.
///
/// An unsolved search is a normal outcome, not an error: the path is
/// empty and the statistics describe the exhausted search.
#[derive(Debug)]
pub struct SearchResult {
    path: Vec<Rc<PuzzleState>>,
    visited: usize,
    elapsed: Duration,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// The states from start to goal, empty when unsolved.
    pub fn path(&self) -> &[Rc<PuzzleState>] {
        &self.path
    }

    /// The goal state the search reached, if it did.
    pub fn terminal(&self) -> Option<&Rc<PuzzleState>> {
        self.path.last()
    }

    /// Solution cost: the terminal state's depth.
    pub fn depth(&self) -> Option<usize> {
        self.terminal().map(|state| state.depth())
    }

    /// Moves in the solution path: its length minus one.
    pub fn moves(&self) -> Option<usize> {
        if self.is_solved() {
            Some(self.path.len() - 1)
        } else {
            None
        }
    }

    /// Distinct boards ever inserted into the visited set.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Wall-clock time the traversal call took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Uninformed search over the 8-puzzle state space.
///
/// Built from a start and a goal board, both validated up front. Each
/// traversal method owns its frontier and visited set, so calls are
/// independent of each other and fully deterministic: the only
/// ordering rule is the fixed direction order of move generation.
#[derive(Debug)]
pub struct SearchEngine {
    start: Rc<PuzzleState>,
    goal: Board,
}

impl SearchEngine {
    /// Validates both board strings before any search state is built.
    pub fn new(start: &str, goal: &str) -> Result<Self> {
        let start: Board = start.parse()?;
        let goal: Board = goal.parse()?;
        Ok(Self {
            start: PuzzleState::root(start),
            goal,
        })
    }

    /// Depth-first search with no depth bound.
    ///
    /// Explores the finite reachable component exhaustively if it has
    /// to; the path it finds is not guaranteed shortest.
    pub fn depth_first(&self) -> Result<SearchResult> {
        self.depth_search(None)
    }

    /// Depth-first search that treats states at `limit` as leaves:
    /// they are still checked against the goal but never expanded.
    pub fn depth_limited(&self, limit: usize) -> Result<SearchResult> {
        self.depth_search(Some(limit))
    }

    fn depth_search(&self, limit: Option<usize>) -> Result<SearchResult> {
        let clock = Instant::now();
        let mut frontier = DepthFrontier::default();
        let mut visited: HashSet<Board> = HashSet::new();

        frontier.push(Rc::clone(&self.start));

        while let Some(state) = frontier.pop() {
            // Lazy duplicate check: a board may sit on the frontier
            // more than once, and only its first pop is expanded.
            if !visited.insert(*state.board()) {
                continue;
            }

            if *state.board() == self.goal {
                return Ok(self.finish(Some(&state), visited.len(), clock));
            }

            if limit.map_or(true, |limit| state.depth() < limit) {
                let mut children = state.neighbors()?;
                // The frontier is LIFO, so reverse before pushing to
                // keep the pop order up, right, down, left.
                children.reverse();
                for child in children {
                    if !visited.contains(child.board()) {
                        frontier.push(child);
                    }
                }
            }
        }

        Ok(self.finish(None, visited.len(), clock))
    }

    /// Breadth-first search. The returned path has minimum move count
    /// among all paths from start to goal.
    pub fn breadth_first(&self) -> Result<SearchResult> {
        let clock = Instant::now();
        let mut frontier = BreadthFrontier::default();
        let mut visited: HashSet<Board> = HashSet::new();

        // Eager duplicate check: boards are marked visited when they
        // enter the frontier, never queued twice.
        visited.insert(*self.start.board());
        frontier.push(Rc::clone(&self.start));

        while let Some(state) = frontier.pop() {
            if *state.board() == self.goal {
                return Ok(self.finish(Some(&state), visited.len(), clock));
            }

            for child in state.neighbors()? {
                if visited.insert(*child.board()) {
                    frontier.push(child);
                }
            }
        }

        Ok(self.finish(None, visited.len(), clock))
    }

    fn finish(
        &self,
        terminal: Option<&Rc<PuzzleState>>,
        visited: usize,
        clock: Instant,
    ) -> SearchResult {
        SearchResult {
            path: terminal.map(reconstruct).unwrap_or_default(),
            visited,
            elapsed: clock.elapsed(),
        }
    }
}

/// Walk parent links back to the root, then reverse into
/// start-to-goal order.
fn reconstruct(terminal: &Rc<PuzzleState>) -> Vec<Rc<PuzzleState>> {
    let mut path = Vec::with_capacity(terminal.depth() + 1);
    let mut current = Some(terminal);
    while let Some(state) = current {
        path.push(Rc::clone(state));
        current = state.parent();
    }
    path.reverse();
    path
}
