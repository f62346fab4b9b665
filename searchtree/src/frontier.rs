//! Frontier orderings for the traversal algorithms.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::state::PuzzleState;

/// Order in which states leave the open set. The two orderings are
/// the whole difference between the depth-first and breadth-first
/// traversals; duplicate handling lives with each algorithm.
pub(crate) trait Frontier: Default {
    fn pop(&mut self) -> Option<Rc<PuzzleState>>;

    fn push(&mut self, state: Rc<PuzzleState>);
}

/// Last-in-first-out frontier: the traversal dives before it widens.
#[derive(Debug, Default)]
pub(crate) struct DepthFrontier {
    queue: VecDeque<Rc<PuzzleState>>,
}

impl Frontier for DepthFrontier {
    fn pop(&mut self) -> Option<Rc<PuzzleState>> {
        self.queue.pop_front()
    }

    fn push(&mut self, state: Rc<PuzzleState>) {
        self.queue.push_front(state);
    }
}

/// First-in-first-out frontier: states leave in discovery order, so
/// the traversal proceeds in non-decreasing depth.
#[derive(Debug, Default)]
pub(crate) struct BreadthFrontier {
    queue: VecDeque<Rc<PuzzleState>>,
}

impl Frontier for BreadthFrontier {
    fn pop(&mut self) -> Option<Rc<PuzzleState>> {
        self.queue.pop_front()
    }

    fn push(&mut self, state: Rc<PuzzleState>) {
        self.queue.push_back(state);
    }
}
