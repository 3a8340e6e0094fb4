//! Search strategies over the cube's move graph.

mod backtrack;
mod graph;

pub use backtrack::{iterative_deepening, BacktrackOutcome, BacktrackStats, Failure};
pub use graph::{best_first, breadth_first, graph_search, GraphOutcome, GraphStats};

use std::fmt;

use crate::cube::Cube;
use crate::moves::Move;

/// A solving path: each entry is a move and the configuration it produced,
/// ordered from the initial configuration to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The (move, resulting state) pairs. Empty when the initial
    /// configuration was already solved.
    pub steps: Vec<(Move, Cube)>,
}

impl Solution {
    /// Replay `moves` from `start`, recording the state after each move.
    pub fn from_moves<I: IntoIterator<Item = Move>>(start: &Cube, moves: I) -> Solution {
        let mut steps = Vec::new();
        let mut cube = *start;
        for mv in moves {
            cube = cube.apply(mv);
            steps.push((mv, cube));
        }
        Solution { steps }
    }

    /// The moves of the path in application order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|(mv, _)| *mv)
    }

    /// The number of moves on the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no moves at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (mv, _)) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Face;

    #[test]
    fn replay_records_each_state() {
        let mvs = [
            Move {
                face: Face::R,
                prime: false,
            },
            Move {
                face: Face::U,
                prime: true,
            },
        ];
        let solution = Solution::from_moves(&Cube::SOLVED, mvs);
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.steps[0].1, Cube::SOLVED.apply(mvs[0]));
        assert_eq!(solution.steps[1].1, Cube::SOLVED.apply_all(mvs));
        assert_eq!(solution.to_string(), "R U'");
    }

    #[test]
    fn empty_replay() {
        let solution = Solution::from_moves(&Cube::SOLVED, []);
        assert!(solution.is_empty());
        assert_eq!(solution.to_string(), "");
    }
}
