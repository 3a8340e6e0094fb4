//! Depth-bounded recursive backtracking with path-based cycle detection,
//! wrapped in an iterative-deepening loop that raises the bound until a
//! solution appears.

use thiserror::Error;

use super::Solution;
use crate::cube::Cube;
use crate::moves::Move;

/// A recoverable reason one backtracking branch was abandoned. Each kind
/// sends the search to a sibling branch or, at the top, to a deeper retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The current state already occurs on the path (a cycle).
    #[error("state already visited on the current path")]
    AlreadyVisited,
    /// The path grew past the depth bound.
    #[error("depth bound {0} exceeded")]
    DepthExceeded(usize),
    /// Every move from this state failed within the bound.
    #[error("all moves from this state exhausted")]
    RulesExhausted,
}

/// Counters for one iterative-deepening invocation, accumulated across
/// every bound that was tried.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackStats {
    /// Recursive backtracking calls made.
    pub calls: usize,
    /// Branches abandoned because the state repeated on the path.
    pub already_visited: usize,
    /// Branches abandoned at the depth bound.
    pub depth_exceeded: usize,
    /// States whose every move failed.
    pub rules_exhausted: usize,
}

/// What one iterative-deepening invocation produced.
#[derive(Debug)]
pub struct BacktrackOutcome {
    /// The solving path.
    pub solution: Solution,
    /// The depth bound that admitted the solution.
    pub bound: usize,
    /// Counters for the invocation.
    pub stats: BacktrackStats,
}

/// Run depth-bounded backtracking from `start`, raising the bound by one on
/// each failure and retrying from the single-state path until a solution is
/// found. The cube graph has no dead ends, so some bound always admits the
/// shortest solution, though distant scrambles can make the climb long.
pub fn iterative_deepening(start: &Cube, initial_bound: usize) -> BacktrackOutcome {
    let mut stats = BacktrackStats::default();
    let mut bound = initial_bound;
    loop {
        let mut path = Vec::new();
        match backtrack(*start, &mut path, bound, &mut stats) {
            Ok(moves) => {
                return BacktrackOutcome {
                    solution: Solution::from_moves(start, moves),
                    bound,
                    stats,
                };
            }
            Err(_) => bound += 1,
        }
    }
}

/// One backtracking step. `path` holds the ancestors of `current`, oldest
/// first; the path including `current` is what the bound measures. Moves are
/// tried in their fixed order and the first success wins, the winning move
/// prepended as the recursion unwinds.
fn backtrack(
    current: Cube,
    path: &mut Vec<Cube>,
    bound: usize,
    stats: &mut BacktrackStats,
) -> Result<Vec<Move>, Failure> {
    stats.calls += 1;

    if path.contains(&current) {
        stats.already_visited += 1;
        return Err(Failure::AlreadyVisited);
    }
    if current.is_solved() {
        return Ok(Vec::new());
    }
    if path.len() + 1 > bound {
        stats.depth_exceeded += 1;
        return Err(Failure::DepthExceeded(bound));
    }

    path.push(current);
    for mv in Move::ALL {
        if let Ok(mut moves) = backtrack(current.apply(mv), path, bound, stats) {
            path.pop();
            moves.insert(0, mv);
            return Ok(moves);
        }
    }
    path.pop();

    stats.rules_exhausted += 1;
    Err(Failure::RulesExhausted)
}
