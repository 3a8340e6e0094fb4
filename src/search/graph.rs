//! Generalized graph search with OPEN/CLOSED bookkeeping and parent
//! re-linking. A single evaluation function turns it from breadth-first
//! (constant) into best-first (informed).

use std::collections::HashMap;

use super::Solution;
use crate::cube::Cube;
use crate::moves::Move;

/// Node counters for one graph-search invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// States newly placed on OPEN, the root included.
    pub generated: usize,
    /// States popped from OPEN and expanded onto CLOSED.
    pub expanded: usize,
}

/// What one graph-search invocation produced.
#[derive(Debug)]
pub struct GraphOutcome {
    /// The solving path, or `None` when OPEN was exhausted without reaching
    /// a goal.
    pub solution: Option<Solution>,
    /// Counters for the invocation.
    pub stats: GraphStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Open,
    Closed,
}

/// Immutable cube content plus the mutable parent/depth cell the search
/// revises as cheaper paths turn up. Nodes are addressed by their index in
/// the arena, so a re-link is a local slot update.
struct Node {
    cube: Cube,
    parent: Option<usize>,
    mv: Option<Move>,
    depth: usize,
    status: Status,
}

/// Breadth-first search: a constant evaluation keeps OPEN in insertion
/// order, so the shallowest frontier state is always expanded next.
pub fn breadth_first(start: &Cube) -> GraphOutcome {
    graph_search(start, |_| 0)
}

/// Best-first search ordered by the number of faces still unsolved,
/// recomputed for every candidate state.
pub fn best_first(start: &Cube) -> GraphOutcome {
    graph_search(start, |cube| 6 - cube.solved_faces() as u32)
}

/// Search the move graph from `start`, expanding OPEN states in ascending
/// `h` order until a goal is popped or OPEN runs dry. OPEN is re-sorted
/// after every expansion round with a stable sort, so equal evaluations
/// preserve their insertion order.
pub fn graph_search<H>(start: &Cube, h: H) -> GraphOutcome
where
    H: Fn(&Cube) -> u32,
{
    let mut stats = GraphStats::default();
    let mut arena = vec![Node {
        cube: *start,
        parent: None,
        mv: None,
        depth: 0,
        status: Status::Open,
    }];
    let mut ids: HashMap<Cube, usize> = HashMap::from([(*start, 0)]);
    let mut open: Vec<usize> = vec![0];
    stats.generated += 1;

    let mut goal = None;
    while !open.is_empty() {
        let id = open.remove(0);
        arena[id].status = Status::Closed;
        stats.expanded += 1;

        if arena[id].cube.is_solved() {
            goal = Some(id);
            break;
        }

        for mv in Move::ALL {
            let child = arena[id].cube.apply(mv);
            match ids.get(&child).copied() {
                None => {
                    arena.push(Node {
                        cube: child,
                        parent: Some(id),
                        mv: Some(mv),
                        depth: arena[id].depth + 1,
                        status: Status::Open,
                    });
                    let child_id = arena.len() - 1;
                    ids.insert(child, child_id);
                    open.push(child_id);
                    stats.generated += 1;
                }
                Some(seen) => relink(&mut arena, seen, id, mv),
            }
        }

        open.sort_by_key(|&id| h(&arena[id].cube));
    }

    GraphOutcome {
        solution: goal.map(|id| reconstruct(&arena, id)),
        stats,
    }
}

/// Hang `seen` below `expander` when the expander offers a cheaper path,
/// then recompute the depth under whichever parent won. A CLOSED node also
/// has the depths of its recorded children refreshed, one level only.
fn relink(arena: &mut [Node], seen: usize, expander: usize, mv: Move) {
    // The root has no parent cell to revise and keeps depth 0.
    let Some(parent) = arena[seen].parent else {
        return;
    };
    let parent = if arena[expander].depth < arena[parent].depth {
        arena[seen].parent = Some(expander);
        arena[seen].mv = Some(mv);
        expander
    } else {
        parent
    };
    arena[seen].depth = arena[parent].depth + 1;

    if arena[seen].status == Status::Closed {
        let child_depth = arena[seen].depth + 1;
        for node in arena.iter_mut() {
            if node.status == Status::Closed && node.parent == Some(seen) {
                node.depth = child_depth;
            }
        }
    }
}

/// Walk parent links from the goal back to the root, then flip the chain
/// into initial-to-goal order.
fn reconstruct(arena: &[Node], goal: usize) -> Solution {
    let mut steps = Vec::new();
    let mut id = goal;
    while let (Some(parent), Some(mv)) = (arena[id].parent, arena[id].mv) {
        steps.push((mv, arena[id].cube));
        id = parent;
    }
    steps.reverse();
    Solution { steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Face;

    #[test]
    fn solved_root_returns_empty_path() {
        let outcome = breadth_first(&Cube::SOLVED);
        let solution = outcome.solution.unwrap();
        assert!(solution.is_empty());
        assert_eq!(outcome.stats.generated, 1);
        assert_eq!(outcome.stats.expanded, 1);
    }

    #[test]
    fn single_scramble_solves_in_one_move() {
        for mv in Move::ALL {
            let start = Cube::SOLVED.apply(mv);
            let solution = breadth_first(&start).solution.unwrap();
            assert_eq!(solution.len(), 1);
            assert_eq!(solution.steps[0].0, mv.inverse());
            assert!(solution.steps[0].1.is_solved());
        }
    }

    #[test]
    fn best_first_solves_a_two_scramble() {
        let start = Cube::SOLVED.apply_all([
            Move {
                face: Face::R,
                prime: false,
            },
            Move {
                face: Face::U,
                prime: false,
            },
        ]);
        let outcome = best_first(&start);
        let solution = outcome.solution.unwrap();
        assert!(start.apply_all(solution.moves()).is_solved());
        assert!(outcome.stats.expanded <= outcome.stats.generated);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn breadth_first_bounds_path_by_scramble_length(mvs in vec(any::<Move>(), 0..4)) {
            let start = Cube::SOLVED.apply_all(mvs.clone());
            let outcome = breadth_first(&start);
            let solution = outcome.solution.unwrap();
            assert!(solution.len() <= mvs.len());
            assert!(start.apply_all(solution.moves()).is_solved());
            assert!(outcome.stats.expanded <= outcome.stats.generated);
        }

        #[test]
        fn path_states_chain_from_the_start(mvs in vec(any::<Move>(), 0..4)) {
            let start = Cube::SOLVED.apply_all(mvs);
            let solution = breadth_first(&start).solution.unwrap();
            let mut cube = start;
            for &(mv, state) in &solution.steps {
                cube = cube.apply(mv);
                assert_eq!(cube, state);
            }
        }
    }
}
