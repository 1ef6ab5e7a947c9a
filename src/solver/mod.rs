mod backtracking;
mod frontier;
mod stats;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use fnv::{FnvHashMap, FnvHashSet};
use typed_arena::Arena;

use crate::config::{SolveOptions, Strategy};
use crate::data::DIRECTIONS;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::puzzle::PuzzleState;
use crate::rules;
use crate::state::State;
use crate::Solve;

use self::backtracking::{reconstruct_moves, Prevs};
use self::frontier::{Frontier, SearchNode};

pub use self::stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    UnknownStrategy(String),
    Cancelled,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::UnknownStrategy(ref name) => write!(
                f,
                "Unknown strategy '{}' - expected one of: bfs, dfs, ucs, greedy, astar, custom",
                name
            ),
            SolverErr::Cancelled => write!(f, "Search cancelled"),
        }
    }
}

impl Error for SolverErr {}

/// Outcome of a finished search.
///
/// `moves` is `None` when the whole reachable state space was explored without finding a solution
/// and `Some` of an empty `Moves` when the initial state is already solved.
#[derive(Clone)]
pub struct SolveResult {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub strategy: Strategy,
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn generated_states(&self) -> usize {
        self.stats.total_generated()
    }

    pub fn expanded_states(&self) -> usize {
        self.stats.total_expanded()
    }
}

impl Debug for SolveResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "{}: no solution", self.strategy)?,
            Some(ref moves) => writeln!(f, "{}: {}", self.strategy, moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for PuzzleState {
    fn solve(&self, strategy: Strategy) -> SolveResult {
        solve(self, strategy)
    }
}

pub fn solve(initial: &PuzzleState, strategy: Strategy) -> SolveResult {
    match solve_with(initial, strategy, &SolveOptions::default()) {
        Ok(result) => result,
        Err(err) => unreachable!("Search without a cancel flag failed: {}", err),
    }
}

/// Looks up the strategy by name first, nothing is searched if it doesn't exist.
pub fn solve_by_name(initial: &PuzzleState, strategy_name: &str) -> Result<SolveResult, SolverErr> {
    let strategy = strategy_name.parse()?;
    Ok(solve(initial, strategy))
}

pub fn solve_with(
    initial: &PuzzleState,
    strategy: Strategy,
    options: &SolveOptions,
) -> Result<SolveResult, SolverErr> {
    let started = Instant::now();
    let cancel = options.cancel.as_ref().map(|flag| &**flag);
    let (moves, stats) = search(
        initial.map(),
        initial.canonical_key(),
        initial.cost_so_far(),
        strategy,
        cancel,
    )?;
    Ok(SolveResult {
        moves,
        stats,
        strategy,
        elapsed: started.elapsed(),
    })
}

fn search(
    map: &GoalMap,
    initial_state: &State,
    initial_cost: u32,
    strategy: Strategy,
    cancel: Option<&AtomicBool>,
) -> Result<(Option<Moves>, Stats), SolverErr> {
    debug!("Search called with {}", strategy);

    // each admitted state is allocated once, everything else holds references
    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut frontier = Frontier::new(strategy);
    // states that were ever admitted - only BFS and DFS
    let mut generated: FnvHashSet<&State> = FnvHashSet::default();
    // closed set - expanded states and how we got to them
    let mut prevs: Prevs<'_, _> = FnvHashMap::default();
    let mut seq = 0;

    let start: &State = arena.alloc(initial_state.clone());
    if strategy.marks_on_generation() {
        generated.insert(start);
    }
    frontier.push(SearchNode::new(
        strategy,
        start,
        None,
        initial_cost,
        map.heuristic(start),
        seq,
    ));

    while let Some(cur_node) = frontier.pop() {
        if cancel.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
            debug!("Search cancelled");
            return Err(SolverErr::Cancelled);
        }

        // stats are per depth, not per cost
        let depth = cur_node.cost - initial_cost;

        if prevs.contains_key(cur_node.state) {
            stats.add_reached_duplicate(depth);
            continue;
        }
        // insert here and not as soon as we discover it
        // otherwise we overwrite the shortest path with longer ones
        prevs.insert(cur_node.state, cur_node.prev);

        if stats.add_expanded(depth) {
            debug!("Expanded new depth: {}", depth);
        }

        if map.is_solved(cur_node.state) {
            debug!("Solved, backtracking path");
            let moves = reconstruct_moves(&prevs, cur_node.state);
            return Ok((Some(moves), stats));
        }

        for &dir in &DIRECTIONS {
            let (new_state, mov) = match rules::apply(map, cur_node.state, dir) {
                Some(next) => next,
                None => continue,
            };

            let admitted = if strategy.marks_on_generation() {
                !generated.contains(&new_state)
            } else {
                !prevs.contains_key(&new_state)
            };
            if !admitted {
                continue;
            }

            let new_state: &State = arena.alloc(new_state);
            if strategy.marks_on_generation() {
                generated.insert(new_state);
            }

            seq += 1;
            stats.add_generated(depth + 1);
            frontier.push(SearchNode::new(
                strategy,
                new_state,
                Some((cur_node.state, mov)),
                cur_node.cost + 1,
                map.heuristic(new_state),
                seq,
            ));
        }
    }

    debug!("Frontier exhausted, no solution");
    Ok((None, stats))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    use crate::data::Dir;

    const ONE_PUSH: &str = r"
####
#@$.
#  #
####
";

    fn load(level: &str) -> PuzzleState {
        level.parse().unwrap()
    }

    #[test]
    fn one_push_bfs() {
        let puzzle = load(ONE_PUSH);
        let result = solve(&puzzle, Strategy::BreadthFirst);
        let moves = result.moves.as_ref().unwrap();
        assert_eq!(moves.dirs().collect::<Vec<_>>(), vec![Dir::Right]);
        assert_eq!(moves.to_string(), "R");
        assert!(result.generated_states() >= 1);
        // initial expands into Down and Right, Down is popped first
        assert_eq!(result.generated_states(), 3);
        assert_eq!(result.expanded_states(), 3);

        let end = puzzle.replay(moves.dirs()).unwrap();
        assert!(end.is_solved());
        assert_eq!(end.cost_so_far() as usize, moves.move_cnt());
    }

    #[test]
    fn continues_from_cost() {
        let puzzle = load(ONE_PUSH);
        let start = puzzle.apply(Dir::Down).unwrap();
        assert_eq!(start.cost_so_far(), 1);

        for &strategy in &Strategy::ALL {
            let result = solve(&start, strategy);
            let moves = result.moves.as_ref().unwrap();
            let end = start.replay(moves.dirs()).unwrap();
            assert!(end.is_solved(), "{}", strategy);
            assert_eq!(
                end.cost_so_far() as usize,
                start.cost_so_far() as usize + moves.move_cnt(),
                "{}",
                strategy
            );

            // same configuration from zero - same search
            let fresh = solve(&load(&start.to_string()), strategy);
            assert_eq!(fresh.moves, result.moves, "{}", strategy);
            assert!(fresh.stats == result.stats, "{}", strategy);
        }
    }

    #[test]
    fn astar_orders_by_total_cost() {
        let start = load(ONE_PUSH).apply(Dir::Down).unwrap();
        let node = SearchNode::new(
            Strategy::AStar,
            start.canonical_key(),
            None,
            start.cost_so_far(),
            start.heuristic(),
            0,
        );
        assert_eq!(node.priority, (start.total_cost(), 0));
    }

    #[test]
    fn no_targets() {
        let puzzle = load(&ONE_PUSH.replace('.', " "));
        for &strategy in &Strategy::ALL {
            let result = solve(&puzzle, strategy);
            assert!(result.moves.is_none(), "{}", strategy);
            assert_eq!(result.stats.total_left(), 0, "{}", strategy);
        }
    }

    #[test]
    fn already_solved() {
        let puzzle = load("#####\n#@ *#\n#####");
        for &strategy in &Strategy::ALL {
            let result = solve(&puzzle, strategy);
            assert_eq!(result.moves, Some(Moves::default()), "{}", strategy);
            assert_eq!(result.generated_states(), 0);
            assert_eq!(result.expanded_states(), 1);
        }
    }

    #[test]
    fn no_boxes_is_solved() {
        let puzzle = load("####\n#@ #\n####");
        let result = solve(&puzzle, Strategy::AStar);
        assert_eq!(result.moves, Some(Moves::default()));
    }

    #[test]
    fn duplicates_skipped_on_pop() {
        // a 2x2 room - several paths lead to each cell
        let puzzle = load(
            r"
######
#@   #
#    #
#   $#
#   .#
######
",
        );
        let result = solve(&puzzle, Strategy::UniformCost);
        assert!(result.moves.is_some());
        assert!(result.stats.total_reached_duplicates() > 0);

        let bfs = solve(&puzzle, Strategy::BreadthFirst);
        assert_eq!(bfs.stats.total_reached_duplicates(), 0);
        assert_eq!(
            bfs.moves.as_ref().map(Moves::move_cnt),
            result.moves.as_ref().map(Moves::move_cnt)
        );
    }

    #[test]
    fn by_name() {
        let puzzle = load(ONE_PUSH);
        let result = solve_by_name(&puzzle, "astar").unwrap();
        assert_eq!(result.strategy, Strategy::AStar);
        assert_eq!(result.moves.unwrap().to_string(), "R");

        let err = solve_by_name(&puzzle, "best").unwrap_err();
        assert_eq!(err, SolverErr::UnknownStrategy("best".to_string()));
        assert!(err.to_string().starts_with("Unknown strategy 'best'"));
    }

    #[test]
    fn cancelled() {
        let puzzle = load(ONE_PUSH);
        let flag = Arc::new(AtomicBool::new(true));
        let options = SolveOptions::with_cancel(Arc::clone(&flag));
        assert_eq!(
            solve_with(&puzzle, Strategy::BreadthFirst, &options).unwrap_err(),
            SolverErr::Cancelled
        );

        flag.store(false, Ordering::Relaxed);
        let result = solve_with(&puzzle, Strategy::BreadthFirst, &options).unwrap();
        assert!(result.moves.is_some());
    }

    #[test]
    fn debug_format() {
        let puzzle = load(ONE_PUSH);
        let result = puzzle.solve(Strategy::BreadthFirst);
        assert!(format!("{:?}", result).starts_with("bfs: 1\n"));

        let puzzle = load(&ONE_PUSH.replace('.', " "));
        let result = puzzle.solve(Strategy::DepthFirst);
        assert!(format!("{:?}", result).starts_with("dfs: no solution\n"));
    }
}
