use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use crate::data::{Dir, Pos};
use crate::map::GoalMap;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::rules;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

/// One configuration of a puzzle together with the number of moves it took to reach it.
///
/// The map is shared by all states of the same puzzle, cloning a `PuzzleState` only copies
/// the player and the boxes.
#[derive(Clone)]
pub struct PuzzleState {
    map: Arc<GoalMap>,
    state: State,
    cost: u32,
}

impl PuzzleState {
    pub(crate) fn new(map: Arc<GoalMap>, state: State) -> Self {
        Self::with_cost(map, state, 0)
    }

    pub(crate) fn with_cost(map: Arc<GoalMap>, state: State, cost: u32) -> Self {
        PuzzleState { map, state, cost }
    }

    pub fn map(&self) -> &GoalMap {
        &self.map
    }

    pub fn player_pos(&self) -> Pos {
        self.state.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.state.boxes
    }

    pub fn cost_so_far(&self) -> u32 {
        self.cost
    }

    /// Player and boxes, without the cost - equal keys mean the same configuration.
    pub fn canonical_key(&self) -> &State {
        &self.state
    }

    pub fn heuristic(&self) -> u32 {
        self.map.heuristic(&self.state)
    }

    pub fn total_cost(&self) -> u32 {
        self.cost + self.heuristic()
    }

    pub fn is_solved(&self) -> bool {
        self.map.is_solved(&self.state)
    }

    /// The state after moving in `dir` or `None` if there's a wall or an unpushable box.
    pub fn apply(&self, dir: Dir) -> Option<PuzzleState> {
        rules::apply(&self.map, &self.state, dir).map(|(state, _)| {
            PuzzleState::with_cost(Arc::clone(&self.map), state, self.cost + 1)
        })
    }

    pub fn legal_actions(&self) -> Vec<Dir> {
        rules::legal_actions(&self.map, &self.state)
    }

    /// Applies all `dirs` in order, `None` as soon as one of them is illegal.
    pub fn replay<I: IntoIterator<Item = Dir>>(&self, dirs: I) -> Option<PuzzleState> {
        let mut cur = self.clone();
        for dir in dirs {
            cur = cur.apply(dir)?;
        }
        Some(cur)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.xsb_with_state(&self.state)
    }

    /// Replays `moves` from this state - see `SolutionFormatter`.
    pub fn xsb_solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves, include_steps)
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "cost: {}", self.cost)?;
        write!(f, "{}", self.xsb())
    }
}
