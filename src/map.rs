use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level - walls and goals.
///
/// Built once by the parser and shared (behind an `Arc`) by every state of the puzzle.
/// Positions outside the grid behave as walls.
#[derive(Clone, PartialEq, Eq)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    goals: Vec<Pos>,
}

impl GoalMap {
    pub(crate) fn new(grid: Vec2d<MapCell>, mut goals: Vec<Pos>) -> Self {
        goals.sort();
        GoalMap { grid, goals }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall)
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// Sum of distances from each box to its nearest goal.
    ///
    /// Two boxes can count the same goal so this is not admissible with more than one box.
    pub fn heuristic(&self, state: &State) -> u32 {
        // less is better
        state
            .boxes
            .iter()
            .map(|&box_pos| {
                self.goals
                    .iter()
                    .map(|&goal| box_pos.dist(goal))
                    .min()
                    .unwrap_or(0)
            })
            .sum()
    }

    pub fn is_solved(&self, state: &State) -> bool {
        // all boxes on a goal, not all goals with a box
        state.boxes.iter().all(|&pos| self.is_target(pos))
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None))
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
