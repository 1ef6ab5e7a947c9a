use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use crate::data::{Cell, Contents, MapCell, Pos};
use crate::map::GoalMap;
use crate::puzzle::PuzzleState;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The level text is not a usable map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    Pos(usize, usize),
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    MultiplePlayers,
    NoPlayer,
    BoxesGoals {
        boxes: usize,
        goals: usize,
    },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty map"),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::BoxesGoals { boxes, goals } => write!(
                f,
                "Different number of boxes ({}) and goals ({})",
                boxes, goals
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for PuzzleState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
/// (without run length encoding).
///
/// Box and goal counts are not compared - such a level is accepted and ends up without a solution.
pub fn parse(level: &str) -> Result<PuzzleState, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches(|c| c == '\n' || c == '\r');
    if level.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid: Vec<Vec<MapCell>> = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = Cell::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            let pos = Pos::new(r as i32, c as i32);

            match cell.contents() {
                Contents::Player => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                }
                Contents::Box => boxes.push(pos),
                Contents::Empty => {}
            }
            let terrain = cell.terrain();
            if terrain == MapCell::Goal {
                goals.push(pos);
            }
            row.push(terrain);
        }

        if let Some(first) = grid.first() {
            let expected = first.len();
            if row.len() != expected {
                return Err(ParserErr::RaggedRow {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
        }
        grid.push(row);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    debug!(
        "Parsed {}x{} level with {} boxes and {} goals",
        grid.len(),
        grid[0].len(),
        boxes.len(),
        goals.len()
    );

    let map = GoalMap::new(Vec2d::new(grid), goals);
    Ok(PuzzleState::new(Arc::new(map), State::new(player_pos, boxes)))
}

/// Like `parse` but also rejects levels with a different number of boxes and goals.
pub fn parse_strict(level: &str) -> Result<PuzzleState, ParserErr> {
    let puzzle = parse(level)?;
    let boxes = puzzle.boxes().len();
    let goals = puzzle.map().goals().len();
    if boxes != goals {
        return Err(ParserErr::BoxesGoals { boxes, goals });
    }
    Ok(puzzle)
}
