use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::Moves;
use crate::puzzle::PuzzleState;

/// Prints the initial state followed by the state after each push
/// (or after every move with `include_steps`).
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    initial: &'a PuzzleState,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial: &'a PuzzleState, moves: &'a Moves, include_steps: bool) -> Self {
        Self {
            initial,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial)?;
        let mut last_state = self.initial.clone();
        for &mov in self.moves {
            // moves from a different level
            let new_state = match last_state.apply(mov.dir()) {
                Some(state) => state,
                None => return writeln!(f, "Illegal move: {}", mov),
            };
            if mov.is_push() || self.include_steps {
                writeln!(f, "{}", new_state)?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
