use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Contents, MapCell};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Writes a grid (and optionally the player and boxes) in XSB format.
#[derive(Clone, Copy)]
pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>) -> Self {
        Self { grid, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid: Vec2d<Contents> = self.grid.scratchpad();
        if let Some(state) = self.state {
            for &b in &state.boxes {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos] = Contents::Player;
        }

        let mut col = 0;
        for pos in self.grid.positions() {
            let cell = Cell::compose(self.grid[pos], state_grid[pos])
                .unwrap_or_else(|| unreachable!("Wall with non-empty contents at {}", pos));
            write!(f, "{}", cell.to_char())?;

            col += 1;
            if col == self.grid.cols() {
                writeln!(f)?;
                col = 0;
            }
        }
        Ok(())
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
