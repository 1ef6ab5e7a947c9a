use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// All rows must have the same length - the parser checks that.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        debug_assert!(grid.iter().all(|row| row.len() == cols));

        let data: Vec<T> = grid.into_iter().flatten().collect();
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        self.index_of(pos).map(|i| &self.data[i])
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn scratchpad<U: Clone + Default>(&self) -> Vec2d<U> {
        Vec2d {
            data: vec![U::default(); self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        if pos.r < 0 || pos.c < 0 {
            return None;
        }
        let (r, c) = (pos.r as usize, pos.c as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        let index = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("Position {} out of bounds", pos));
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let index = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("Position {} out of bounds", pos));
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing() {
        let mut grid = Vec2d::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Pos::new(1, 0)], 4);
        assert_eq!(grid.get(Pos::new(0, 2)), Some(&3));
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 3)), None);
        assert_eq!(grid.get(Pos::new(2, 0)), None);

        grid[Pos::new(1, 2)] = 7;
        assert_eq!(grid.to_string(), "123\n457\n");
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Vec2d::new(vec![vec!['a', 'b'], vec!['c', 'd']]);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );

        let scratch: Vec2d<bool> = grid.scratchpad();
        assert!(grid.positions().all(|pos| !scratch[pos]));
        assert_eq!(scratch.cols(), 2);
    }
}
