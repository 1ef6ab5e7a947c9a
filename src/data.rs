use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Static terrain of one cell. Occupants (player, boxes) are kept in `State`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
    Goal,
}

impl Default for MapCell {
    fn default() -> Self {
        MapCell::Empty
    }
}

/// What stands on a non-wall cell in one particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

/// One character of an XSB level: terrain and occupant together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Target,
    Box,
    BoxOnTarget,
    Player,
    PlayerOnTarget,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        // the aliases are part of the XSB format, see parser.rs
        let cell = match c {
            ' ' | '-' | '_' => Cell::Empty,
            '#' => Cell::Wall,
            '.' => Cell::Target,
            '$' | 'b' => Cell::Box,
            '*' | 'B' => Cell::BoxOnTarget,
            '@' | 'p' => Cell::Player,
            '+' | 'P' => Cell::PlayerOnTarget,
            _ => return None,
        };
        Some(cell)
    }

    pub(crate) fn compose(terrain: MapCell, contents: Contents) -> Option<Cell> {
        let cell = match (terrain, contents) {
            (MapCell::Empty, Contents::Empty) => Cell::Empty,
            (MapCell::Empty, Contents::Box) => Cell::Box,
            (MapCell::Empty, Contents::Player) => Cell::Player,
            (MapCell::Wall, Contents::Empty) => Cell::Wall,
            (MapCell::Wall, _) => return None,
            (MapCell::Goal, Contents::Empty) => Cell::Target,
            (MapCell::Goal, Contents::Box) => Cell::BoxOnTarget,
            (MapCell::Goal, Contents::Player) => Cell::PlayerOnTarget,
        };
        Some(cell)
    }

    pub(crate) fn terrain(self) -> MapCell {
        match self {
            Cell::Wall => MapCell::Wall,
            Cell::Target | Cell::BoxOnTarget | Cell::PlayerOnTarget => MapCell::Goal,
            Cell::Empty | Cell::Box | Cell::Player => MapCell::Empty,
        }
    }

    pub(crate) fn contents(self) -> Contents {
        match self {
            Cell::Box | Cell::BoxOnTarget => Contents::Box,
            Cell::Player | Cell::PlayerOnTarget => Contents::Player,
            Cell::Empty | Cell::Wall | Cell::Target => Contents::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Target => '.',
            Cell::Box => '$',
            Cell::BoxOnTarget => '*',
            Cell::Player => '@',
            Cell::PlayerOnTarget => '+',
        }
    }
}

// signed so that stepping off the grid is still a valid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Every direction in the order successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.delta();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}
