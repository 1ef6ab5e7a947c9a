// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod fs;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod rules;
mod vec2d;

use std::error::Error;

pub use crate::config::{SolveOptions, Strategy};
pub use crate::parser::ParserErr;
pub use crate::puzzle::PuzzleState;
pub use crate::solver::{solve, solve_by_name, solve_with, SolveResult, SolverErr};

/// Builds the initial state from XSB text.
pub fn new_puzzle(level: &str) -> Result<PuzzleState, ParserErr> {
    parser::parse(level)
}

pub trait LoadLevel {
    fn load_level(&self) -> Result<PuzzleState, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, strategy: Strategy) -> SolveResult;
}
