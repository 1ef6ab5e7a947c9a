use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::solver::SolverErr;

/// Order in which the solver explores states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO, shortest solution in moves.
    BreadthFirst,
    /// LIFO, usually a long solution.
    DepthFirst,
    UniformCost,
    /// Lowest heuristic first.
    Greedy,
    /// Lowest cost + heuristic first.
    AStar,
    /// Lowest heuristic first, shallower states win ties.
    Custom,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
            Strategy::Custom => "custom",
        }
    }

    /// BFS and DFS never admit a state twice so they mark states as soon as they're created,
    /// the rest closes states when they're popped.
    pub(crate) fn marks_on_generation(self) -> bool {
        match self {
            Strategy::BreadthFirst | Strategy::DepthFirst => true,
            Strategy::UniformCost | Strategy::Greedy | Strategy::AStar | Strategy::Custom => false,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SolverErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .cloned()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| SolverErr::UnknownStrategy(s.to_string()))
    }
}

/// Knobs for a single solver run.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Checked once per expansion - the search stops with `SolverErr::Cancelled` when set.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SolveOptions {
    pub fn with_cancel(cancel: Arc<AtomicBool>) -> Self {
        SolveOptions {
            cancel: Some(cancel),
        }
    }
}
