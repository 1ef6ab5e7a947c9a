use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::config::Strategy;
use crate::moves::Move;
use crate::state::State;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) prev: Option<(&'a State, Move)>,
    /// Cost so far, the initial state's cost included.
    pub(crate) cost: u32,
    /// Strategy dependent, lower is expanded first.
    pub(crate) priority: (u32, u32),
    /// Insertion order - breaks ties so that runs are deterministic.
    pub(crate) seq: u64,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        strategy: Strategy,
        state: &'a State,
        prev: Option<(&'a State, Move)>,
        cost: u32,
        h: u32,
        seq: u64,
    ) -> Self {
        let priority = match strategy {
            Strategy::BreadthFirst | Strategy::DepthFirst => (0, 0),
            Strategy::UniformCost => (cost, 0),
            Strategy::Greedy => (h, 0),
            Strategy::AStar => (cost + h, 0),
            Strategy::Custom => (h, cost),
        };
        SearchNode {
            state,
            prev,
            cost,
            priority,
            seq,
        }
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // wrapped in Reverse for BinaryHeap
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

/// Generated but not yet expanded states, in the order the strategy wants them.
#[derive(Debug)]
pub(crate) enum Frontier<'a> {
    Fifo(VecDeque<SearchNode<'a>>),
    Lifo(Vec<SearchNode<'a>>),
    Priority(BinaryHeap<Reverse<SearchNode<'a>>>),
}

impl<'a> Frontier<'a> {
    pub(crate) fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Frontier::Lifo(Vec::new()),
            Strategy::UniformCost | Strategy::Greedy | Strategy::AStar | Strategy::Custom => {
                Frontier::Priority(BinaryHeap::new())
            }
        }
    }

    pub(crate) fn push(&mut self, node: SearchNode<'a>) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node),
            Frontier::Lifo(stack) => stack.push(node),
            Frontier::Priority(heap) => heap.push(Reverse(node)),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<SearchNode<'a>> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority(heap) => heap.pop().map(|Reverse(node)| node),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Priority(heap) => heap.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Pos;

    fn states() -> Vec<State> {
        (0..4)
            .map(|c| State::new(Pos::new(1, c), vec![]))
            .collect()
    }

    fn popped_seqs(frontier: &mut Frontier<'_>) -> Vec<u64> {
        let mut seqs = Vec::new();
        while let Some(node) = frontier.pop() {
            seqs.push(node.seq);
        }
        seqs
    }

    #[test]
    fn uninformed_orders() {
        let states = states();

        let mut fifo = Frontier::new(Strategy::BreadthFirst);
        let mut lifo = Frontier::new(Strategy::DepthFirst);
        for (seq, state) in states.iter().enumerate() {
            let node = SearchNode::new(Strategy::BreadthFirst, state, None, 0, 0, seq as u64);
            fifo.push(node);
            lifo.push(node);
        }
        assert_eq!(fifo.len(), 4);
        assert_eq!(popped_seqs(&mut fifo), vec![0, 1, 2, 3]);
        assert_eq!(popped_seqs(&mut lifo), vec![3, 2, 1, 0]);
    }

    #[test]
    fn priorities() {
        let states = states();
        // (cost, h) for seq 0..4
        let costs = [(3, 1), (1, 4), (2, 2), (1, 1)];

        let order = |strategy| {
            let mut frontier = Frontier::new(strategy);
            for (seq, (state, &(cost, h))) in states.iter().zip(costs.iter()).enumerate() {
                frontier.push(SearchNode::new(strategy, state, None, cost, h, seq as u64));
            }
            popped_seqs(&mut frontier)
        };

        assert_eq!(order(Strategy::UniformCost), vec![1, 3, 2, 0]);
        assert_eq!(order(Strategy::Greedy), vec![0, 3, 2, 1]);
        assert_eq!(order(Strategy::AStar), vec![3, 0, 2, 1]);
        assert_eq!(order(Strategy::Custom), vec![3, 0, 2, 1]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let states = states();
        let mut frontier = Frontier::new(Strategy::AStar);
        for &seq in &[2u64, 0, 3, 1] {
            let node = SearchNode::new(Strategy::AStar, &states[seq as usize], None, 1, 1, seq);
            frontier.push(node);
        }
        assert_eq!(popped_seqs(&mut frontier), vec![0, 1, 2, 3]);
    }
}
