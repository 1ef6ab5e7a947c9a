use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

/// Counters of one search, broken down by depth (= number of moves from the initial state).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    generated_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Successors admitted to the frontier. The initial state is not generated.
    pub fn total_generated(&self) -> usize {
        self.generated_states.iter().sum()
    }

    /// States popped from the frontier and expanded.
    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// States popped from the frontier that were already expanded through another path.
    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Still in the frontier when the search ended.
    pub fn total_left(&self) -> usize {
        // +1 for the initial state
        self.total_generated() + 1 - self.total_expanded() - self.total_reached_duplicates()
    }

    pub(crate) fn add_generated(&mut self, depth: u32) -> bool {
        Self::add(&mut self.generated_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped - DFS and greedy jump around a lot
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn max_depth(&self) -> usize {
        self.generated_states
            .len()
            .max(self.expanded_states.len())
            .max(self.duplicate_states.len())
    }
}

fn at(counts: &[usize], depth: usize) -> usize {
    counts.get(depth).cloned().unwrap_or(0)
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "generated by depth: {:?}", self.generated_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total generated: {}", self.total_generated().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "States generated total: {}",
            self.total_generated().separated_string()
        )?;
        writeln!(
            f,
            "States expanded total: {}",
            self.total_expanded().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Generated but not reached total: {}",
            self.total_left().separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{}",
            "Depth", "Generated", "Expanded", "Duplicates"
        )?;
        for depth in 0..self.max_depth() {
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                at(&self.generated_states, depth).separated_string(),
                at(&self.expanded_states, depth).separated_string(),
                at(&self.duplicate_states, depth).separated_string(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_expanded(0));
        assert!(stats.add_generated(1));
        assert!(!stats.add_generated(1));
        assert!(stats.add_generated(3)); // skipped depth 2
        assert!(stats.add_expanded(1));
        assert!(stats.add_reached_duplicate(1));

        assert_eq!(stats.total_generated(), 3);
        assert_eq!(stats.total_expanded(), 2);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.total_left(), 1);
        assert_eq!(
            format!("{:?}", stats),
            "generated by depth: [0, 2, 0, 1]
expanded by depth: [1, 1]
reached duplicates by depth: [0, 1]
total generated: 3
total expanded: 2
total reached duplicates: 1
"
        );
    }

    #[test]
    fn display() {
        let mut stats = Stats::new();
        stats.add_expanded(0);
        stats.add_generated(1);
        stats.add_expanded(1);

        let expected = "States generated total: 1
States expanded total: 2
Reached duplicates total: 0
Generated but not reached total: 0

Depth          Generated      Expanded       Duplicates
0:             0              1              0
1:             1              1              0
";
        assert_eq!(stats.to_string(), expected);
    }

    #[test]
    fn thousands_separators() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_generated(1);
        }
        assert!(stats
            .to_string()
            .starts_with("States generated total: 1,234\n"));
    }
}
