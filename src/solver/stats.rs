use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

/// Counts of states by depth (number of moves from the initial state)
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    dead_end_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn total_dead_ends(&self) -> u64 {
        self.dead_end_states.iter().sum()
    }

    /// Created states that were still in the frontier when the search stopped
    pub fn total_left(&self) -> u64 {
        self.total_created()
            - self.total_unique_visited()
            - self.total_reached_duplicates()
            - self.total_dead_ends()
    }

    /// Deepest visited depth, `None` before the first visit
    pub fn max_depth(&self) -> Option<u32> {
        if self.visited_states.is_empty() {
            None
        } else {
            Some(self.visited_states.len() as u32 - 1)
        }
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_dead_end(&mut self, depth: u32) -> bool {
        Self::add(&mut self.dead_end_states, depth)
    }

    /// Returns true when `depth` is new for this counter
    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped - a depth may only have duplicates
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        let at = |counts: &[u64], depth: usize| counts.get(depth).cloned().unwrap_or(0);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Dead ends"),
            Cell::new("Unknown (not reached)"),
        ]));
        // created_states is the longest vec
        for depth in 0..self.created_states.len() {
            let created = at(&self.created_states, depth);
            let visited = at(&self.visited_states, depth);
            let duplicates = at(&self.duplicate_states, depth);
            let dead_ends = at(&self.dead_end_states, depth);
            let left = created - visited - duplicates - dead_ends;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&dead_ends.separated_string()),
                Cell::new(&left.separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "total created / unique visited / reached duplicates / dead ends:"
        )?;
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string(),
            self.total_dead_ends().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Unique visited total: {}", self.total_unique_visited().separated_string())?;
        writeln!(f, "Reached duplicates total: {}", self.total_reached_duplicates().separated_string())?;
        writeln!(f, "Dead ends total: {}", self.total_dead_ends().separated_string())?;
        writeln!(f, "Created but not reached total: {}", self.total_left().separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert_eq!(stats.max_depth(), None);

        assert!(stats.add_created(0));
        assert!(stats.add_unique_visited(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_reached_duplicate(1));
        assert!(stats.add_dead_end(1));
        // skipped depths are filled with zeros
        assert!(stats.add_created(3));

        assert_eq!(stats.total_created(), 5);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.total_dead_ends(), 1);
        assert_eq!(stats.total_left(), 2);
        assert_eq!(stats.max_depth(), Some(0));
        assert_eq!(stats.created_states, vec![1, 3, 0, 1]);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1500 {
            stats.add_created(2);
        }
        stats.add_unique_visited(2);

        let short = format!("{:?}", stats);
        assert!(short.starts_with("total created / unique visited"));
        assert!(short.contains("1,500"));

        let long = stats.to_string();
        assert!(long.starts_with("States created total: 1,500\n"));
        assert!(long.contains("Created but not reached total: 1,499\n"));
        assert!(long.contains("Depth"));
        assert!(long.contains("2:"));
    }
}
