use ca_rules::{ParseLife, ParseRuleError};
use std::str::FromStr;

/// A totalistic rule, i.e., birth and survival conditions indexed by the
/// number of living neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rule {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub(crate) fn life() -> Self {
        Rule::from_bs(vec![3], vec![2, 3])
    }

    /// Whether a cell is alive in the next generation.
    pub(crate) fn next_state(&self, alive: bool, live_neighbors: usize) -> bool {
        let table = if alive { &self.survival } else { &self.birth };
        table.get(live_neighbors).copied().unwrap_or(false)
    }
}

impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        b.into_iter().for_each(|n| birth[n as usize] = true);
        s.into_iter().for_each(|n| survival[n as usize] = true);
        Rule { birth, survival }
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse_rule(s)
    }
}
