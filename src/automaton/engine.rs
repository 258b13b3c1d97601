//! The automaton: one grid driven by one update policy

use super::grid::Grid;
use super::random::BinarySource;
use super::rules::RulePolicy;
use crate::error::Result;

/// Owns the current generation and the policy that produces the next one.
///
/// Construction always initializes the grid, so every `Automaton` value is
/// ready to `step`.
#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    policy: RulePolicy,
    generation: u64,
    last_changes: Option<usize>,
}

impl Automaton {
    /// Allocate a `cols x rows` grid and seed it the way the policy requires
    pub fn new<S: BinarySource + ?Sized>(
        policy: RulePolicy,
        cols: usize,
        rows: usize,
        source: &mut S,
    ) -> Result<Self> {
        let mut grid = Grid::new(cols, rows)?;
        policy.initialize(&mut grid, source);

        tracing::debug!(
            policy = policy.name(),
            cols,
            rows,
            living = grid.living_count(),
            "automaton initialized"
        );

        Ok(Self::from_grid(policy, grid))
    }

    /// Wrap an existing grid. The caller is responsible for any invariant the
    /// policy relies on (mirror symmetry for `Symmetric`).
    pub fn from_grid(policy: RulePolicy, grid: Grid) -> Self {
        Self {
            grid,
            policy,
            generation: 0,
            last_changes: None,
        }
    }

    /// Replace the grid with the next generation
    pub fn step(&mut self) {
        let next = self.policy.advance(&self.grid);
        self.grid = next.grid;
        self.generation += 1;
        self.last_changes = Some(next.changes);

        tracing::debug!(
            generation = self.generation,
            changes = next.changes,
            policy = self.policy.name(),
            "state changes in this generation"
        );
    }

    /// Run several generations back to back
    pub fn step_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn policy(&self) -> &RulePolicy {
        &self.policy
    }

    /// Generations computed since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Change count of the most recent generation, `None` before the first step
    pub fn last_changes(&self) -> Option<usize> {
        self.last_changes
    }
}
