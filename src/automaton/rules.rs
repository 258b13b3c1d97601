//! Birth/survival rules and the generation update policies

use super::grid::Grid;
use super::random::BinarySource;
use crate::error::{LifeError, Result};
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum neighbor count in the Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// A subset of the neighbor counts `0..=8`, stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b1_1111_1111);

    /// Build a set from neighbor counts, rejecting anything above 8
    pub fn from_counts(counts: &[u8]) -> Result<Self> {
        counts.iter().try_fold(Self::EMPTY, |set, &count| {
            if count > MAX_NEIGHBORS {
                Err(LifeError::NeighborCountOutOfRange(count))
            } else {
                Ok(Self(set.0 | 1 << count))
            }
        })
    }

    #[inline]
    pub fn contains(self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.0 & (1 << count) != 0
    }

    pub fn counts(self) -> Vec<u8> {
        (0..=MAX_NEIGHBORS).filter(|&n| self.contains(n)).collect()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<Vec<u8>> for NeighborSet {
    type Error = LifeError;

    fn try_from(counts: Vec<u8>) -> Result<Self> {
        Self::from_counts(&counts)
    }
}

impl From<NeighborSet> for Vec<u8> {
    fn from(set: NeighborSet) -> Self {
        set.counts()
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.counts().iter().join(""))
    }
}

/// Birth and survival neighbor sets for an outer-totalistic rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub birth: NeighborSet,
    pub survival: NeighborSet,
}

impl RuleSet {
    /// Conway's Game of Life, B3/S23
    pub const fn conway() -> Self {
        Self {
            birth: NeighborSet(1 << 3),
            survival: NeighborSet(1 << 2 | 1 << 3),
        }
    }

    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self> {
        Ok(Self {
            birth: NeighborSet::from_counts(birth)?,
            survival: NeighborSet::from_counts(survival)?,
        })
    }

    /// Next state of a cell given its current state and neighbor count
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        match alive {
            false => self.birth.contains(neighbors),
            true => self.survival.contains(neighbors),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}

impl FromStr for RuleSet {
    type Err = LifeError;

    /// Parse the `B<digits>/S<digits>` notation, e.g. `B36/S23`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LifeError::InvalidRuleString(s.to_string());

        let (birth, survival) = s.trim().split_once('/').ok_or_else(invalid)?;
        let birth = birth
            .strip_prefix(['B', 'b'])
            .ok_or_else(invalid)?;
        let survival = survival
            .strip_prefix(['S', 's'])
            .ok_or_else(invalid)?;

        let digits = |part: &str| -> Result<Vec<u8>> {
            part.chars()
                .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(invalid))
                .collect()
        };

        Self::new(&digits(birth)?, &digits(survival)?)
    }
}

/// The outcome of one generation update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    /// Cells whose state was evaluated and differs from the previous grid
    pub changes: usize,
}

/// Evaluates every cell independently under a configurable rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardRule {
    pub rules: RuleSet,
}

impl StandardRule {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Evolve the grid one generation forward into a new buffer
    pub fn advance(&self, current: &Grid) -> Generation {
        let cols = current.cols();
        let mut next = current.allocate_next();

        next.cells_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(idx, cell)| {
                let (x, y) = (idx % cols, idx / cols);
                *cell = self
                    .rules
                    .next_state(current.get(x, y), current.neighbor_count(x, y));
            });

        let changes = current.diff_count(&next);
        Generation { grid: next, changes }
    }

    /// Uniform random fill of the whole grid
    pub fn initialize<S: BinarySource + ?Sized>(&self, grid: &mut Grid, source: &mut S) {
        grid.randomize(source);
    }
}

/// Conway's rule evaluated on the left half and mirrored onto the right.
///
/// Column `x` and column `cols - 1 - x` always hold the same state. The right
/// half is never simulated, only copied, so the symmetry holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymmetricRule;

impl SymmetricRule {
    /// Columns evaluated per generation; includes the middle column when `cols` is odd
    pub fn evaluated_columns(cols: usize) -> usize {
        cols.div_ceil(2)
    }

    pub fn advance(&self, current: &Grid) -> Generation {
        let rules = RuleSet::conway();
        let cols = current.cols();
        let mut next = current.allocate_next();
        let mut changes = 0;

        for x in 0..Self::evaluated_columns(cols) {
            for y in 0..current.rows() {
                let state = current.get(x, y);
                let value = rules.next_state(state, current.neighbor_count(x, y));
                if value != state {
                    changes += 1;
                }
                next.set(x, y, value);
                next.set(cols - 1 - x, y, value);
            }
        }

        Generation { grid: next, changes }
    }

    /// Randomize the left half and mirror it, establishing the symmetry invariant
    pub fn initialize<S: BinarySource + ?Sized>(&self, grid: &mut Grid, source: &mut S) {
        let cols = grid.cols();
        for x in 0..Self::evaluated_columns(cols) {
            for y in 0..grid.rows() {
                let alive = source.next_binary();
                grid.set(x, y, alive);
                grid.set(cols - 1 - x, y, alive);
            }
        }
    }
}

/// The closed set of update policies an automaton can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePolicy {
    Standard(StandardRule),
    Symmetric(SymmetricRule),
}

impl RulePolicy {
    pub fn standard(rules: RuleSet) -> Self {
        Self::Standard(StandardRule::new(rules))
    }

    pub fn symmetric() -> Self {
        Self::Symmetric(SymmetricRule)
    }

    pub fn advance(&self, current: &Grid) -> Generation {
        match self {
            Self::Standard(rule) => rule.advance(current),
            Self::Symmetric(rule) => rule.advance(current),
        }
    }

    pub fn initialize<S: BinarySource + ?Sized>(&self, grid: &mut Grid, source: &mut S) {
        match self {
            Self::Standard(rule) => rule.initialize(grid, source),
            Self::Symmetric(rule) => rule.initialize(grid, source),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard(_) => "standard",
            Self::Symmetric(_) => "symmetric",
        }
    }
}

impl fmt::Display for RulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(rule) => write!(f, "standard ({})", rule.rules),
            Self::Symmetric(_) => write!(f, "symmetric ({})", RuleSet::conway()),
        }
    }
}
