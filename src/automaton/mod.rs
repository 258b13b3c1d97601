//! Cellular automaton core: grid, update policies and randomness

pub mod engine;
pub mod grid;
pub mod random;
pub mod rules;

pub use engine::Automaton;
pub use grid::Grid;
pub use random::{BinarySource, PatternSource, RandomSource};
pub use rules::{Generation, NeighborSet, RulePolicy, RuleSet, StandardRule, SymmetricRule};
