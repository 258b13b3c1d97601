//! Error types for grid construction and configuration

use thiserror::Error;

/// Errors raised when an automaton or its configuration is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Grid dimensions must both be positive
    #[error("Invalid grid dimensions {cols}x{rows}: both must be positive")]
    InvalidDimensions { cols: usize, rows: usize },

    /// A birth or survival set named a count outside the Moore neighborhood
    #[error("Neighbor count {0} is out of range (expected 0..=8)")]
    NeighborCountOutOfRange(u8),

    /// Rule string not in `B<digits>/S<digits>` form
    #[error("Invalid rule string '{0}': expected the form B3/S23")]
    InvalidRuleString(String),

    /// Rows of a literal grid disagree on their length
    #[error("Row {row} has length {len}, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },

    /// Theme name not present in the built-in palette
    #[error("Unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    /// Colour literal not in `#RRGGBB` form
    #[error("Invalid colour '{0}': expected #RRGGBB")]
    InvalidColor(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LifeError::InvalidDimensions { cols: 0, rows: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid grid dimensions 0x4: both must be positive"
        );

        let err = LifeError::NeighborCountOutOfRange(9);
        assert!(err.to_string().contains("9"));
    }
}
