//! Errors raised while building a custom region table.

use thiserror::Error;

/// Reasons a [`super::RegionTable`] cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// Bounds are non-finite, inverted or zero-width.
    #[error(
        "Invalid bounds: lat [{min_lat}, {max_lat}], lon [{min_lon}, {max_lon}] \
         (minimum must be strictly less than maximum)"
    )]
    InvalidBounds {
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    },

    /// The same symbol appears in more than one cell.
    #[error("Symbol '{0}' appears more than once in the grid")]
    DuplicateSymbol(char),

    /// The symbol is not an ASCII letter or digit.
    #[error("Symbol '{0}' is not an ASCII letter or digit")]
    InvalidSymbol(char),
}
