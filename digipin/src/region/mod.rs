//! Region table: the addressable bounding rectangle plus its symbol grid.
//!
//! Both the encoder and the decoder read from a [`RegionTable`]. The standard
//! table covers lat 2.5°–38.5°N and lon 63.5°–99.5°E and uses the DIGIPIN
//! alphabet:
//!
//! ```text
//!         W ──────────► E
//!   N   │  F  C  9  8
//!       │  J  3  2  7
//!       │  K  4  5  6
//!   S   ▼  L  M  P  T
//! ```

mod bounds;
mod error;
mod grid;

pub use bounds::{BoundingRegion, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
pub use error::RegionError;
pub use grid::{GridCell, SymbolGrid, ALPHABET_SIZE, GRID_SIZE, STANDARD_SYMBOLS};

use std::collections::HashSet;

/// The standard DIGIPIN region table, shared read-only by every caller.
pub static STANDARD_TABLE: RegionTable = RegionTable {
    bounds: BoundingRegion::STANDARD,
    grid: SymbolGrid::STANDARD,
};

/// Immutable pairing of a top-level bounding rectangle and a symbol grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTable {
    bounds: BoundingRegion,
    grid: SymbolGrid,
}

impl RegionTable {
    /// Builds a custom table.
    ///
    /// Bounds must be finite and strictly ordered. Symbols must be ASCII
    /// letters or digits, all 16 distinct.
    pub fn new(
        bounds: BoundingRegion,
        rows: [[char; GRID_SIZE]; GRID_SIZE],
    ) -> Result<Self, RegionError> {
        if !bounds.is_valid() {
            return Err(RegionError::InvalidBounds {
                min_lat: bounds.min_lat,
                max_lat: bounds.max_lat,
                min_lon: bounds.min_lon,
                max_lon: bounds.max_lon,
            });
        }

        let mut seen = HashSet::with_capacity(ALPHABET_SIZE);
        let mut symbols = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (row, line) in rows.iter().enumerate() {
            for (column, &symbol) in line.iter().enumerate() {
                if !symbol.is_ascii_alphanumeric() {
                    return Err(RegionError::InvalidSymbol(symbol));
                }
                if !seen.insert(symbol) {
                    return Err(RegionError::DuplicateSymbol(symbol));
                }
                symbols[row][column] = symbol as u8;
            }
        }

        Ok(Self {
            bounds,
            grid: SymbolGrid::from_rows_unchecked(symbols),
        })
    }

    /// The built-in DIGIPIN table.
    #[inline]
    pub fn standard() -> &'static RegionTable {
        &STANDARD_TABLE
    }

    #[inline]
    pub fn bounds(&self) -> &BoundingRegion {
        &self.bounds
    }

    #[inline]
    pub fn grid(&self) -> &SymbolGrid {
        &self.grid
    }

    /// Shorthand for `self.grid().symbol_at(cell)`.
    #[inline]
    pub fn symbol_at(&self, cell: GridCell) -> char {
        self.grid.symbol_at(cell)
    }

    /// Shorthand for `self.grid().cell_of(symbol)`.
    #[inline]
    pub fn cell_of(&self, symbol: char) -> Option<GridCell> {
        self.grid.cell_of(symbol)
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        STANDARD_TABLE
    }
}
