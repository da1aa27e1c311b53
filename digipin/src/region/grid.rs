//! The 4×4 symbol grid assigned to the cells of every subdivision level.

use std::fmt;

/// Number of rows and columns at each subdivision level.
pub const GRID_SIZE: usize = 4;

/// Total number of symbols in a grid.
pub const ALPHABET_SIZE: usize = GRID_SIZE * GRID_SIZE;

/// The standard DIGIPIN symbol layout. Row 0 is the northern band,
/// column 0 the western band.
pub const STANDARD_SYMBOLS: [[u8; GRID_SIZE]; GRID_SIZE] = [
    [b'F', b'C', b'9', b'8'],
    [b'J', b'3', b'2', b'7'],
    [b'K', b'4', b'5', b'6'],
    [b'L', b'M', b'P', b'T'],
];

/// Position of a cell inside a 4×4 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Row index (0-3), 0 at north
    pub row: usize,
    /// Column index (0-3), 0 at west
    pub column: usize,
}

impl GridCell {
    /// Creates a cell, returning `None` when either index is outside `0..4`.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (row < GRID_SIZE && column < GRID_SIZE).then_some(Self { row, column })
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Bidirectional mapping between grid cells and ASCII symbols.
///
/// Construct custom grids through [`super::RegionTable::new`], which checks
/// that all 16 symbols are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolGrid {
    symbols: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl SymbolGrid {
    /// The standard DIGIPIN grid.
    pub const STANDARD: SymbolGrid = SymbolGrid {
        symbols: STANDARD_SYMBOLS,
    };

    pub(super) const fn from_rows_unchecked(symbols: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { symbols }
    }

    /// Symbol assigned to a cell.
    #[inline]
    pub fn symbol_at(&self, cell: GridCell) -> char {
        self.symbols[cell.row][cell.column] as char
    }

    /// Cell holding a symbol, or `None` if the symbol is not in the alphabet.
    ///
    /// Lookup is case-sensitive.
    pub fn cell_of(&self, symbol: char) -> Option<GridCell> {
        if !symbol.is_ascii() {
            return None;
        }
        let byte = symbol as u8;
        self.symbols.iter().enumerate().find_map(|(row, line)| {
            line.iter()
                .position(|&s| s == byte)
                .map(|column| GridCell { row, column })
        })
    }

    /// Returns true if the symbol belongs to this grid's alphabet.
    #[inline]
    pub fn contains_symbol(&self, symbol: char) -> bool {
        self.cell_of(symbol).is_some()
    }

    /// All 16 symbols in row-major order.
    pub fn alphabet(&self) -> [char; ALPHABET_SIZE] {
        let mut out = ['\0'; ALPHABET_SIZE];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.symbols[i / GRID_SIZE][i % GRID_SIZE] as char;
        }
        out
    }

    /// Grid rows, north first.
    pub fn rows(&self) -> impl Iterator<Item = [char; GRID_SIZE]> + '_ {
        self.symbols.iter().map(|line| (*line).map(|s| s as char))
    }
}

impl Default for SymbolGrid {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_alphabet_has_sixteen_distinct_symbols() {
        let alphabet = SymbolGrid::STANDARD.alphabet();
        let unique: HashSet<char> = alphabet.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET_SIZE);
    }

    #[test]
    fn test_symbol_at_corners() {
        let grid = SymbolGrid::STANDARD;
        assert_eq!(grid.symbol_at(GridCell { row: 0, column: 0 }), 'F');
        assert_eq!(grid.symbol_at(GridCell { row: 0, column: 3 }), '8');
        assert_eq!(grid.symbol_at(GridCell { row: 3, column: 0 }), 'L');
        assert_eq!(grid.symbol_at(GridCell { row: 3, column: 3 }), 'T');
    }

    #[test]
    fn test_cell_of_inverts_symbol_at() {
        let grid = SymbolGrid::STANDARD;
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let cell = GridCell { row, column };
                assert_eq!(grid.cell_of(grid.symbol_at(cell)), Some(cell));
            }
        }
    }

    #[test]
    fn test_cell_of_rejects_unknown_symbols() {
        let grid = SymbolGrid::STANDARD;
        for symbol in ['A', '0', '1', 'f', 'l', '-', ' ', 'é'] {
            assert_eq!(grid.cell_of(symbol), None, "{:?} should be rejected", symbol);
        }
    }

    #[test]
    fn test_grid_cell_new_bounds() {
        assert!(GridCell::new(3, 3).is_some());
        assert!(GridCell::new(4, 0).is_none());
        assert!(GridCell::new(0, 4).is_none());
    }

    #[test]
    fn test_rows_north_first() {
        let rows: Vec<_> = SymbolGrid::STANDARD.rows().collect();
        assert_eq!(rows[0], ['F', 'C', '9', '8']);
        assert_eq!(rows[3], ['L', 'M', 'P', 'T']);
    }
}
