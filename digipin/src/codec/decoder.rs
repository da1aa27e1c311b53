//! Code → coordinate.

use tracing::debug;

use super::types::{round_coordinate, Code, CodecError, Coordinate, CODE_LENGTH, SEPARATOR};
use crate::region::{BoundingRegion, GridCell, RegionTable};

/// Decodes codes against a borrowed [`RegionTable`].
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    table: &'a RegionTable,
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a RegionTable) -> Self {
        Self { table }
    }

    /// Validates raw input and returns the parsed code.
    ///
    /// Separators are stripped first. Length is checked before symbols, and
    /// a bad symbol is reported with its zero-based position in the
    /// separator-free code.
    pub fn parse(&self, input: &str) -> Result<Code, CodecError> {
        self.resolve(input).map(|(code, _)| code)
    }

    /// Decodes a code to the centroid of its final cell, rounded to six
    /// fractional digits.
    pub fn decode(&self, input: &str) -> Result<Coordinate, CodecError> {
        let cell = self.decode_bounds(input)?;
        Ok(centroid(&cell))
    }

    /// Like [`Decoder::decode`] for an already-parsed code.
    pub fn decode_code(&self, code: &Code) -> Result<Coordinate, CodecError> {
        let cell = self.cell_bounds(code)?;
        Ok(centroid(&cell))
    }

    /// The final-level rectangle addressed by a code, unrounded.
    pub fn decode_bounds(&self, input: &str) -> Result<BoundingRegion, CodecError> {
        let (_, cells) = self.resolve(input)?;
        Ok(Levels::new(*self.table.bounds(), cells)
            .last()
            .unwrap_or(*self.table.bounds()))
    }

    /// The final-level rectangle for an already-parsed code.
    pub fn cell_bounds(&self, code: &Code) -> Result<BoundingRegion, CodecError> {
        Ok(self.levels(code)?.last().unwrap_or(*self.table.bounds()))
    }

    /// Iterates the rectangle selected at each level, coarsest first.
    pub fn levels(&self, code: &Code) -> Result<Levels, CodecError> {
        let mut cells = [GridCell { row: 0, column: 0 }; CODE_LENGTH];
        for (position, (slot, symbol)) in cells.iter_mut().zip(code.symbols()).enumerate() {
            *slot = self
                .table
                .cell_of(symbol)
                .ok_or(CodecError::InvalidSymbol { position, symbol })?;
        }
        Ok(Levels::new(*self.table.bounds(), cells))
    }

    fn resolve(&self, input: &str) -> Result<(Code, [GridCell; CODE_LENGTH]), CodecError> {
        let cleaned: Vec<char> = input.chars().filter(|&c| c != SEPARATOR).collect();
        if cleaned.len() != CODE_LENGTH {
            debug!(input, length = cleaned.len(), "rejected code with wrong length");
            return Err(CodecError::InvalidLength(cleaned.len()));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        let mut cells = [GridCell { row: 0, column: 0 }; CODE_LENGTH];
        for (position, &symbol) in cleaned.iter().enumerate() {
            let cell = self.table.cell_of(symbol).ok_or_else(|| {
                debug!(input, position, %symbol, "rejected code with unknown symbol");
                CodecError::InvalidSymbol { position, symbol }
            })?;
            symbols[position] = symbol as u8;
            cells[position] = cell;
        }

        Ok((Code::from_symbols(symbols), cells))
    }
}

impl Decoder<'static> {
    /// Decoder over the standard DIGIPIN table.
    pub fn standard() -> Self {
        Self::new(RegionTable::standard())
    }
}

fn centroid(cell: &BoundingRegion) -> Coordinate {
    let (lat, lon) = cell.center();
    Coordinate::new(round_coordinate(lat), round_coordinate(lon))
}

/// Iterator over the successively narrowed rectangles of a code.
///
/// Yields exactly [`CODE_LENGTH`] rectangles, each contained in the previous.
#[derive(Debug, Clone)]
pub struct Levels {
    region: BoundingRegion,
    cells: [GridCell; CODE_LENGTH],
    current: usize,
}

impl Levels {
    fn new(region: BoundingRegion, cells: [GridCell; CODE_LENGTH]) -> Self {
        Self {
            region,
            cells,
            current: 0,
        }
    }
}

impl Iterator for Levels {
    type Item = BoundingRegion;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = *self.cells.get(self.current)?;
        self.current += 1;
        self.region = self.region.subdivide(cell);
        Some(self.region)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CODE_LENGTH - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Levels {
    fn len(&self) -> usize {
        CODE_LENGTH - self.current
    }
}
