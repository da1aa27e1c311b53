//! Coordinate → code.

use tracing::debug;

use super::types::{Code, CodecError, CODE_LENGTH};
use crate::region::{BoundingRegion, GridCell, RegionTable, GRID_SIZE};

/// Encodes coordinates against a borrowed [`RegionTable`].
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    table: &'a RegionTable,
}

impl<'a> Encoder<'a> {
    pub fn new(table: &'a RegionTable) -> Self {
        Self { table }
    }

    /// Encodes a coordinate into a 10-symbol code.
    ///
    /// Bounds are inclusive on all four edges. Anything outside, including
    /// NaN, is rejected with [`CodecError::OutOfDomain`].
    pub fn encode(&self, lat: f64, lon: f64) -> Result<Code, CodecError> {
        let mut region = *self.table.bounds();
        if !region.contains(lat, lon) {
            debug!(lat, lon, "coordinate outside bounding region");
            return Err(CodecError::OutOfDomain { lat, lon });
        }

        let mut symbols = [0u8; CODE_LENGTH];
        for slot in symbols.iter_mut() {
            let cell = GridCell {
                row: select_row(&region, lat),
                column: select_column(&region, lon),
            };
            *slot = self.table.symbol_at(cell) as u8;
            region = region.subdivide(cell);
        }

        Ok(Code::from_symbols(symbols))
    }
}

impl Encoder<'static> {
    /// Encoder over the standard DIGIPIN table.
    pub fn standard() -> Self {
        Self::new(RegionTable::standard())
    }
}

/// Row for `lat`, scanning bands from the north.
///
/// Bands are closed below and open above. A point on the region's northern
/// edge belongs to row 0; any other miss falls to the southern row.
fn select_row(region: &BoundingRegion, lat: f64) -> usize {
    (0..GRID_SIZE)
        .find(|&row| {
            let (low, high) = region.lat_band(row);
            lat >= low && lat < high
        })
        .unwrap_or(if lat == region.max_lat { 0 } else { GRID_SIZE - 1 })
}

/// Column for `lon`, scanning bands from the west.
///
/// Bands are closed below and open above, except that the easternmost band
/// claims anything the earlier bands did not.
fn select_column(region: &BoundingRegion, lon: f64) -> usize {
    (0..GRID_SIZE - 1)
        .find(|&column| {
            let (low, high) = region.lon_band(column);
            lon >= low && lon < high
        })
        .unwrap_or(GRID_SIZE - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_row_interior_bands() {
        let region = BoundingRegion::STANDARD;
        assert_eq!(select_row(&region, 35.0), 0);
        assert_eq!(select_row(&region, 25.0), 1);
        assert_eq!(select_row(&region, 15.0), 2);
        assert_eq!(select_row(&region, 5.0), 3);
    }

    #[test]
    fn test_select_row_edge_belongs_to_band_above() {
        // 29.5 is the lower edge of row 0 and the upper edge of row 1
        let region = BoundingRegion::STANDARD;
        assert_eq!(select_row(&region, 29.5), 0);
        assert_eq!(select_row(&region, 20.5), 1);
        assert_eq!(select_row(&region, 11.5), 2);
    }

    #[test]
    fn test_select_row_outer_edges() {
        let region = BoundingRegion::STANDARD;
        assert_eq!(select_row(&region, region.max_lat), 0);
        assert_eq!(select_row(&region, region.min_lat), 3);
    }

    #[test]
    fn test_select_column_interior_bands() {
        let region = BoundingRegion::STANDARD;
        assert_eq!(select_column(&region, 65.0), 0);
        assert_eq!(select_column(&region, 75.0), 1);
        assert_eq!(select_column(&region, 85.0), 2);
        assert_eq!(select_column(&region, 95.0), 3);
    }

    #[test]
    fn test_select_column_edge_belongs_to_band_east() {
        let region = BoundingRegion::STANDARD;
        assert_eq!(select_column(&region, 72.5), 1);
        assert_eq!(select_column(&region, 81.5), 2);
        assert_eq!(select_column(&region, 90.5), 3);
    }

    #[test]
    fn test_select_column_last_band_absorbs_east_edge() {
        let region = BoundingRegion::STANDARD;
        assert_eq!(select_column(&region, region.min_lon), 0);
        assert_eq!(select_column(&region, region.max_lon), 3);
    }

    #[test]
    fn test_encoder_rejects_nan() {
        let encoder = Encoder::standard();
        assert!(matches!(
            encoder.encode(f64::NAN, 80.0),
            Err(CodecError::OutOfDomain { .. })
        ));
        assert!(matches!(
            encoder.encode(20.0, f64::NAN),
            Err(CodecError::OutOfDomain { .. })
        ));
    }
}
