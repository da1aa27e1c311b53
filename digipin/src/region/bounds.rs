//! Bounding rectangle arithmetic.

use super::grid::{GridCell, GRID_SIZE};

/// Southern edge of the standard DIGIPIN region.
pub const MIN_LAT: f64 = 2.5;
/// Northern edge of the standard DIGIPIN region.
pub const MAX_LAT: f64 = 38.5;
/// Western edge of the standard DIGIPIN region.
pub const MIN_LON: f64 = 63.5;
/// Eastern edge of the standard DIGIPIN region.
pub const MAX_LON: f64 = 99.5;

/// An axis-aligned latitude/longitude rectangle.
///
/// Every rectangle produced by [`BoundingRegion::subdivide`] is non-degenerate
/// as long as its parent was, because the divisor is fixed at 4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    /// Southern edge in degrees
    pub min_lat: f64,
    /// Northern edge in degrees
    pub max_lat: f64,
    /// Western edge in degrees
    pub min_lon: f64,
    /// Eastern edge in degrees
    pub max_lon: f64,
}

impl BoundingRegion {
    /// The rectangle covering the whole standard DIGIPIN domain.
    pub const STANDARD: BoundingRegion = BoundingRegion {
        min_lat: MIN_LAT,
        max_lat: MAX_LAT,
        min_lon: MIN_LON,
        max_lon: MAX_LON,
    };

    /// Returns true when both edges are ordered and all four are finite.
    pub fn is_valid(&self) -> bool {
        self.min_lat.is_finite()
            && self.max_lat.is_finite()
            && self.min_lon.is_finite()
            && self.max_lon.is_finite()
            && self.min_lat < self.max_lat
            && self.min_lon < self.max_lon
    }

    /// Inclusive membership test on all four edges.
    ///
    /// NaN is never contained.
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Returns true if `other` lies entirely inside this rectangle.
    pub fn contains_region(&self, other: &BoundingRegion) -> bool {
        other.min_lat >= self.min_lat
            && other.max_lat <= self.max_lat
            && other.min_lon >= self.min_lon
            && other.max_lon <= self.max_lon
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Area in square degrees.
    pub fn area(&self) -> f64 {
        self.lat_span() * self.lon_span()
    }

    /// Height of one row band at this level.
    #[inline]
    pub fn lat_step(&self) -> f64 {
        self.lat_span() / GRID_SIZE as f64
    }

    /// Width of one column band at this level.
    #[inline]
    pub fn lon_step(&self) -> f64 {
        self.lon_span() / GRID_SIZE as f64
    }

    /// Latitude band `(low, high)` for a row, counted from the north.
    #[inline]
    pub fn lat_band(&self, row: usize) -> (f64, f64) {
        let step = self.lat_step();
        (
            self.max_lat - step * (row + 1) as f64,
            self.max_lat - step * row as f64,
        )
    }

    /// Longitude band `(low, high)` for a column, counted from the west.
    #[inline]
    pub fn lon_band(&self, column: usize) -> (f64, f64) {
        let step = self.lon_step();
        (
            self.min_lon + step * column as f64,
            self.min_lon + step * (column + 1) as f64,
        )
    }

    /// Narrows this rectangle to one cell of its 4×4 grid.
    pub fn subdivide(&self, cell: GridCell) -> BoundingRegion {
        let (min_lat, max_lat) = self.lat_band(cell.row);
        let (min_lon, max_lon) = self.lon_band(cell.column);
        BoundingRegion {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Geometric center as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_region_is_valid() {
        assert!(BoundingRegion::STANDARD.is_valid());
        assert_eq!(BoundingRegion::STANDARD.lat_span(), 36.0);
        assert_eq!(BoundingRegion::STANDARD.lon_span(), 36.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let region = BoundingRegion::STANDARD;
        assert!(region.contains(MIN_LAT, MIN_LON));
        assert!(region.contains(MAX_LAT, MAX_LON));
        assert!(!region.contains(MAX_LAT + 0.000001, MIN_LON));
        assert!(!region.contains(MIN_LAT, MIN_LON - 0.000001));
    }

    #[test]
    fn test_contains_rejects_nan() {
        let region = BoundingRegion::STANDARD;
        assert!(!region.contains(f64::NAN, 80.0));
        assert!(!region.contains(20.0, f64::NAN));
    }

    #[test]
    fn test_degenerate_region_is_invalid() {
        let flat = BoundingRegion {
            min_lat: 10.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 1.0,
        };
        assert!(!flat.is_valid());

        let inverted = BoundingRegion {
            min_lat: 0.0,
            max_lat: 1.0,
            min_lon: 5.0,
            max_lon: 4.0,
        };
        assert!(!inverted.is_valid());
    }

    #[test]
    fn test_bands_run_north_to_south_and_west_to_east() {
        let region = BoundingRegion::STANDARD;

        assert_eq!(region.lat_band(0), (29.5, 38.5));
        assert_eq!(region.lat_band(3), (2.5, 11.5));
        assert_eq!(region.lon_band(0), (63.5, 72.5));
        assert_eq!(region.lon_band(3), (90.5, 99.5));
    }

    #[test]
    fn test_subdivide_stays_inside_parent() {
        let region = BoundingRegion::STANDARD;
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let child = region.subdivide(GridCell { row, column });
                assert!(child.is_valid());
                assert!(region.contains_region(&child));
                assert_eq!(child.area() * 16.0, region.area());
            }
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(BoundingRegion::STANDARD.center(), (20.5, 81.5));
    }
}
