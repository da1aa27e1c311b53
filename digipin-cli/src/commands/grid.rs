//! `digipin grid` command: describe the standard region table.

use digipin::region::GRID_SIZE;
use digipin::RegionTable;

use crate::error::CliError;

/// Approximate length of one degree of latitude, in metres.
const METRES_PER_DEGREE: f64 = 111_320.0;

/// Print the region bounds, the symbol grid and the final cell size.
pub fn run() -> Result<(), CliError> {
    let table = RegionTable::standard();
    let bounds = table.bounds();

    println!("DIGIPIN Region");
    println!("==============");
    println!();
    println!("Latitude:  {} to {}", bounds.min_lat, bounds.max_lat);
    println!("Longitude: {} to {}", bounds.min_lon, bounds.max_lon);
    println!();
    println!("Symbol grid (north at top, west at left):");
    for row in table.grid().rows() {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        println!("  {}", line.join(" "));
    }

    let (lat_cell, lon_cell) = final_cell_degrees(bounds.lat_span(), bounds.lon_span());
    println!();
    println!(
        "Final cell: {:.8}° x {:.8}° (about {:.1} m at the equator)",
        lat_cell,
        lon_cell,
        lat_cell * METRES_PER_DEGREE
    );

    Ok(())
}

/// Size of a level-10 cell for the given region spans.
fn final_cell_degrees(lat_span: f64, lon_span: f64) -> (f64, f64) {
    let divisions = (GRID_SIZE as f64).powi(digipin::codec::CODE_LENGTH as i32);
    (lat_span / divisions, lon_span / divisions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_cell_size() {
        let (lat, lon) = final_cell_degrees(36.0, 36.0);
        assert_eq!(lat, 36.0 / 1_048_576.0);
        assert_eq!(lat, lon);
        assert!((lat * METRES_PER_DEGREE - 3.82).abs() < 0.01);
    }
}
