//! DIGIPIN encoding and decoding.
//!
//! Each of the 10 levels splits the working rectangle into a 4×4 grid and
//! records the symbol of the cell holding the point. Decoding replays the
//! same subdivisions and returns the final cell's centroid, which is within
//! half a cell (about 1.9 m at the equator for the standard region) of the
//! encoded point.
//!
//! # Example
//!
//! ```
//! let code = digipin::encode(28.622788, 77.213033).unwrap();
//! assert_eq!(code.to_string(), "39J-49L-L8T4");
//!
//! let coord = digipin::decode("39J-49L-L8T4").unwrap();
//! assert_eq!((coord.lat, coord.lon), (28.622793, 77.213049));
//! ```

mod decoder;
mod encoder;
mod types;

pub use decoder::{Decoder, Levels};
pub use encoder::Encoder;
pub use types::{
    Code, CodecError, Coordinate, CODE_LENGTH, DECIMAL_PLACES, GROUP_BREAKS, SEPARATOR,
};

/// Encodes a coordinate with the standard DIGIPIN table.
///
/// # Errors
///
/// Returns [`CodecError::OutOfDomain`] when the coordinate is outside
/// lat 2.5–38.5 / lon 63.5–99.5 (inclusive).
#[inline]
pub fn encode(lat: f64, lon: f64) -> Result<Code, CodecError> {
    Encoder::standard().encode(lat, lon)
}

/// Decodes a code with the standard DIGIPIN table.
///
/// Separators are optional. The result is rounded to six fractional digits.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] or [`CodecError::InvalidSymbol`]
/// for malformed input.
#[inline]
pub fn decode(code: &str) -> Result<Coordinate, CodecError> {
    Decoder::standard().decode(code)
}
