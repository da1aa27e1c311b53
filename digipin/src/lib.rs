//! DIGIPIN - hierarchical grid codes for locations in India
//!
//! A DIGIPIN is a 10-symbol code that addresses a cell of roughly 3.8 m × 3.8 m
//! inside the bounding region lat 2.5°–38.5°N, lon 63.5°–99.5°E. Each symbol
//! selects one cell of a 4×4 grid; each subsequent symbol refines that cell.
//!
//! The codec is pure and stateless. [`encode`] and [`decode`] use the
//! built-in [`region::RegionTable`]; [`Encoder`] and [`Decoder`] accept any
//! table.
//!
//! ```
//! use digipin::{decode, encode};
//!
//! let code = encode(12.9716, 77.5946)?;
//! assert_eq!(code.to_string(), "4P3-JK8-52C9");
//!
//! let coord = decode("4P3-JK8-52C9")?;
//! assert!((coord.lat - 12.9716).abs() < 0.0001);
//! # Ok::<(), digipin::CodecError>(())
//! ```

pub mod codec;
pub mod config;
pub mod logging;
pub mod region;

pub use codec::{decode, encode, Code, CodecError, Coordinate, Decoder, Encoder};
pub use region::{BoundingRegion, RegionTable};
