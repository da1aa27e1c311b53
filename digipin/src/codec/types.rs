//! Codec value types and errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of symbols in a code, one per subdivision level.
pub const CODE_LENGTH: usize = 10;

/// Character inserted between symbol groups in the rendered form.
pub const SEPARATOR: char = '-';

/// Symbol counts after which a separator is rendered (`XXX-XXX-XXXX`).
pub const GROUP_BREAKS: [usize; 2] = [3, 6];

/// Fractional digits kept in decoded coordinates.
pub const DECIMAL_PLACES: i32 = 6;

/// A 10-symbol DIGIPIN code.
///
/// `Display` renders the grouped form `39J-49L-L8T4`; [`Code::compact`]
/// gives the bare 10 symbols. Parsing with [`FromStr`] validates against the
/// standard alphabet.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: [u8; CODE_LENGTH],
}

impl Code {
    /// The caller guarantees every byte is an ASCII symbol of some grid.
    pub(crate) fn from_symbols(symbols: [u8; CODE_LENGTH]) -> Self {
        Self { symbols }
    }

    /// Symbols in level order, coarsest first.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&s| s as char)
    }

    /// Symbol at a zero-based level, or `None` past the last level.
    pub fn symbol(&self, level: usize) -> Option<char> {
        self.symbols.get(level).map(|&s| s as char)
    }

    /// The 10 symbols without separators.
    pub fn compact(&self) -> String {
        self.symbols().collect()
    }

    /// Grouped rendering, identical to `to_string()`.
    pub fn grouped(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols().enumerate() {
            if GROUP_BREAKS.contains(&i) {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}

impl FromStr for Code {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::Decoder::standard().parse(s)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Coordinate lies outside the table's bounding region
    #[error("Coordinate ({lat}, {lon}) is outside the supported region")]
    OutOfDomain { lat: f64, lon: f64 },

    /// Code has the wrong number of symbols once separators are removed
    #[error("Invalid code length: expected 10 symbols, found {0}")]
    InvalidLength(usize),

    /// Code contains a symbol outside the alphabet
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },
}

/// Rounds to [`DECIMAL_PLACES`] fractional digits.
#[inline]
pub(crate) fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    (value * scale).round() / scale
}
