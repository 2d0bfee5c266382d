//! Fixed-point geographic locations.
//!
//! Coordinates are stored as `i32` degrees scaled by
//! [`COORDINATE_PRECISION`], which gives roughly centimetre resolution
//! and keeps a location at 8 bytes. `i32::MAX` in either coordinate marks
//! the location as undefined.

use std::fmt;

use crate::error::LocationError;

/// Scale factor between degrees and the stored fixed-point integers.
pub const COORDINATE_PRECISION: i32 = 10_000_000;

/// Sentinel stored in a coordinate that has no value.
const UNDEFINED_COORDINATE: i32 = i32::MAX;

/// A longitude/latitude pair in fixed-point representation.
///
/// Equality is exact integer equality of both coordinates.
/// [`Location::UNDEFINED`] equals itself, but a location undefined in only
/// one coordinate compares unequal to it and to other partial ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    /// The undefined location.
    pub const UNDEFINED: Self = Self {
        x: UNDEFINED_COORDINATE,
        y: UNDEFINED_COORDINATE,
    };

    /// Build a location from raw fixed-point coordinates.
    pub const fn from_fixed(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a location from longitude and latitude in degrees.
    ///
    /// Values are rounded to the nearest fixed-point step. Returns
    /// [`LocationError::OutOfRange`] for non-finite inputs and values whose
    /// scaled form does not fit an `i32` (or collides with the undefined
    /// sentinel).
    pub fn new(lon: f64, lat: f64) -> Result<Self, LocationError> {
        Ok(Self {
            x: degrees_to_fixed(lon)?,
            y: degrees_to_fixed(lat)?,
        })
    }

    /// Raw fixed-point x (longitude) coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Raw fixed-point y (latitude) coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Whether both coordinates carry a value.
    pub fn is_defined(&self) -> bool {
        self.x != UNDEFINED_COORDINATE && self.y != UNDEFINED_COORDINATE
    }

    /// Whether the location is defined and lies on the globe
    /// (`-180..=180` longitude, `-90..=90` latitude).
    pub fn is_valid(&self) -> bool {
        let max_x = 180 * COORDINATE_PRECISION;
        let max_y = 90 * COORDINATE_PRECISION;
        self.is_defined() && (-max_x..=max_x).contains(&self.x) && (-max_y..=max_y).contains(&self.y)
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> Result<f64, LocationError> {
        if !self.is_defined() {
            return Err(LocationError::Undefined);
        }
        Ok(fixed_to_degrees(self.x))
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> Result<f64, LocationError> {
        if !self.is_defined() {
            return Err(LocationError::Undefined);
        }
        Ok(fixed_to_degrees(self.y))
    }

    /// Encode as 8 little-endian bytes: `x` then `y`.
    pub fn to_le_bytes(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.x.to_le_bytes());
        out[4..].copy_from_slice(&self.y.to_le_bytes());
        out
    }

    /// Decode from 8 little-endian bytes.
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        let [x0, x1, x2, x3, y0, y1, y2, y3] = bytes;
        Self {
            x: i32::from_le_bytes([x0, x1, x2, x3]),
            y: i32::from_le_bytes([y0, y1, y2, y3]),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return write!(f, "(undefined)");
        }
        write!(
            f,
            "({:.7},{:.7})",
            fixed_to_degrees(self.x),
            fixed_to_degrees(self.y)
        )
    }
}

fn degrees_to_fixed(value: f64) -> Result<i32, LocationError> {
    let scaled = (value * f64::from(COORDINATE_PRECISION)).round();
    if !scaled.is_finite() || scaled < f64::from(i32::MIN) || scaled >= f64::from(i32::MAX) {
        return Err(LocationError::OutOfRange { value });
    }
    Ok(scaled as i32)
}

fn fixed_to_degrees(value: i32) -> f64 {
    f64::from(value) / f64::from(COORDINATE_PRECISION)
}
