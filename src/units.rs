//! Classification of free-text unit names into SEG-Y unit codes.
//!
//! Unit strings come straight from the user's configuration, so many
//! spellings are accepted. Matching is case-insensitive. Strings that match
//! no known unit are kept (uppercased) rather than rejected: the result is
//! descriptive metadata, not a validation gate.

use std::fmt;

use crate::segy::{CoordinateUnits, MeasurementSystem};

const METERS: &[&str] = &["METERS", "METRES", "METER", "METRE", "M"];
const FEET: &[&str] = &["FEET", "FOOT", "FT", "'"];
const DECIMAL_DEGREES: &[&str] = &["DEC-DEGREES", "DECIMAL-DEGREES", "DEGREES", "DEG", "D", "°"];
const DMS: &[&str] = &["DMS"];
const ARCSECONDS: &[&str] = &[
    "ARCSECONDS",
    "ARC-SECONDS",
    "SECONDS-OF-ARC",
    "SECONDS",
    "S",
    "\"",
];

/// A classified unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Meters,
    Feet,
    DecimalDegrees,
    Dms,
    Arcseconds,
    /// An unrecognized unit, uppercased.
    Other(String),
}

impl Unit {
    /// The canonical name of the unit.
    ///
    /// Classifying a canonical name yields the same unit again.
    pub fn name(&self) -> &str {
        match self {
            Unit::Meters => "METERS",
            Unit::Feet => "FEET",
            Unit::DecimalDegrees => "DEC-DEGREES",
            Unit::Dms => "DMS",
            Unit::Arcseconds => "ARCSECONDS",
            Unit::Other(name) => name,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a horizontal (map coordinate) unit.
pub fn classify_horizontal(units: &str) -> Unit {
    let normalized = units.to_uppercase();
    let name = normalized.as_str();
    if METERS.contains(&name) {
        Unit::Meters
    } else if FEET.contains(&name) {
        Unit::Feet
    } else if DECIMAL_DEGREES.contains(&name) {
        Unit::DecimalDegrees
    } else if DMS.contains(&name) {
        Unit::Dms
    } else if ARCSECONDS.contains(&name) {
        Unit::Arcseconds
    } else {
        Unit::Other(normalized)
    }
}

/// Classifies a vertical (depth) unit.
///
/// Only lengths are recognized. SEG-Y has no field for the vertical unit of
/// a depth section, so this feeds the binary header's measurement system.
pub fn classify_vertical(units: &str) -> Unit {
    let normalized = units.to_uppercase();
    let name = normalized.as_str();
    if METERS.contains(&name) {
        Unit::Meters
    } else if FEET.contains(&name) {
        Unit::Feet
    } else {
        Unit::Other(normalized)
    }
}

/// The trace header coordinate units code for a horizontal unit.
pub fn coordinate_units(unit: &Unit) -> CoordinateUnits {
    match unit {
        Unit::Meters | Unit::Feet => CoordinateUnits::Length,
        Unit::Arcseconds => CoordinateUnits::SecondsOfArc,
        Unit::DecimalDegrees => CoordinateUnits::DecimalDegrees,
        Unit::Dms => CoordinateUnits::Dms,
        Unit::Other(_) => CoordinateUnits::Unknown,
    }
}

/// The binary header measurement system code for a vertical unit.
pub fn measurement_system(unit: &Unit) -> MeasurementSystem {
    MeasurementSystem::from_name(unit.name()).unwrap_or(MeasurementSystem::Unknown)
}
