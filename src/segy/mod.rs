//! SEG-Y Revision 1 structures and writer.
//!
//! A SEG-Y file is laid out as:
//!
//! 1. a 3200-byte textual reel header (40 lines of 80 columns),
//! 2. a 400-byte binary reel header,
//! 3. one trace record per trace: a 240-byte trace header followed by the
//!    trace's samples.
//!
//! All binary values are big-endian. The writer is generic over the
//! [`Dataset`] trait: it pulls the reel headers once and then each trace
//! header and sample sequence in increasing trace order.
//!
//! Only the 1-byte two's complement integer sample format is supported.

pub mod binary_header;
pub mod textual_header;
pub mod trace_header;
mod writer;

pub use binary_header::{BinaryReelHeader, BINARY_REEL_HEADER_LEN};
pub use textual_header::{TextualReelHeader, TEXTUAL_REEL_HEADER_LEN};
pub use trace_header::{TraceHeader, TRACE_HEADER_LEN};
pub use writer::write_segy;

use crate::error::Img2SegyError;

/// The source of everything a SEG-Y file contains.
///
/// Implementors compute headers on demand; the writer calls
/// [`textual_reel_header`](Dataset::textual_reel_header) and
/// [`binary_reel_header`](Dataset::binary_reel_header) once, then
/// [`trace_header`](Dataset::trace_header) and
/// [`trace_samples`](Dataset::trace_samples) for each index in
/// `0..num_traces()`.
pub trait Dataset {
    fn textual_reel_header(&self) -> Result<TextualReelHeader, Img2SegyError>;

    fn binary_reel_header(&self) -> Result<BinaryReelHeader, Img2SegyError>;

    fn num_traces(&self) -> usize;

    fn trace_header(&self, trace_index: usize) -> Result<TraceHeader, Img2SegyError>;

    fn trace_samples(&self, trace_index: usize) -> Vec<i8>;
}

/// SEG-Y format revision, as stored in the binary reel header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegYRevision {
    Revision1,
}

impl SegYRevision {
    /// The on-disk code (major revision in the high byte).
    pub fn code(self) -> u16 {
        match self {
            SegYRevision::Revision1 => 0x0100,
        }
    }

    /// The label used on line C39 of the textual header.
    pub fn label(self) -> &'static str {
        match self {
            SegYRevision::Revision1 => "SEG Y REV1",
        }
    }
}

/// Data sample format code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSampleFormat {
    /// 1-byte two's complement integer.
    Int8,
}

impl DataSampleFormat {
    pub fn code(self) -> i16 {
        match self {
            DataSampleFormat::Int8 => 8,
        }
    }

    pub fn size_in_bytes(self) -> usize {
        match self {
            DataSampleFormat::Int8 => 1,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DataSampleFormat::Int8 => "1-byte, two's complement integer",
        }
    }
}

/// Trace sorting code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceSorting {
    Unknown,
    CommonMidpoint,
}

impl TraceSorting {
    pub fn code(self) -> i16 {
        match self {
            TraceSorting::Unknown => 0,
            TraceSorting::CommonMidpoint => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TraceSorting::Unknown => "UNKNOWN",
            TraceSorting::CommonMidpoint => "CDP",
        }
    }
}

/// Fixed length trace flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedLengthTraceFlag {
    Fixed,
}

impl FixedLengthTraceFlag {
    pub fn code(self) -> i16 {
        match self {
            FixedLengthTraceFlag::Fixed => 1,
        }
    }
}

/// Measurement system code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasurementSystem {
    Unknown,
    Meters,
    Feet,
}

impl MeasurementSystem {
    /// Looks up a measurement system by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "METERS" => Some(MeasurementSystem::Meters),
            "FEET" => Some(MeasurementSystem::Feet),
            _ => None,
        }
    }

    pub fn code(self) -> i16 {
        match self {
            MeasurementSystem::Unknown => 0,
            MeasurementSystem::Meters => 1,
            MeasurementSystem::Feet => 2,
        }
    }
}

/// Coordinate units code (trace header bytes 89-90).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateUnits {
    #[default]
    Unknown,
    Length,
    SecondsOfArc,
    DecimalDegrees,
    Dms,
}

impl CoordinateUnits {
    pub fn code(self) -> i16 {
        match self {
            CoordinateUnits::Unknown => 0,
            CoordinateUnits::Length => 1,
            CoordinateUnits::SecondsOfArc => 2,
            CoordinateUnits::DecimalDegrees => 3,
            CoordinateUnits::Dms => 4,
        }
    }
}

/// Rounds `value` to the nearest integer and checks it fits in an `i32`
/// header field.
pub(crate) fn to_i32_field(field: &'static str, value: f64) -> Result<i32, Img2SegyError> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Ok(rounded as i32)
    } else {
        Err(Img2SegyError::ValueOutOfRange { field, value })
    }
}

/// Rounds `value` to the nearest integer and checks it fits in a `u16`
/// header field.
pub(crate) fn to_u16_field(field: &'static str, value: f64) -> Result<u16, Img2SegyError> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= 0.0 && rounded <= u16::MAX as f64 {
        Ok(rounded as u16)
    } else {
        Err(Img2SegyError::ValueOutOfRange { field, value })
    }
}
