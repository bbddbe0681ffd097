//! The 240-byte Revision 1 trace header.

use byteorder::{BigEndian, ByteOrder};

use super::{to_i32_field, to_u16_field, CoordinateUnits};
use crate::error::Img2SegyError;

/// Size of a trace header in bytes.
pub const TRACE_HEADER_LEN: usize = 240;

/// The trace header fields this crate populates.
///
/// Coordinates and the sample interval are kept as computed (`f64`) and are
/// rounded to the integer field types by [`TraceHeader::to_bytes`]. Fields
/// left at their default are written as zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceHeader {
    /// Trace number within the original field record (bytes 13-16).
    pub trace_num: i64,
    /// Scalar applied to all coordinates (bytes 71-72).
    pub scalar_co: i16,
    pub source_x: f64,
    pub source_y: f64,
    pub group_x: f64,
    pub group_y: f64,
    pub coordinate_units: CoordinateUnits,
    pub num_samples: u16,
    /// Sample interval in thousandths of the vertical unit (bytes 117-118).
    pub sample_interval: f64,
    pub cdp_x: f64,
    pub cdp_y: f64,
    /// Crossline number for 3-D poststack data (bytes 193-196).
    pub crossline_number: i64,
}

impl TraceHeader {
    /// Serializes the header in big-endian byte order.
    ///
    /// # Errors
    /// Returns [`Img2SegyError::ValueOutOfRange`] if a value does not fit in
    /// its on-disk field after rounding.
    pub fn to_bytes(&self) -> Result<[u8; TRACE_HEADER_LEN], Img2SegyError> {
        let mut buf = [0u8; TRACE_HEADER_LEN];
        BigEndian::write_i32(
            &mut buf[12..16],
            to_i32_field("trace_num", self.trace_num as f64)?,
        );
        BigEndian::write_i16(&mut buf[70..72], self.scalar_co);
        BigEndian::write_i32(&mut buf[72..76], to_i32_field("source_x", self.source_x)?);
        BigEndian::write_i32(&mut buf[76..80], to_i32_field("source_y", self.source_y)?);
        BigEndian::write_i32(&mut buf[80..84], to_i32_field("group_x", self.group_x)?);
        BigEndian::write_i32(&mut buf[84..88], to_i32_field("group_y", self.group_y)?);
        BigEndian::write_i16(&mut buf[88..90], self.coordinate_units.code());
        BigEndian::write_u16(&mut buf[114..116], self.num_samples);
        BigEndian::write_u16(
            &mut buf[116..118],
            to_u16_field("sample_interval", self.sample_interval)?,
        );
        BigEndian::write_i32(&mut buf[180..184], to_i32_field("cdp_x", self.cdp_x)?);
        BigEndian::write_i32(&mut buf[184..188], to_i32_field("cdp_y", self.cdp_y)?);
        BigEndian::write_i32(
            &mut buf[192..196],
            to_i32_field("crossline_number", self.crossline_number as f64)?,
        );
        Ok(buf)
    }
}
