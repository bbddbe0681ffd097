//! The 400-byte binary reel header.

use byteorder::{BigEndian, ByteOrder};

use super::{
    DataSampleFormat, FixedLengthTraceFlag, MeasurementSystem, SegYRevision, TraceSorting,
};

/// Size of the binary reel header in bytes.
pub const BINARY_REEL_HEADER_LEN: usize = 400;

/// The binary reel header fields this crate writes.
///
/// Fields not represented here are written as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryReelHeader {
    /// Sample interval in thousandths of the vertical unit.
    pub sample_interval: u16,
    pub num_samples: u16,
    pub data_sample_format: DataSampleFormat,
    pub ensemble_fold: i16,
    pub trace_sorting: TraceSorting,
    pub measurement_system: MeasurementSystem,
    pub format_revision: SegYRevision,
    pub fixed_length_trace_flag: FixedLengthTraceFlag,
}

impl BinaryReelHeader {
    /// Creates a Revision 1 header for fixed-length traces with the given
    /// sampling; everything else takes its neutral value.
    pub fn new(sample_interval: u16, num_samples: u16, data_sample_format: DataSampleFormat) -> Self {
        Self {
            sample_interval,
            num_samples,
            data_sample_format,
            ensemble_fold: 0,
            trace_sorting: TraceSorting::Unknown,
            measurement_system: MeasurementSystem::Unknown,
            format_revision: SegYRevision::Revision1,
            fixed_length_trace_flag: FixedLengthTraceFlag::Fixed,
        }
    }

    /// Serializes the header in big-endian byte order.
    ///
    /// The original sample interval and sample count fields repeat the
    /// current ones.
    pub fn to_bytes(&self) -> [u8; BINARY_REEL_HEADER_LEN] {
        let mut buf = [0u8; BINARY_REEL_HEADER_LEN];
        BigEndian::write_u16(&mut buf[16..18], self.sample_interval);
        BigEndian::write_u16(&mut buf[18..20], self.sample_interval);
        BigEndian::write_u16(&mut buf[20..22], self.num_samples);
        BigEndian::write_u16(&mut buf[22..24], self.num_samples);
        BigEndian::write_i16(&mut buf[24..26], self.data_sample_format.code());
        BigEndian::write_i16(&mut buf[26..28], self.ensemble_fold);
        BigEndian::write_i16(&mut buf[28..30], self.trace_sorting.code());
        BigEndian::write_i16(&mut buf[54..56], self.measurement_system.code());
        BigEndian::write_u16(&mut buf[300..302], self.format_revision.code());
        BigEndian::write_i16(&mut buf[302..304], self.fixed_length_trace_flag.code());
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_offsets() {
        let mut header = BinaryReelHeader::new(2001, 2150, DataSampleFormat::Int8);
        header.ensemble_fold = 1;
        header.trace_sorting = TraceSorting::CommonMidpoint;
        header.measurement_system = MeasurementSystem::Meters;

        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), 400);
        // Offsets are file byte positions minus 3201.
        assert_eq!(BigEndian::read_u16(&bytes[16..18]), 2001);
        assert_eq!(BigEndian::read_u16(&bytes[18..20]), 2001);
        assert_eq!(BigEndian::read_u16(&bytes[20..22]), 2150);
        assert_eq!(BigEndian::read_i16(&bytes[24..26]), 8);
        assert_eq!(BigEndian::read_i16(&bytes[26..28]), 1);
        assert_eq!(BigEndian::read_i16(&bytes[28..30]), 2);
        assert_eq!(BigEndian::read_i16(&bytes[54..56]), 1);
        assert_eq!(BigEndian::read_u16(&bytes[300..302]), 0x0100);
        assert_eq!(BigEndian::read_i16(&bytes[302..304]), 1);
        assert_eq!(BigEndian::read_i16(&bytes[304..306]), 0);
    }

    #[test]
    fn test_unassigned_bytes_are_zero() {
        let bytes = BinaryReelHeader::new(1000, 10, DataSampleFormat::Int8).to_bytes();
        assert!(bytes[0..16].iter().all(|&b| b == 0));
        assert!(bytes[60..300].iter().all(|&b| b == 0));
        assert!(bytes[306..].iter().all(|&b| b == 0));
    }
}
