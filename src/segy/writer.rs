use std::io::Write;

use super::Dataset;
use crate::error::Img2SegyError;

/// Writes a complete SEG-Y file for `dataset` to `writer`.
///
/// The reel headers are written first, followed by each trace in increasing
/// index order. Every trace must contain exactly the number of samples
/// declared in the binary reel header.
///
/// The writer is not flushed; callers wrapping a file in a `BufWriter`
/// should flush it themselves so that write errors are observed.
///
/// # Errors
/// Returns the first error raised while computing a header, an
/// [`Img2SegyError::TraceLength`] error for a trace of the wrong length, or
/// an I/O error from `writer`.
pub fn write_segy<W, D>(writer: &mut W, dataset: &D) -> Result<(), Img2SegyError>
where
    W: Write,
    D: Dataset + ?Sized,
{
    let textual = dataset.textual_reel_header()?;
    let binary = dataset.binary_reel_header()?;
    writer.write_all(&textual.to_bytes())?;
    writer.write_all(&binary.to_bytes())?;

    let expected = binary.num_samples as usize;
    let mut record = Vec::with_capacity(expected);
    for trace_index in 0..dataset.num_traces() {
        let header = dataset.trace_header(trace_index)?;
        writer.write_all(&header.to_bytes()?)?;

        let samples = dataset.trace_samples(trace_index);
        if samples.len() != expected {
            return Err(Img2SegyError::TraceLength {
                trace_index,
                expected,
                actual: samples.len(),
            });
        }
        record.clear();
        record.extend(samples.iter().map(|&s| s as u8));
        writer.write_all(&record)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segy::{
        BinaryReelHeader, DataSampleFormat, TextualReelHeader, TraceHeader,
        BINARY_REEL_HEADER_LEN, TEXTUAL_REEL_HEADER_LEN, TRACE_HEADER_LEN,
    };

    /// A two-trace dataset whose second trace can be made short.
    struct Fixed {
        short_trace: bool,
    }

    impl Dataset for Fixed {
        fn textual_reel_header(&self) -> Result<TextualReelHeader, Img2SegyError> {
            Ok(TextualReelHeader::from_lines(&["test"]))
        }

        fn binary_reel_header(&self) -> Result<BinaryReelHeader, Img2SegyError> {
            Ok(BinaryReelHeader::new(1000, 3, DataSampleFormat::Int8))
        }

        fn num_traces(&self) -> usize {
            2
        }

        fn trace_header(&self, trace_index: usize) -> Result<TraceHeader, Img2SegyError> {
            Ok(TraceHeader {
                trace_num: trace_index as i64 + 1,
                ..Default::default()
            })
        }

        fn trace_samples(&self, trace_index: usize) -> Vec<i8> {
            if self.short_trace && trace_index == 1 {
                vec![0, 1]
            } else {
                vec![-128, 0, 127]
            }
        }
    }

    #[test]
    fn test_writes_headers_then_traces() {
        let mut out = Vec::new();
        write_segy(&mut out, &Fixed { short_trace: false }).expect("write");

        let trace_len = TRACE_HEADER_LEN + 3;
        assert_eq!(
            out.len(),
            TEXTUAL_REEL_HEADER_LEN + BINARY_REEL_HEADER_LEN + 2 * trace_len
        );
        assert!(out.starts_with(b"C01 test"));

        let first_samples = TEXTUAL_REEL_HEADER_LEN + BINARY_REEL_HEADER_LEN + TRACE_HEADER_LEN;
        assert_eq!(&out[first_samples..first_samples + 3], &[0x80, 0x00, 0x7f]);
    }

    #[test]
    fn test_rejects_short_trace() {
        let mut out = Vec::new();
        let err = write_segy(&mut out, &Fixed { short_trace: true }).unwrap_err();
        assert!(matches!(
            err,
            Img2SegyError::TraceLength {
                trace_index: 1,
                expected: 3,
                actual: 2
            }
        ));
    }
}
