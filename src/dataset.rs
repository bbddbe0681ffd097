//! An image presented as a SEG-Y dataset.
//!
//! Each image column is one trace and each row one sample, top to bottom.
//! Pixel intensities are converted to 8-bit grayscale and shifted into the
//! signed range, so black becomes -128 and white 127.

use std::path::Path;

use chrono::{Local, NaiveDate};
use image::{DynamicImage, GrayImage};

use crate::error::Img2SegyError;
use crate::geometry::{Geometry, SUBUNITS_PER_UNIT};
use crate::mapper::TraceHeaderMapper;
use crate::segy::textual_header::{format_standard_textual_header, StandardTextualFields};
use crate::segy::{
    to_u16_field, BinaryReelHeader, DataSampleFormat, Dataset, SegYRevision, TextualReelHeader,
    TraceHeader, TraceSorting,
};
use crate::units::{self, Unit};

const TOOL_NAME: &str = "img2segy";
const TOOL_ATTRIBUTION: &str = "img2segy <https://github.com/sixty-north/img2segy> by Sixty North AS";

/// Converts an 8-bit intensity into a signed 8-bit amplitude.
#[inline]
pub fn amplitude(intensity: u8) -> i8 {
    intensity.wrapping_sub(128) as i8
}

/// A grayscale image draped along a [`Geometry`].
#[derive(Clone, Debug)]
pub struct ImageDataset<'a> {
    width: usize,
    height: usize,
    /// Row-major amplitudes, `height * width` long.
    samples: Vec<i8>,
    geometry: &'a Geometry,
    trace_header_mapper: &'a TraceHeaderMapper,
    // Reserved for choosing a scalar from the coordinate magnitudes; always 1.
    xy_scalar: f64,
    source_name: Option<String>,
    conversion_date: NaiveDate,
}

impl<'a> ImageDataset<'a> {
    /// Wraps a decoded image of any pixel type.
    pub fn new(
        image: &DynamicImage,
        geometry: &'a Geometry,
        trace_header_mapper: &'a TraceHeaderMapper,
    ) -> Self {
        Self::from_luma(&image.to_luma8(), geometry, trace_header_mapper)
    }

    /// Wraps an 8-bit grayscale image.
    pub fn from_luma(
        image: &GrayImage,
        geometry: &'a Geometry,
        trace_header_mapper: &'a TraceHeaderMapper,
    ) -> Self {
        let samples = image.as_raw().iter().map(|&p| amplitude(p)).collect();
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            samples,
            geometry,
            trace_header_mapper,
            xy_scalar: 1.0,
            source_name: None,
            conversion_date: Local::now().date_naive(),
        }
    }

    /// Records the image file name for the textual header.
    ///
    /// Only the final path component is kept.
    pub fn with_source_path(mut self, path: &Path) -> Self {
        self.source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty());
        self
    }

    /// Overrides the conversion date shown in the textual header.
    pub fn with_conversion_date(mut self, date: NaiveDate) -> Self {
        self.conversion_date = date;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples_per_trace(&self) -> usize {
        self.height
    }

    /// The vertical interval between samples, in thousandths of the depth unit.
    pub fn sample_interval(&self) -> Result<f64, Img2SegyError> {
        self.geometry.sample_interval_z(self.samples_per_trace())
    }

    fn data_sample_format(&self) -> DataSampleFormat {
        DataSampleFormat::Int8
    }

    fn coordinate_units(&self) -> Unit {
        units::classify_horizontal(&self.geometry.coordinate_reference_system().horizontal_units)
    }

    fn measurement_system(&self) -> Unit {
        units::classify_vertical(&self.geometry.coordinate_reference_system().vertical_units)
    }

    fn num_samples_field(&self) -> Result<u16, Img2SegyError> {
        u16::try_from(self.samples_per_trace()).map_err(|_| Img2SegyError::ValueOutOfRange {
            field: "num_samples",
            value: self.samples_per_trace() as f64,
        })
    }

    fn image_filename(&self) -> &str {
        self.source_name.as_deref().unwrap_or("<unknown>")
    }

    fn provenance_lines(&self, sample_interval: f64) -> Vec<String> {
        let crs = self.geometry.coordinate_reference_system();
        let left = self.geometry.left_xy();
        let right = self.geometry.right_xy();
        vec![
            format!(
                "Converted from {} by {} {}",
                self.image_filename(),
                TOOL_NAME,
                env!("CARGO_PKG_VERSION")
            ),
            format!("on {}", self.conversion_date.format("%Y-%m-%d")),
            TOOL_ATTRIBUTION.to_string(),
            format!("Image size: {}x{}", self.width, self.height),
            String::new(),
            format!(
                "Coordinate reference system : {} {}",
                crs.map_projection, crs.zone_id
            ),
            format!("Horizontal (xy) units : {}", self.coordinate_units()),
            format!("Vertical (z/depth) units : {}", self.measurement_system()),
            String::new(),
            format!("Left : x = {} y = {}", left.x, left.y),
            format!("Right  : x = {} y = {}", right.x, right.y),
            format!(
                "Depth : top-z = {} bottom-z = {}",
                self.geometry.top_z(),
                self.geometry.bottom_z()
            ),
            String::new(),
            format!(
                "Data sample format : {}",
                self.data_sample_format().description()
            ),
            format!(
                "Vertical sample interval : {} {}/{}",
                sample_interval,
                self.measurement_system(),
                SUBUNITS_PER_UNIT
            ),
        ]
    }
}

impl Dataset for ImageDataset<'_> {
    fn textual_reel_header(&self) -> Result<TextualReelHeader, Img2SegyError> {
        let sample_interval = self.sample_interval()?;
        let crs = self.geometry.coordinate_reference_system();
        let measurement_system = self.measurement_system();
        let coordinate_units = self.coordinate_units();
        Ok(format_standard_textual_header(&StandardTextualFields {
            revision: SegYRevision::Revision1,
            samples_per_trace: self.samples_per_trace(),
            sample_interval,
            bytes_per_sample: self.data_sample_format().size_in_bytes(),
            measurement_system: measurement_system.name(),
            trace_sorting: TraceSorting::CommonMidpoint.label(),
            map_projection: &crs.map_projection,
            zone_id: &crs.zone_id,
            coordinate_units: coordinate_units.name(),
            unassigned: self.provenance_lines(sample_interval),
        }))
    }

    fn binary_reel_header(&self) -> Result<BinaryReelHeader, Img2SegyError> {
        let sample_interval = to_u16_field("sample_interval", self.sample_interval()?)?;
        let mut header = BinaryReelHeader::new(
            sample_interval,
            self.num_samples_field()?,
            self.data_sample_format(),
        );
        header.trace_sorting = TraceSorting::CommonMidpoint;
        header.measurement_system = units::measurement_system(&self.measurement_system());
        header.ensemble_fold = 1;
        Ok(header)
    }

    fn num_traces(&self) -> usize {
        self.width
    }

    fn trace_header(&self, trace_index: usize) -> Result<TraceHeader, Img2SegyError> {
        // Divides by the trace count, not count - 1, so the last trace stops
        // one trace spacing short of the right-hand endpoint.
        let proportion = trace_index as f64 / self.num_traces() as f64;
        let position = self.geometry.interpolate_xy(proportion);

        let mut header = TraceHeader {
            scalar_co: self.xy_scalar as i16,
            coordinate_units: units::coordinate_units(&self.coordinate_units()),
            num_samples: self.num_samples_field()?,
            sample_interval: self.sample_interval()?,
            ..Default::default()
        };
        self.trace_header_mapper
            .position(position, self.xy_scalar)?
            .apply(&mut header);
        self.trace_header_mapper
            .trace_number(trace_index)?
            .apply(&mut header);
        Ok(header)
    }

    fn trace_samples(&self, trace_index: usize) -> Vec<i8> {
        self.samples
            .iter()
            .skip(trace_index)
            .step_by(self.width)
            .copied()
            .collect()
    }
}
