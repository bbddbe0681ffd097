//! Placement policy for computed trace positions and trace numbers.
//!
//! SEG-Y has three coordinate pairs per trace (source, group and CDP) and
//! several fields that can carry a trace number. Different software reads
//! different fields, so the conversion lets the user choose which ones are
//! filled. All enabled coordinate pairs receive the same interpolated point.

use crate::config::Config;
use crate::error::Img2SegyError;
use crate::geometry::Point2;
use crate::segy::TraceHeader;

/// Decides which trace header fields receive computed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceHeaderMapper {
    pub place_position_in_source_coords: bool,
    pub place_position_in_group_coords: bool,
    pub place_position_in_cdp_coords: bool,
    pub place_trace_number_in_trace_number: bool,
    pub place_trace_number_in_crossline_number: bool,
    pub base_trace_number: i64,
}

/// Coordinate fields produced by [`TraceHeaderMapper::position`].
///
/// `None` means the corresponding pair is not written.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionFields {
    pub source: Option<Point2>,
    pub group: Option<Point2>,
    pub cdp: Option<Point2>,
}

impl PositionFields {
    /// Copies the present coordinate pairs into `header`.
    pub fn apply(&self, header: &mut TraceHeader) {
        if let Some(p) = self.source {
            header.source_x = p.x;
            header.source_y = p.y;
        }
        if let Some(p) = self.group {
            header.group_x = p.x;
            header.group_y = p.y;
        }
        if let Some(p) = self.cdp {
            header.cdp_x = p.x;
            header.cdp_y = p.y;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.group.is_none() && self.cdp.is_none()
    }
}

/// Trace number fields produced by [`TraceHeaderMapper::trace_number`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceNumberFields {
    pub trace_num: Option<i64>,
    pub crossline_number: Option<i64>,
}

impl TraceNumberFields {
    /// Copies the present trace numbers into `header`.
    pub fn apply(&self, header: &mut TraceHeader) {
        if let Some(n) = self.trace_num {
            header.trace_num = n;
        }
        if let Some(n) = self.crossline_number {
            header.crossline_number = n;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trace_num.is_none() && self.crossline_number.is_none()
    }
}

impl TraceHeaderMapper {
    /// Builds the mapper from the `[segy.trace-position]` and
    /// `[segy.trace-number]` tables.
    ///
    /// Enabling no position field, or no trace number field, is accepted
    /// here; [`TraceHeaderMapper::has_position_field`] and
    /// [`TraceHeaderMapper::has_trace_number_field`] let callers report it.
    pub fn from_config(config: &Config) -> Self {
        let position = &config.segy.trace_position;
        let number = &config.segy.trace_number;
        Self {
            place_position_in_source_coords: position.use_source_coord_fields,
            place_position_in_group_coords: position.use_group_coord_fields,
            place_position_in_cdp_coords: position.use_cdp_coord_fields,
            place_trace_number_in_trace_number: number.use_trace_number_field,
            place_trace_number_in_crossline_number: number.use_crossline_number_field,
            base_trace_number: position.base_trace_number,
        }
    }

    pub fn has_position_field(&self) -> bool {
        self.place_position_in_source_coords
            || self.place_position_in_group_coords
            || self.place_position_in_cdp_coords
    }

    pub fn has_trace_number_field(&self) -> bool {
        self.place_trace_number_in_trace_number || self.place_trace_number_in_crossline_number
    }

    /// Scales `p` by `xy_scalar` and places it in each enabled coordinate pair.
    ///
    /// # Errors
    /// Returns [`Img2SegyError::InvalidScalar`] if `xy_scalar` is zero.
    pub fn position(&self, p: Point2, xy_scalar: f64) -> Result<PositionFields, Img2SegyError> {
        let scaled = Point2::new(scale(p.x, xy_scalar)?, scale(p.y, xy_scalar)?);
        Ok(PositionFields {
            source: self.place_position_in_source_coords.then_some(scaled),
            group: self.place_position_in_group_coords.then_some(scaled),
            cdp: self.place_position_in_cdp_coords.then_some(scaled),
        })
    }

    /// Computes the trace number for `trace_index` and places it in each
    /// enabled field.
    ///
    /// # Errors
    /// Returns [`Img2SegyError::ValueOutOfRange`] if the base trace number
    /// plus `trace_index` does not fit in an `i64`.
    pub fn trace_number(&self, trace_index: usize) -> Result<TraceNumberFields, Img2SegyError> {
        let number = i64::try_from(trace_index)
            .ok()
            .and_then(|index| self.base_trace_number.checked_add(index))
            .ok_or(Img2SegyError::ValueOutOfRange {
                field: "trace_num",
                value: self.base_trace_number as f64 + trace_index as f64,
            })?;
        Ok(TraceNumberFields {
            trace_num: self.place_trace_number_in_trace_number.then_some(number),
            crossline_number: self
                .place_trace_number_in_crossline_number
                .then_some(number),
        })
    }
}

impl Default for TraceHeaderMapper {
    fn default() -> Self {
        Self {
            place_position_in_source_coords: true,
            place_position_in_group_coords: true,
            place_position_in_cdp_coords: true,
            place_trace_number_in_trace_number: true,
            place_trace_number_in_crossline_number: true,
            base_trace_number: 0,
        }
    }
}

/// Applies a SEG-Y coordinate scalar: positive values divide, negative
/// values multiply.
pub fn scale(coord: f64, xy_scalar: f64) -> Result<f64, Img2SegyError> {
    if xy_scalar > 0.0 {
        Ok(coord / xy_scalar)
    } else if xy_scalar < 0.0 {
        Ok(coord * xy_scalar)
    } else {
        Err(Img2SegyError::InvalidScalar { scalar: xy_scalar })
    }
}
