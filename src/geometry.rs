//! Survey geometry: the straight transect the image is draped along.
//!
//! The left edge of the image sits at `left_xy` and the right edge at
//! `right_xy`. The top row of the image is at depth (or time) `top_z` and the
//! bottom row at `bottom_z`.

use std::fmt;

use crate::config::Config;
use crate::error::Img2SegyError;

/// Converts a depth/time unit to the thousandths used for SEG-Y sample
/// intervals (milliseconds to microseconds, metres to millimetres).
pub const SUBUNITS_PER_UNIT: f64 = 1000.0;

/// A 2D point in map coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Free-text description of the coordinate reference system.
///
/// None of these strings is validated; they are carried into the textual
/// header and classified by [`crate::units`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordinateReferenceSystem {
    pub map_projection: String,
    pub zone_id: String,
    pub horizontal_units: String,
    pub vertical_units: String,
}

/// The transect and depth range of an image.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    left_xy: Point2,
    right_xy: Point2,
    top_z: f64,
    bottom_z: f64,
    coordinate_reference_system: CoordinateReferenceSystem,
}

impl Geometry {
    /// Creates a geometry from explicit values.
    pub fn new(
        left_xy: Point2,
        right_xy: Point2,
        top_z: f64,
        bottom_z: f64,
        coordinate_reference_system: CoordinateReferenceSystem,
    ) -> Self {
        Self {
            left_xy,
            right_xy,
            top_z,
            bottom_z,
            coordinate_reference_system,
        }
    }

    /// Builds the geometry from the `[position]` and
    /// `[coordinate-reference-system]` tables.
    ///
    /// # Errors
    /// Returns [`Img2SegyError::Configuration`] if any coordinate or depth is
    /// not a finite number.
    pub fn from_config(config: &Config) -> Result<Self, Img2SegyError> {
        let position = &config.position;
        let left_xy = Point2::new(position.left.x.value(), position.left.y.value());
        let right_xy = Point2::new(position.right.x.value(), position.right.y.value());
        let top_z = position.depth.top.value();
        let bottom_z = position.depth.bottom.value();

        if !left_xy.is_finite() {
            return Err(Img2SegyError::configuration(format!(
                "position.left must be finite, got {}",
                left_xy
            )));
        }
        if !right_xy.is_finite() {
            return Err(Img2SegyError::configuration(format!(
                "position.right must be finite, got {}",
                right_xy
            )));
        }
        if !top_z.is_finite() || !bottom_z.is_finite() {
            return Err(Img2SegyError::configuration(format!(
                "position.depth must be finite, got top={} bottom={}",
                top_z, bottom_z
            )));
        }
        if bottom_z < top_z {
            return Err(Img2SegyError::configuration(format!(
                "position.depth.bottom ({}) must not be above position.depth.top ({})",
                bottom_z, top_z
            )));
        }

        let crs = &config.coordinate_reference_system;
        Ok(Self::new(
            left_xy,
            right_xy,
            top_z,
            bottom_z,
            CoordinateReferenceSystem {
                map_projection: crs.map_projection.as_str().to_string(),
                zone_id: crs.zone_id.as_str().to_string(),
                horizontal_units: crs.horizontal_units.as_str().to_string(),
                vertical_units: crs.vertical_units.as_str().to_string(),
            },
        ))
    }

    #[inline]
    pub fn left_xy(&self) -> Point2 {
        self.left_xy
    }

    #[inline]
    pub fn right_xy(&self) -> Point2 {
        self.right_xy
    }

    #[inline]
    pub fn top_z(&self) -> f64 {
        self.top_z
    }

    #[inline]
    pub fn bottom_z(&self) -> f64 {
        self.bottom_z
    }

    pub fn coordinate_reference_system(&self) -> &CoordinateReferenceSystem {
        &self.coordinate_reference_system
    }

    /// Interpolates between the left and right positions.
    ///
    /// `proportion` is expected to lie in `[0, 1]`; zero yields exactly
    /// `left_xy` and one yields exactly `right_xy`.
    pub fn interpolate_xy(&self, proportion: f64) -> Point2 {
        Point2::new(
            lerp(self.left_xy.x, self.right_xy.x, proportion),
            lerp(self.left_xy.y, self.right_xy.y, proportion),
        )
    }

    /// The vertical sample interval for `num_samples` samples spanning the
    /// depth range.
    ///
    /// The result is in thousandths of the depth unit: microseconds when the
    /// depth is two-way time in milliseconds, millimetres when it is metres.
    ///
    /// # Errors
    /// Returns [`Img2SegyError::TooFewSamples`] when `num_samples < 2`, since
    /// the interval between samples is then undefined.
    pub fn sample_interval_z(&self, num_samples: usize) -> Result<f64, Img2SegyError> {
        if num_samples < 2 {
            return Err(Img2SegyError::TooFewSamples { num_samples });
        }
        Ok(SUBUNITS_PER_UNIT * (self.bottom_z - self.top_z) / (num_samples - 1) as f64)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Geometry(left_xy={}, right_xy={}, top_z={}, bottom_z={})",
            self.left_xy, self.right_xy, self.top_z, self.bottom_z
        )
    }
}

// Written so that t == 0 and t == 1 reproduce the endpoints exactly.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 {
        b
    } else {
        a + t * (b - a)
    }
}
