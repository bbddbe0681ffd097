//! Typed conversion configuration loaded from TOML.
//!
//! The configuration describes where the image sits in the world (a straight
//! transect between two map positions and a depth/time range) and how the
//! computed values are placed into SEG-Y trace header fields.
//!
//! # Example
//!
//! ```toml
//! [position.left]
//! x = 527501
//! y = 4840781
//!
//! [position.right]
//! x = 527326
//! y = 4829018
//!
//! [position.depth]
//! top = 0
//! bottom = 4300
//!
//! [coordinate-reference-system]
//! map-projection = "WGS-84 UTM"
//! zone-id = "19"
//! horizontal-units = "m"
//! vertical-units = "m"
//!
//! [segy.trace-position]
//! use-source-coord-fields = true
//! use-group-coord-fields = true
//! use-cdp-coord-fields = true
//! base-trace-number = 0
//!
//! [segy.trace-number]
//! use-trace-number-field = true
//! use-crossline-number-field = true
//! ```
//!
//! Required tables are `position.left`, `position.right`, `position.depth`,
//! `segy.trace-position` and `segy.trace-number`. The coordinate reference
//! system is optional and every one of its entries defaults to an empty string.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::Img2SegyError;

/// The complete configuration for one conversion.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Geographic placement of the image.
    pub position: PositionConfig,

    /// Free-text description of the coordinate reference system.
    #[serde(default)]
    pub coordinate_reference_system: CrsConfig,

    /// Trace header field placement policy.
    pub segy: SegyConfig,
}

/// The `[position]` table.
#[derive(Clone, Debug, Deserialize)]
pub struct PositionConfig {
    /// Map position of the left-hand image column.
    pub left: XyConfig,
    /// Map position of the right-hand image column.
    pub right: XyConfig,
    /// Depth (or time) of the top and bottom image rows.
    pub depth: DepthConfig,
}

/// A map position.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct XyConfig {
    pub x: Number,
    pub y: Number,
}

/// The `[position.depth]` table. `bottom` must not be less than `top`.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct DepthConfig {
    pub top: Number,
    pub bottom: Number,
}

/// The `[coordinate-reference-system]` table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrsConfig {
    #[serde(default)]
    pub map_projection: Text,
    #[serde(default)]
    pub zone_id: Text,
    #[serde(default)]
    pub horizontal_units: Text,
    #[serde(default)]
    pub vertical_units: Text,
}

/// The `[segy]` table.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SegyConfig {
    pub trace_position: TracePositionConfig,
    pub trace_number: TraceNumberConfig,
}

/// The `[segy.trace-position]` table.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TracePositionConfig {
    #[serde(default = "default_true")]
    pub use_source_coord_fields: bool,
    #[serde(default = "default_true")]
    pub use_group_coord_fields: bool,
    #[serde(default = "default_true")]
    pub use_cdp_coord_fields: bool,
    #[serde(default)]
    pub base_trace_number: i64,
}

/// The `[segy.trace-number]` table.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TraceNumberConfig {
    #[serde(default = "default_true")]
    pub use_trace_number_field: bool,
    #[serde(default = "default_true")]
    pub use_crossline_number_field: bool,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    /// Returns [`Img2SegyError::Io`] if the file cannot be read and
    /// [`Img2SegyError::ConfigParse`] if it is not valid TOML or does not
    /// match the expected schema.
    pub fn load(path: &Path) -> Result<Self, Img2SegyError> {
        let text = fs::read_to_string(path).map_err(Img2SegyError::Io)?;
        parse_config(&text, path)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// Useful for testing and fuzzing without file I/O.
    pub fn from_toml_str(text: &str) -> Result<Self, Img2SegyError> {
        parse_config(text, Path::new("<string>"))
    }
}

fn parse_config(text: &str, path: &Path) -> Result<Config, Img2SegyError> {
    toml::from_str(text).map_err(|source| Img2SegyError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Loosely-typed leaf values
// ============================================================================

/// A numeric configuration value.
///
/// Accepts TOML integers, floats, and strings holding a number, and always
/// yields an `f64`. Anything else is rejected during deserialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

impl Number {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a string containing a number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
                Ok(Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
                Ok(Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
                Ok(Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Number, E> {
                v.trim()
                    .parse::<f64>()
                    .map(Number)
                    .map_err(|_| E::custom(format!("could not convert string to float: '{}'", v)))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

/// A free-text configuration value.
///
/// Strings are taken as-is; integers, floats and booleans are rendered to
/// text so that e.g. `zone-id = 19` and `zone-id = "19"` are equivalent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.0
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = Text;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [position.left]
        x = 1
        y = 2.5

        [position.right]
        x = "3"
        y = 4

        [position.depth]
        top = 0
        bottom = 100

        [segy.trace-position]

        [segy.trace-number]
    "#;

    #[test]
    fn test_minimal_config_applies_defaults() {
        let config = Config::from_toml_str(MINIMAL).expect("parse minimal config");
        assert_eq!(config.position.left.x.value(), 1.0);
        assert_eq!(config.position.left.y.value(), 2.5);
        assert_eq!(config.position.right.x.value(), 3.0);
        assert_eq!(config.coordinate_reference_system.map_projection.as_str(), "");
        assert_eq!(config.coordinate_reference_system.vertical_units.as_str(), "");

        let tp = &config.segy.trace_position;
        assert!(tp.use_source_coord_fields);
        assert!(tp.use_group_coord_fields);
        assert!(tp.use_cdp_coord_fields);
        assert_eq!(tp.base_trace_number, 0);

        let tn = &config.segy.trace_number;
        assert!(tn.use_trace_number_field);
        assert!(tn.use_crossline_number_field);
    }

    #[test]
    fn test_numeric_zone_id_is_rendered_as_text() {
        let text = format!(
            "{}\n[coordinate-reference-system]\nzone-id = 19\n",
            MINIMAL
        );
        let config = Config::from_toml_str(&text).expect("parse config");
        assert_eq!(config.coordinate_reference_system.zone_id.as_str(), "19");
    }

    #[test]
    fn test_missing_depth_is_configuration_error() {
        let text = r#"
            [position.left]
            x = 1
            y = 2
            [position.right]
            x = 3
            y = 4
            [segy.trace-position]
            [segy.trace-number]
        "#;
        let err = Config::from_toml_str(text).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("depth"), "got: {}", err);
    }

    #[test]
    fn test_missing_segy_table_is_configuration_error() {
        let text = r#"
            [position.left]
            x = 1
            y = 2
            [position.right]
            x = 3
            y = 4
            [position.depth]
            top = 0
            bottom = 1
        "#;
        let err = Config::from_toml_str(text).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_non_numeric_coordinate_is_configuration_error() {
        let text = MINIMAL.replace("x = \"3\"", "x = \"east\"");
        let err = Config::from_toml_str(&text).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("east"), "got: {}", err);
    }

    #[test]
    fn test_boolean_coordinate_is_rejected() {
        let text = MINIMAL.replace("y = 4", "y = true");
        let err = Config::from_toml_str(&text).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_wrong_flag_type_is_rejected() {
        let text = MINIMAL.replace(
            "[segy.trace-number]",
            "[segy.trace-number]\nuse-trace-number-field = \"yes\"",
        );
        let err = Config::from_toml_str(&text).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
