use std::path::PathBuf;
use thiserror::Error;

/// The main error type for img2segy operations.
#[derive(Debug, Error)]
pub enum Img2SegyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse configuration from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid coordinate scalar {scalar}: xy_scalar cannot be zero")]
    InvalidScalar { scalar: f64 },

    #[error("Cannot compute a sample interval from {num_samples} sample(s); at least 2 are required")]
    TooFewSamples { num_samples: usize },

    #[error("Value {value} does not fit in SEG-Y field '{field}'")]
    ValueOutOfRange { field: &'static str, value: f64 },

    #[error("Trace {trace_index} has {actual} sample(s) but the binary header declares {expected}")]
    TraceLength {
        trace_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Output file {path} already exists (use --force to overwrite)")]
    OutputExists { path: PathBuf },
}

impl Img2SegyError {
    /// Builds a configuration error from any displayable cause.
    pub fn configuration(message: impl std::fmt::Display) -> Self {
        Img2SegyError::Configuration {
            message: message.to_string(),
        }
    }

    /// Returns true if the error was caused by bad or missing configuration.
    ///
    /// The CLI maps these to a dedicated exit code so that callers can tell
    /// "fix your TOML" apart from data or I/O failures.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Img2SegyError::Configuration { .. } | Img2SegyError::ConfigParse { .. }
        )
    }
}
