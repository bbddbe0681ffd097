//! img2segy: convert raster images into SEG-Y seismic files.
//!
//! Each column of the image becomes one trace, each row one sample. Traces
//! are positioned along a straight geographic transect given in a TOML
//! configuration file, and the depth (or time) range of the image determines
//! the sample interval.
//!
//! # Modules
//!
//! - [`config`]: Typed TOML configuration
//! - [`geometry`]: The transect and depth range
//! - [`units`]: Free-text unit classification
//! - [`mapper`]: Which trace header fields receive computed values
//! - [`dataset`]: An image presented as a SEG-Y dataset
//! - [`segy`]: SEG-Y Revision 1 structures and writer
//! - [`convert`]: End-to-end file conversion
//! - [`error`]: Error types for img2segy operations
//!
//! # Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use img2segy::dataset::ImageDataset;
//! use img2segy::geometry::{CoordinateReferenceSystem, Geometry, Point2};
//! use img2segy::mapper::TraceHeaderMapper;
//! use img2segy::segy::write_segy;
//!
//! let geometry = Geometry::new(
//!     Point2::new(527501.0, 4840781.0),
//!     Point2::new(527326.0, 4829018.0),
//!     0.0,
//!     4.3,
//!     CoordinateReferenceSystem::default(),
//! );
//! let mapper = TraceHeaderMapper::default();
//! let image = GrayImage::from_pixel(8, 4, Luma([128]));
//! let dataset = ImageDataset::from_luma(&image, &geometry, &mapper);
//!
//! let mut bytes = Vec::new();
//! write_segy(&mut bytes, &dataset)?;
//! assert_eq!(bytes.len(), 3200 + 400 + 8 * (240 + 4));
//! # Ok::<(), img2segy::Img2SegyError>(())
//! ```

pub mod config;
pub mod convert;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod segy;
pub mod units;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

pub use error::Img2SegyError;

/// The img2segy CLI application.
#[derive(Parser)]
#[command(name = "img2segy")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// The logging level to use (overridden by RUST_LOG).
    #[arg(long, value_enum, ignore_case = true, default_value_t = Verbosity::Warn, global = true)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Log levels accepted by `--verbosity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    #[value(alias = "critical")]
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    #[value(alias = "notset")]
    Trace,
}

impl Verbosity {
    fn directive(self) -> &'static str {
        match self {
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert an image to SEG-Y.
    Convert(ConvertArgs),
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Image file to convert.
    image: PathBuf,

    /// Input configuration TOML file (default: IMAGE with a .toml extension).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SEG-Y file (default: IMAGE with a .segy extension).
    #[arg(long)]
    segy: Option<PathBuf>,

    /// Overwrite the output file if it exists.
    #[arg(long)]
    force: bool,
}

/// Run the img2segy CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Img2SegyError> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            println!("img2segy {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Convert raster images into SEG-Y seismic files.");
            println!();
            println!("Run 'img2segy --help' for usage information.");
            Ok(())
        }
    }
}

/// Installs the process-wide log subscriber, writing to stderr.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), Img2SegyError> {
    let opts = convert::ConvertOptions { force: args.force };
    convert::convert(
        &args.image,
        args.segy.as_deref(),
        args.config.as_deref(),
        &opts,
    )?;
    Ok(())
}
