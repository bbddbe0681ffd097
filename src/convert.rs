//! End-to-end conversion of an image file into a SEG-Y file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dataset::ImageDataset;
use crate::error::Img2SegyError;
use crate::geometry::Geometry;
use crate::mapper::TraceHeaderMapper;
use crate::segy::{write_segy, Dataset};

/// Options for [`convert`].
#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    /// Overwrite the output file if it already exists.
    pub force: bool,
}

/// The output path used when none is given: the image path with a `.segy`
/// extension.
pub fn default_segy_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("segy")
}

/// The configuration path used when none is given: the image path with a
/// `.toml` extension.
pub fn default_config_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("toml")
}

/// Converts an image to SEG-Y.
///
/// Configuration is loaded and validated before the image is decoded, and
/// all reel headers are computed before the output file is created, so
/// configuration problems never leave a file behind. If writing fails
/// part-way the partial output is removed.
///
/// Returns the path of the written SEG-Y file.
///
/// # Errors
/// Configuration problems are reported as [`Img2SegyError::Configuration`]
/// or [`Img2SegyError::ConfigParse`]; see [`Img2SegyError`] for the rest.
pub fn convert(
    image_path: &Path,
    segy_path: Option<&Path>,
    config_path: Option<&Path>,
    opts: &ConvertOptions,
) -> Result<PathBuf, Img2SegyError> {
    let segy_path = segy_path.map_or_else(|| default_segy_path(image_path), Path::to_path_buf);
    let config_path =
        config_path.map_or_else(|| default_config_path(image_path), Path::to_path_buf);

    info!(segy_path = %segy_path.display(), "output");
    info!(image_path = %image_path.display(), "input");
    info!(config_path = %config_path.display(), "configuration");

    let config = Config::load(&config_path)?;
    let geometry = Geometry::from_config(&config)?;
    let trace_header_mapper = TraceHeaderMapper::from_config(&config);
    debug!(%geometry, ?trace_header_mapper, "configuration loaded");

    if !trace_header_mapper.has_position_field() {
        warn!("no trace position fields are enabled; traces will carry no coordinates");
    }
    if !trace_header_mapper.has_trace_number_field() {
        warn!("no trace number fields are enabled; traces will carry no trace numbers");
    }

    let image = image::open(image_path).map_err(|source| Img2SegyError::ImageDecode {
        path: image_path.to_path_buf(),
        source,
    })?;

    let dataset =
        ImageDataset::new(&image, &geometry, &trace_header_mapper).with_source_path(image_path);
    info!(
        width = dataset.width(),
        height = dataset.height(),
        "image decoded"
    );

    // Fail on header problems before touching the filesystem.
    dataset.textual_reel_header()?;
    dataset.binary_reel_header()?;

    write_segy_file(&segy_path, &dataset, opts)?;
    info!(
        traces = dataset.num_traces(),
        samples_per_trace = dataset.samples_per_trace(),
        "conversion complete"
    );
    Ok(segy_path)
}

/// Writes `dataset` to `path`, removing the file again if writing fails.
pub fn write_segy_file<D>(path: &Path, dataset: &D, opts: &ConvertOptions) -> Result<(), Img2SegyError>
where
    D: Dataset + ?Sized,
{
    let file = create_output(path, opts.force)?;
    let result = write_to(file, dataset);
    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "could not remove partial output");
        }
    }
    result
}

fn create_output(path: &Path, force: bool) -> Result<File, Img2SegyError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => Img2SegyError::OutputExists {
            path: path.to_path_buf(),
        },
        _ => Img2SegyError::Io(e),
    })
}

fn write_to<D>(file: File, dataset: &D) -> Result<(), Img2SegyError>
where
    D: Dataset + ?Sized,
{
    let mut writer = BufWriter::new(file);
    write_segy(&mut writer, dataset)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_replace_extension() {
        let image = Path::new("/surveys/line-7.png");
        assert_eq!(default_segy_path(image), PathBuf::from("/surveys/line-7.segy"));
        assert_eq!(default_config_path(image), PathBuf::from("/surveys/line-7.toml"));
    }

    #[test]
    fn test_default_paths_without_extension() {
        let image = Path::new("scan");
        assert_eq!(default_segy_path(image), PathBuf::from("scan.segy"));
    }
}
