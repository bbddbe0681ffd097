#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ByteOrder};
use image::{GrayImage, Luma};

pub const EXAMPLE_CONFIG: &str = include_str!("../fixtures/example.toml");

pub const TEXTUAL_LEN: usize = 3200;
pub const BINARY_LEN: usize = 400;
pub const TRACE_HEADER_LEN: usize = 240;

/// A grayscale image whose pixel at (x, y) is `(x * 7 + y * 3) % 256`.
pub fn pattern_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x * 7 + y * 3) % 256) as u8]))
}

pub fn write_png(path: &Path, image: &GrayImage) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    image.save(path).expect("write png file");
}

/// Writes `image` as `<dir>/<stem>.png` and `config` as `<dir>/<stem>.toml`,
/// returning the image path.
pub fn write_image_with_config(dir: &Path, stem: &str, image: &GrayImage, config: &str) -> PathBuf {
    let image_path = dir.join(format!("{}.png", stem));
    write_png(&image_path, image);
    fs::write(dir.join(format!("{}.toml", stem)), config).expect("write config");
    image_path
}

/// Offset of trace `index`'s header within a file of `samples`-long traces.
pub fn trace_offset(index: usize, samples: usize) -> usize {
    TEXTUAL_LEN + BINARY_LEN + index * (TRACE_HEADER_LEN + samples)
}

/// Reads a big-endian i32 at a 1-based SEG-Y trace header byte position.
pub fn trace_i32(bytes: &[u8], trace_start: usize, byte_pos: usize) -> i32 {
    let at = trace_start + byte_pos - 1;
    BigEndian::read_i32(&bytes[at..at + 4])
}

/// Reads a big-endian i16 at a 1-based SEG-Y trace header byte position.
pub fn trace_i16(bytes: &[u8], trace_start: usize, byte_pos: usize) -> i16 {
    let at = trace_start + byte_pos - 1;
    BigEndian::read_i16(&bytes[at..at + 2])
}

/// Reads a big-endian u16 at a 1-based SEG-Y file byte position
/// (e.g. 3217 for the binary header sample interval).
pub fn file_u16(bytes: &[u8], byte_pos: usize) -> u16 {
    let at = byte_pos - 1;
    BigEndian::read_u16(&bytes[at..at + 2])
}
