pub mod bitmap;
pub mod c_array;
pub mod display_constants;
pub mod prompt;
pub mod source;

use crate::bitmap::Bitmap;
use crate::display_constants::{BITMAP_NAME, PIXEL_HEIGHT, PIXEL_WIDTH};
use image::imageops::FilterType;
use image::ImageError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: ImageError },
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub width: u32,
    pub height: u32,
    pub name: String,
    pub filter: FilterType,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: PIXEL_WIDTH,
            height: PIXEL_HEIGHT,
            name: BITMAP_NAME.to_string(),
            filter: FilterType::CatmullRom,
        }
    }
}

pub fn convert(file: &Path, options: &ConvertOptions) -> Result<Bitmap, ConvertError> {
    let img = source::decode_and_resize(file, options.width, options.height, options.filter)?;
    let bitmap = Bitmap::from_rgba(&img);
    info!(
        "Image packed to 1bit format, {} bytes for {}",
        bitmap.bytes.len(),
        options.name
    );
    Ok(bitmap)
}
