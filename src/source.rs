use crate::ConvertError;
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use std::path::Path;
use tracing::{debug, info};

/// Decodes `file` and resamples it to exactly `width` x `height` RGBA8. The
/// aspect ratio is not kept.
pub fn decode_and_resize(
    file: &Path,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbaImage, ConvertError> {
    let read_error = |source| ConvertError::Read {
        path: file.to_path_buf(),
        source,
    };
    let img = ImageReader::open(file)
        .map_err(read_error)?
        .with_guessed_format()
        .map_err(read_error)?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: file.to_path_buf(),
            source,
        })?;
    info!("Opened image {}", file.display());
    debug!("Source is {}x{} {:?}", img.width(), img.height(), img.color());

    // alpha is resampled at 8 bits, whatever the source depth
    let img = img.into_rgba8();
    info!("To rgba 8 bit");

    if width == 0 || height == 0 {
        debug!("Empty target size, skipping resample");
        return Ok(RgbaImage::new(width, height));
    }

    let img = imageops::resize(&img, width, height, filter);
    info!("Resized to {}x{} with {:?}", width, height, filter);
    Ok(img)
}
