use crate::core::{ResizeError, ResizeResult};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

pub struct ImageLoader;

impl ImageLoader {
    /// The format is detected from the content, not the file name.
    pub fn decode(data: &[u8]) -> ResizeResult<DynamicImage> {
        image::load_from_memory(data).map_err(|source| ResizeError::Decode { source })
    }

    pub fn encode_png(canvas: RgbaImage) -> ResizeResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(canvas)
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|source| ResizeError::Encode { source })?;
        Ok(buffer.into_inner())
    }
}
