use fast_image_resize::Resizer;
use fast_image_resize::images::Image;
use image::{DynamicImage, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageProcessingError {
    #[error("Failed to load image: {0}")]
    LoadError(#[from] image::ImageError),

    #[error("Failed to resize image: {0}")]
    ResizeError(String),

    #[error("Invalid image dimensions")]
    InvalidDimensions,
}

pub type ImageResult<T> = Result<T, ImageProcessingError>;

#[derive(Debug, Clone)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
    pub ratio: f64,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ratio: calculate_aspect_ratio(width, height),
        }
    }

    /// Height matching `width` at this ratio, at least one pixel.
    pub fn height_for_width(&self, width: u32) -> u32 {
        if self.ratio <= 0.0 {
            return 1;
        }
        ((width as f64 / self.ratio).round() as u32).max(1)
    }
}

pub fn calculate_aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    width as f64 / height as f64
}

/// Downscale to `max_width` keeping the aspect ratio. Narrower images are
/// returned unchanged; nothing is upscaled.
pub fn scale_to_width(image: &DynamicImage, max_width: u32) -> ImageResult<RgbaImage> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ImageProcessingError::InvalidDimensions);
    }

    let rgba_image = image.to_rgba8();
    if width <= max_width {
        return Ok(rgba_image);
    }

    let target_width = max_width.max(1);
    let target_height = AspectRatio::new(width, height).height_for_width(target_width);

    let src_image = Image::from_vec_u8(
        width,
        height,
        rgba_image.into_raw(),
        fast_image_resize::PixelType::U8x4,
    )
    .map_err(|e| ImageProcessingError::ResizeError(e.to_string()))?;

    let mut dst_image = Image::new(
        target_width,
        target_height,
        fast_image_resize::PixelType::U8x4,
    );

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, None)
        .map_err(|e| ImageProcessingError::ResizeError(e.to_string()))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or(ImageProcessingError::InvalidDimensions)
}

pub fn is_supported_extension(ext: &str) -> bool {
    matches!(
        ext.to_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tiff" | "tif" | "ico" | "avif"
    )
}

pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(is_supported_extension)
        .unwrap_or(false)
}
