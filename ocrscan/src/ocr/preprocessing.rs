use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::config::PreprocessConfig;
use crate::error::{Result, ScanError};

/// Preprocess a decoded raster for OCR
///
/// Applies, in order:
/// 1. Grayscale conversion
/// 2. Histogram contrast stretch (when `stretch_contrast` is set)
/// 3. Fixed-threshold binarization (when `binarize` is set)
///
/// When `debug_image` is configured the result is also written there so the
/// raster Tesseract actually sees can be inspected.
pub fn preprocess(img: &DynamicImage, config: &PreprocessConfig) -> Result<GrayImage> {
    let mut gray = to_grayscale(img);

    if config.stretch_contrast {
        gray = stretch_contrast(gray);
    }

    if config.binarize {
        gray = binarize(&gray, config.threshold);
    }

    if let Some(path) = &config.debug_image {
        gray.save(path).map_err(|e| {
            ScanError::Preprocessing(format!(
                "Failed to write debug image {}: {e}",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), "Wrote preprocessed image");
    }

    Ok(gray)
}

pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Map every pixel strictly above `threshold` to white, everything else to black
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Enhance contrast using histogram stretching
///
/// Maps the darkest pixel to 0 and the lightest to 255, scaling all
/// intermediate values linearly. Flat images are returned unchanged.
pub fn stretch_contrast(gray: GrayImage) -> GrayImage {
    let (min_val, max_val) = gray
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));

    if max_val <= min_val {
        return gray;
    }

    let range = (max_val - min_val) as f32;
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let normalized = (gray.get_pixel(x, y)[0] - min_val) as f32 / range;
        Luma([(normalized * 255.0).round() as u8])
    })
}
