use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use tracing::{debug, info};

use super::layout::{segment_lines, LineBand};
use super::preprocessing::preprocess;
use crate::config::PreprocessConfig;
use crate::error::{Result, ScanError};

/// What the pipeline needs to know about a loaded raster besides handing it
/// to the engine.
pub trait RasterImage {
    fn dimensions(&self) -> (u32, u32);

    /// Text line bands found while preprocessing, empty when none were computed.
    fn line_bands(&self) -> &[LineBand] {
        &[]
    }
}

/// Source of decoded rasters. The returned raster is owned by the caller and
/// released when dropped.
pub trait ImageLoader {
    type Raster: RasterImage;

    fn load(&self, path: &Path) -> Result<Self::Raster>;
}

/// A decoded image together with the encoded bytes handed to Leptonica.
#[derive(Debug)]
pub struct Raster {
    source: PathBuf,
    image: DynamicImage,
    encoded: Vec<u8>,
    lines: Vec<LineBand>,
}

impl Raster {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Bytes in a format Leptonica can read: the original file contents, or a
    /// PNG encoding of the preprocessed raster.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }
}

impl RasterImage for Raster {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn line_bands(&self) -> &[LineBand] {
        &self.lines
    }
}

/// Loads rasters from disk with the `image` crate, optionally preprocessing them.
#[derive(Debug, Clone, Default)]
pub struct ImageFileLoader {
    preprocessing: PreprocessConfig,
}

impl ImageFileLoader {
    pub fn new(preprocessing: PreprocessConfig) -> Self {
        Self { preprocessing }
    }
}

impl ImageLoader for ImageFileLoader {
    type Raster = Raster;

    fn load(&self, path: &Path) -> Result<Raster> {
        let bytes = fs::read(path).map_err(|e| ScanError::image_load(path, e))?;

        let image = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| ScanError::image_load(path, format!("Failed to read image: {e}")))?
            .decode()
            .map_err(|e| ScanError::image_load(path, format!("Failed to decode image: {e}")))?;

        let (width, height) = image.dimensions();
        info!(path = %path.display(), width, height, "Loaded image");

        if !self.preprocessing.enabled {
            return Ok(Raster {
                source: path.to_path_buf(),
                image,
                encoded: bytes,
                lines: Vec::new(),
            });
        }

        let gray = preprocess(&image, &self.preprocessing)?;
        let lines = segment_lines(&gray, self.preprocessing.min_line_height);
        debug!(lines = lines.len(), "Segmented text lines");

        let image = DynamicImage::ImageLuma8(gray);
        let mut encoded = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .map_err(|e| ScanError::Preprocessing(format!("Failed to encode image: {e}")))?;

        Ok(Raster {
            source: path.to_path_buf(),
            image,
            encoded,
            lines,
        })
    }
}
