use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, ScanError};
use crate::ocr::{ImageLoader, LineBand, OcrEngine, RasterImage};
use crate::words::{split_words, word_count};

/// Text recognized from one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub lines: Vec<LineBand>,
}

impl Recognition {
    pub fn words(&self) -> Vec<&str> {
        split_words(&self.text)
    }
}

/// Load `path`, hand the raster to `engine` and return the recognized text.
///
/// The raster is owned by this function and dropped before it returns,
/// whichever branch is taken. An engine result that is missing, empty or
/// whitespace-only is a recognition error.
pub fn recognize<L, E>(loader: &L, engine: &mut E, path: &Path) -> Result<Recognition>
where
    L: ImageLoader,
    E: OcrEngine<L::Raster>,
{
    let raster = loader.load(path)?;
    let (width, height) = raster.dimensions();

    engine.set_image(&raster)?;

    let text = engine
        .recognize_text()?
        .ok_or_else(|| ScanError::Recognition("engine returned no text".to_string()))?;

    if text.trim().is_empty() {
        return Err(ScanError::Recognition(format!(
            "no text found in {}",
            path.display()
        )));
    }

    let lines = raster.line_bands().to_vec();
    drop(raster);
    debug!("Released raster");

    info!(
        chars = text.chars().count(),
        words = word_count(&text),
        lines = lines.len(),
        "Recognized text"
    );

    Ok(Recognition {
        text,
        width,
        height,
        lines,
    })
}
