use leptess::LepTess;
use tracing::{debug, info};

use super::raster::Raster;
use crate::config::OcrConfig;
use crate::error::{Result, ScanError};

/// A text recognizer that accepts rasters of type `R`.
pub trait OcrEngine<R> {
    /// Make `raster` the input of the next [`recognize_text`](Self::recognize_text) call.
    fn set_image(&mut self, raster: &R) -> Result<()>;

    /// Recognize the whole current image. `None` means the engine produced no
    /// text buffer at all.
    fn recognize_text(&mut self) -> Result<Option<String>>;
}

pub struct TesseractEngine {
    tess: LepTess,
    languages: String,
}

fn create_tesseract(config: &OcrConfig) -> std::result::Result<LepTess, String> {
    let data_path = match &config.data_path {
        Some(path) => Some(
            path.to_str()
                .ok_or_else(|| format!("tessdata path is not valid UTF-8: {}", path.display()))?,
        ),
        None => None,
    };
    LepTess::new(data_path, &config.languages).map_err(|e| e.to_string())
}

impl TesseractEngine {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let tess = create_tesseract(config).map_err(|e| {
            ScanError::EngineInit(format!("language '{}': {e}", config.languages))
        })?;
        info!(languages = %config.languages, "Tesseract OCR initialized");

        Ok(Self {
            tess,
            languages: config.languages.clone(),
        })
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }
}

impl OcrEngine<Raster> for TesseractEngine {
    fn set_image(&mut self, raster: &Raster) -> Result<()> {
        self.tess.set_image_from_mem(raster.encoded()).map_err(|e| {
            ScanError::image_load(raster.source(), format!("Leptonica rejected image: {e}"))
        })?;
        debug!(
            bytes = raster.encoded().len(),
            color = ?raster.image().color(),
            "Image handed to Tesseract"
        );
        Ok(())
    }

    fn recognize_text(&mut self) -> Result<Option<String>> {
        let text = self
            .tess
            .get_utf8_text()
            .map_err(|e| ScanError::Recognition(format!("Failed to extract text: {e}")))?;
        Ok(Some(text))
    }
}
