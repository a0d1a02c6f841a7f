use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use ocrscan::ocr::{OcrEngine, Raster};
use ocrscan::Result;

/// White page with solid dark bars standing in for text lines.
pub fn page_with_bars(width: u32, height: u32, bars: &[std::ops::Range<u32>]) -> DynamicImage {
    let mut gray = GrayImage::from_pixel(width, height, Luma([245]));
    for rows in bars {
        for y in rows.clone() {
            for x in width / 8..width - width / 8 {
                gray.put_pixel(x, y, Luma([15]));
            }
        }
    }
    DynamicImage::ImageLuma8(gray)
}

/// Write `img` into `dir` in the format implied by the file extension.
pub fn write_fixture(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    let format = ImageFormat::from_path(&path).expect("fixture name needs an image extension");
    img.to_rgb8()
        .save_with_format(&path, format)
        .unwrap_or_else(|e| panic!("Failed to write fixture '{name}': {e}"));
    path
}

/// Engine double that returns canned text and records what it was given.
#[derive(Default)]
pub struct ScriptedEngine {
    pub text: Option<String>,
    pub images_seen: usize,
    pub last_image_len: usize,
}

impl ScriptedEngine {
    pub fn returning(text: Option<&str>) -> Self {
        Self {
            text: text.map(String::from),
            ..Self::default()
        }
    }
}

impl OcrEngine<Raster> for ScriptedEngine {
    fn set_image(&mut self, raster: &Raster) -> Result<()> {
        self.images_seen += 1;
        self.last_image_len = raster.encoded().len();
        Ok(())
    }

    fn recognize_text(&mut self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }
}
