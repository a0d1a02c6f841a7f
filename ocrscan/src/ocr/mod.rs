//! OCR (Optical Character Recognition) Module
//!
//! Wraps the two external collaborators of a scan behind small traits:
//! - `ImageLoader` decodes a file into an owned raster (`ImageFileLoader`,
//!   backed by the `image` crate)
//! - `OcrEngine` recognizes text from a raster (`TesseractEngine`, backed by
//!   Tesseract and Leptonica through leptess)
//!
//! Rasters and engine text buffers are plain owned values, so they are
//! released on every exit path when they go out of scope.
//!
//! # Preprocessing
//!
//! Disabled by default. When `PreprocessConfig::enabled` is set the loader
//! converts to grayscale, optionally stretches contrast and binarizes, and
//! segments the result into text line bands.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut engine = TesseractEngine::new(&config.ocr)?;
//! let loader = ImageFileLoader::new(config.preprocessing.clone());
//! let recognition = pipeline::recognize(&loader, &mut engine, &config.image_path)?;
//! ```

mod engine;
mod layout;
mod preprocessing;
mod raster;

pub use engine::{OcrEngine, TesseractEngine};
pub use layout::{segment_lines, LineBand, INK_THRESHOLD};
pub use preprocessing::{binarize, preprocess, stretch_contrast, to_grayscale};
pub use raster::{ImageFileLoader, ImageLoader, Raster, RasterImage};
