use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Image scanned when neither `--image` nor `OCR_IMAGE_PATH` is given.
pub const DEFAULT_IMAGE_PATH: &str = "ktp.jpeg";

/// Tesseract language pack used when nothing else is configured.
pub const DEFAULT_LANGUAGES: &str = "eng";

pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 128;

pub const DEFAULT_MIN_LINE_HEIGHT: u32 = 5;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    match env::var(var) {
        Ok(val) if !val.trim().is_empty() => Some(PathBuf::from(val)),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub image_path: PathBuf,
    pub ocr: OcrConfig,
    pub preprocessing: PreprocessConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// `+`-joined Tesseract language codes, e.g. `eng+ind`.
    pub languages: String,
    /// Directory holding `*.traineddata`; `None` lets Tesseract use `TESSDATA_PREFIX`.
    pub data_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessConfig {
    pub enabled: bool,
    pub binarize: bool,
    pub threshold: u8,
    pub stretch_contrast: bool,
    pub min_line_height: u32,
    pub debug_image: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl LogFormat {
    pub fn from_env() -> Self {
        parse_env_or("LOG_FORMAT", LogFormat::Text)
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.to_string(),
            data_path: None,
        }
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            binarize: true,
            threshold: DEFAULT_BINARIZE_THRESHOLD,
            stretch_contrast: false,
            min_line_height: DEFAULT_MIN_LINE_HEIGHT,
            debug_image: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: env_path("OCR_IMAGE_PATH")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_PATH)),
            ocr: OcrConfig {
                languages: env::var("OCR_LANGUAGES")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LANGUAGES.to_string()),
                data_path: env_path("OCR_DATA_PATH"),
            },
            preprocessing: PreprocessConfig {
                enabled: parse_env_or("OCR_PREPROCESS", false),
                binarize: parse_env_or("OCR_BINARIZE", true),
                threshold: parse_env_or("OCR_BINARIZE_THRESHOLD", DEFAULT_BINARIZE_THRESHOLD),
                stretch_contrast: parse_env_or("OCR_STRETCH_CONTRAST", false),
                min_line_height: parse_env_or("OCR_MIN_LINE_HEIGHT", DEFAULT_MIN_LINE_HEIGHT),
                debug_image: env_path("OCR_DEBUG_IMAGE"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
